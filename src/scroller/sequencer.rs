use tracing::{debug, trace};

use super::threshold;
use super::{
    Direction, FrameScheduler, IndexWindow, Overflow, ReflowGuard, ScrollContainer,
    ScrollCorrection,
};
use crate::config::ScrollerConfig;

/// Serializes window slides and keeps the viewport visually still across them.
///
/// A slide cycle runs `Idle -> Locked -> Idle`:
/// 1. [`handle_scroll`](Self::handle_scroll) or
///    [`request_slide`](Self::request_slide) takes the lock, captures the
///    offset, hides overflow and publishes the slid window.
/// 2. [`commit`](Self::commit) lays out the new window, writes the
///    compensating offset and schedules the unlock on the frame scheduler.
/// 3. The host paints, then runs the frame scheduler, which releases the lock.
///
/// The window is view state: publishing it bumps a revision that the next
/// commit consumes. The lock and the pending correction are control state and
/// never cause a commit on their own.
#[derive(Debug)]
pub struct InfiniteScroller {
    config: ScrollerConfig,
    window: IndexWindow,
    revision: u64,
    committed: u64,
    loading: bool,
    cycle: u64,
    reflow: ReflowGuard,
    centered: bool,
}

impl InfiniteScroller {
    /// `config` must already have passed [`ScrollerConfig::validate`].
    pub fn new(config: ScrollerConfig) -> Self {
        Self {
            window: IndexWindow::initial(config.total_items),
            config,
            revision: 0,
            committed: 0,
            loading: false,
            cycle: 0,
            reflow: ReflowGuard::new(),
            centered: false,
        }
    }

    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    pub fn window(&self) -> IndexWindow {
        self.window
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending_correction(&self) -> Option<ScrollCorrection> {
        self.reflow.pending()
    }

    /// A window has been published that the container has not laid out yet.
    pub fn needs_commit(&self) -> bool {
        self.revision != self.committed
    }

    pub fn content_extent(&self) -> u32 {
        self.config.content_extent()
    }

    /// Lay out the current window in a freshly attached container.
    ///
    /// The first mount also centers the offset so there is room to scroll
    /// both ways.
    pub fn mount<C: ScrollContainer>(&mut self, container: &mut C) {
        container.set_content_extent(self.content_extent());
        self.committed = self.revision;
        if !self.centered {
            let offset =
                container.content_extent().saturating_sub(container.viewport_extent()) / 2;
            container.set_offset(offset);
            self.centered = true;
            debug!(offset, window = %self.window, "scroller mounted");
        }
    }

    /// Abandon any in-flight cycle; `container` is being detached.
    pub fn unmount<C: ScrollContainer>(&mut self, container: &mut C) {
        if self.reflow.pending().is_some() {
            container.set_overflow(Overflow::Scroll);
            self.reflow.clear();
        }
        if self.loading {
            debug!(window = %self.window, "slide abandoned on unmount");
        }
        self.loading = false;
    }

    /// React to a scroll event on `container`.
    ///
    /// Returns the direction of the slide it started, if any.
    pub fn handle_scroll<C: ScrollContainer>(
        &mut self,
        container: Option<&mut C>,
    ) -> Option<Direction> {
        if self.loading {
            trace!("scroll ignored while loading");
            return None;
        }
        let container = container?;
        let report = container.report();
        let direction = threshold::detect(&report, self.config.edge_threshold)?;
        self.request_slide(direction, Some(container)).then_some(direction)
    }

    /// Start a slide toward `direction`.
    ///
    /// Does nothing and returns `false` while a cycle is in flight or when no
    /// container is attached.
    pub fn request_slide<C: ScrollContainer>(
        &mut self,
        direction: Direction,
        container: Option<&mut C>,
    ) -> bool {
        if self.loading {
            trace!(direction = direction.label(), "slide refused, already loading");
            return false;
        }
        let Some(container) = container else {
            trace!(direction = direction.label(), "slide skipped, no container");
            return false;
        };

        self.loading = true;
        self.cycle += 1;
        let correction = self.reflow.capture(container, direction);
        self.window = self.window.slide(direction, self.config.load_batch_size);
        self.revision += 1;
        debug!(
            direction = direction.label(),
            previous_offset = correction.previous_offset,
            window = %self.window,
            "slide requested"
        );
        true
    }

    /// Apply the published window to `container` and correct its offset.
    ///
    /// Runs after the window changed and before the frame is painted. The
    /// lock stays held until `frames` runs after that paint. Returns the
    /// corrected offset when a correction was applied.
    pub fn commit<C: ScrollContainer>(
        &mut self,
        container: Option<&mut C>,
        frames: &mut FrameScheduler<Self>,
    ) -> Option<u32> {
        if !self.needs_commit() {
            return None;
        }
        let container = container?;
        container.set_content_extent(self.content_extent());
        self.committed = self.revision;

        let offset = self.reflow.apply(container, self.config.batch_extent())?;
        let cycle = self.cycle;
        frames.request_frame(move |scroller: &mut Self| scroller.release_lock(cycle));
        Some(offset)
    }

    fn release_lock(&mut self, cycle: u64) {
        if !self.loading || cycle != self.cycle {
            trace!(cycle, current = self.cycle, "stale unlock ignored");
            return;
        }
        self.loading = false;
        debug!(window = %self.window, "load lock released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroller::Viewport;

    fn mounted() -> (InfiniteScroller, Viewport, FrameScheduler<InfiniteScroller>) {
        let mut scroller = InfiniteScroller::new(ScrollerConfig::default());
        let mut vp = Viewport::new(400);
        scroller.mount(&mut vp);
        vp.listen();
        (scroller, vp, FrameScheduler::new())
    }

    #[test]
    fn mount_centers_the_offset() {
        let (scroller, vp, _) = mounted();
        assert_eq!(vp.content_extent(), 6000);
        assert_eq!(vp.offset(), 2800);
        assert_eq!(scroller.window().to_string(), "[-50..49]");
        assert!(!scroller.needs_commit());
    }

    #[test]
    fn remount_keeps_the_offset() {
        let (mut scroller, mut vp, _) = mounted();
        vp.scroll_to(2000);
        scroller.mount(&mut vp);
        assert_eq!(vp.offset(), 2000);
    }

    #[test]
    fn scrolling_near_top_slides_up_and_compensates() {
        let (mut scroller, mut vp, mut frames) = mounted();
        vp.scroll_to(100);

        assert_eq!(scroller.handle_scroll(Some(&mut vp)), Some(Direction::Up));
        assert!(scroller.is_loading());
        assert_eq!(vp.overflow(), Overflow::Hidden);
        assert_eq!(scroller.window().first(), -75);
        assert_eq!(scroller.window().last(), 24);

        assert_eq!(scroller.commit(Some(&mut vp), &mut frames), Some(1600));
        assert_eq!(vp.offset(), 1600);
        assert_eq!(vp.overflow(), Overflow::Scroll);
        assert_eq!(scroller.pending_correction(), None);
    }

    #[test]
    fn scrolling_near_bottom_slides_down_and_compensates() {
        let (mut scroller, mut vp, mut frames) = mounted();
        vp.scroll_to(5200);

        assert_eq!(scroller.handle_scroll(Some(&mut vp)), Some(Direction::Down));
        assert_eq!(scroller.window().to_string(), "[-25..74]");
        assert_eq!(scroller.commit(Some(&mut vp), &mut frames), Some(3700));
    }

    #[test]
    fn lock_is_held_until_the_frame_after_commit() {
        let (mut scroller, mut vp, mut frames) = mounted();
        vp.scroll_to(100);
        scroller.handle_scroll(Some(&mut vp));
        scroller.commit(Some(&mut vp), &mut frames);

        assert!(scroller.is_loading());
        assert!(frames.is_pending());

        assert_eq!(frames.run(&mut scroller), 1);
        assert!(!scroller.is_loading());
    }

    #[test]
    fn request_while_locked_is_a_no_op() {
        let (mut scroller, mut vp, _) = mounted();
        vp.scroll_to(100);
        assert!(scroller.request_slide(Direction::Up, Some(&mut vp)));
        let window = scroller.window();
        let correction = scroller.pending_correction();

        assert!(!scroller.request_slide(Direction::Down, Some(&mut vp)));
        assert_eq!(scroller.window(), window);
        assert_eq!(scroller.pending_correction(), correction);
    }

    #[test]
    fn scroll_events_are_ignored_while_locked() {
        let (mut scroller, mut vp, mut frames) = mounted();
        vp.scroll_to(100);
        scroller.handle_scroll(Some(&mut vp));
        scroller.commit(Some(&mut vp), &mut frames);

        // Correction already written but not yet painted.
        vp.scroll_to(0);
        assert_eq!(scroller.handle_scroll(Some(&mut vp)), None);
        assert_eq!(scroller.window().first(), -75);
    }

    #[test]
    fn missing_container_takes_no_lock() {
        let mut scroller = InfiniteScroller::new(ScrollerConfig::default());
        assert!(!scroller.request_slide(Direction::Up, None::<&mut Viewport>));
        assert!(!scroller.is_loading());
        assert_eq!(scroller.pending_correction(), None);
        assert_eq!(scroller.handle_scroll(None::<&mut Viewport>), None);
        assert_eq!(scroller.window(), IndexWindow::initial(100));
    }

    #[test]
    fn commit_without_container_waits() {
        let (mut scroller, mut vp, mut frames) = mounted();
        vp.scroll_to(100);
        scroller.handle_scroll(Some(&mut vp));

        assert_eq!(scroller.commit(None::<&mut Viewport>, &mut frames), None);
        assert!(scroller.needs_commit());
        assert!(!frames.is_pending());
    }

    #[test]
    fn report_between_thresholds_changes_nothing() {
        let (mut scroller, mut vp, mut frames) = mounted();
        vp.scroll_to(1000);
        let before = scroller.window();

        assert_eq!(scroller.handle_scroll(Some(&mut vp)), None);
        assert_eq!(scroller.window(), before);
        assert!(!scroller.is_loading());
        assert!(!scroller.needs_commit());
        assert_eq!(scroller.commit(Some(&mut vp), &mut frames), None);
        assert_eq!(vp.offset(), 1000);
        assert_eq!(vp.overflow(), Overflow::Scroll);
    }

    #[test]
    fn stale_unlock_does_not_release_a_newer_cycle() {
        let (mut scroller, mut vp, mut frames) = mounted();
        vp.scroll_to(100);
        scroller.handle_scroll(Some(&mut vp));
        scroller.commit(Some(&mut vp), &mut frames);

        scroller.unmount(&mut vp);
        assert!(!scroller.is_loading());

        scroller.mount(&mut vp);
        vp.scroll_to(100);
        assert!(scroller.request_slide(Direction::Up, Some(&mut vp)));

        // Callback from the abandoned cycle.
        frames.run(&mut scroller);
        assert!(scroller.is_loading());
    }

    #[test]
    fn unmount_mid_cycle_restores_overflow() {
        let (mut scroller, mut vp, _) = mounted();
        vp.scroll_to(100);
        scroller.handle_scroll(Some(&mut vp));
        assert_eq!(vp.overflow(), Overflow::Hidden);

        scroller.unmount(&mut vp);
        assert_eq!(vp.overflow(), Overflow::Scroll);
        assert_eq!(scroller.pending_correction(), None);
        assert!(!scroller.is_loading());
    }

    #[test]
    fn repeated_cycles_keep_window_length() {
        let (mut scroller, mut vp, mut frames) = mounted();
        for _ in 0..6 {
            vp.scroll_to(0);
            assert_eq!(scroller.handle_scroll(Some(&mut vp)), Some(Direction::Up));
            scroller.commit(Some(&mut vp), &mut frames);
            frames.run(&mut scroller);
            assert_eq!(scroller.window().len(), 100);
        }
        assert_eq!(scroller.window().first(), -50 - 6 * 25);
    }
}
