use std::collections::VecDeque;
use std::time::Instant;

use crate::config::ScrollerConfig;
use crate::scroller::{Direction, FrameScheduler, InfiniteScroller, ScrollContainer, Viewport};
use crate::theme::ResolvedTheme;

#[derive(Debug)]
pub struct TaskInfo {
    pub id: u64,
    pub description: String,
    pub started_at: Instant,
}

#[derive(Debug)]
pub struct LogEntry {
    pub message: String,
}

/// Debug panel state: in-flight slide cycles and log messages.
#[derive(Debug, Default)]
pub struct DebugState {
    pub visible: bool,
    pub running_tasks: Vec<TaskInfo>,
    pub log: VecDeque<LogEntry>,
    next_task_id: u64,
}

impl DebugState {
    const MAX_LOG_ENTRIES: usize = 50;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, msg: impl Into<String>) {
        self.log.push_back(LogEntry {
            message: msg.into(),
        });
        if self.log.len() > Self::MAX_LOG_ENTRIES {
            self.log.pop_front();
        }
    }

    pub fn start_task(&mut self, description: impl Into<String>) -> u64 {
        let id = self.next_task_id;
        self.next_task_id += 1;
        let desc = description.into();
        self.log(format!("Started: {}", desc));
        self.running_tasks.push(TaskInfo {
            id,
            description: desc,
            started_at: Instant::now(),
        });
        id
    }

    pub fn end_task(&mut self, id: u64, outcome: &str) {
        if let Some(pos) = self.running_tasks.iter().position(|t| t.id == id) {
            let task = self.running_tasks.remove(pos);
            let elapsed = task.started_at.elapsed();
            self.log(format!("{} {}: {:.2?}", task.description, outcome, elapsed));
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ScrollLines(i32),
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
    ScrollTop,
    ScrollBottom,
    /// Absolute offset in pixels.
    ScrollTo(u32),
    Resize(u16),
    ToggleHelp,
    ToggleDebug,
    Quit,
}

/// Owns the scroller, its viewport and the frame pipeline around them.
///
/// The main loop drives one frame as: `update` for input, then
/// [`App::dispatch_scroll`], [`App::commit`], paint, [`App::after_paint`].
pub struct App {
    pub scroller: InfiniteScroller,
    /// `None` until the first layout tells us how tall the list is.
    pub viewport: Option<Viewport>,
    pub frames: FrameScheduler<InfiniteScroller>,
    pub theme: ResolvedTheme,
    pub debug: DebugState,
    pub show_help: bool,
    pub should_quit: bool,
    pub terminal_height: Option<u16>,
    slide_task: Option<u64>,
    /// Slides settled since the last input; bounds chained slides.
    chained_slides: u32,
}

impl App {
    pub const DEBUG_PANE_HEIGHT: u16 = 10;
    // List borders plus the status bar.
    pub const CHROME_HEIGHT: u16 = 3;
    /// Slides allowed to chain off one another before input is needed again.
    pub const MAX_CHAINED_SLIDES: u32 = 8;

    pub fn new(theme: ResolvedTheme, config: ScrollerConfig) -> Self {
        Self {
            scroller: InfiniteScroller::new(config),
            viewport: None,
            frames: FrameScheduler::new(),
            theme,
            debug: DebugState::new(),
            show_help: false,
            should_quit: false,
            terminal_height: None,
            slide_task: None,
            chained_slides: 0,
        }
    }

    pub fn update(&mut self, msg: Message) {
        if !matches!(msg, Message::Resize(_)) {
            self.chained_slides = 0;
        }
        match msg {
            Message::ScrollLines(lines) => self.scroll_lines(i64::from(lines)),
            Message::HalfPageDown => self.scroll_lines(self.page_lines() / 2),
            Message::HalfPageUp => self.scroll_lines(-(self.page_lines() / 2)),
            Message::PageDown => self.scroll_lines(self.page_lines()),
            Message::PageUp => self.scroll_lines(-self.page_lines()),
            Message::ScrollTop => {
                if let Some(vp) = self.viewport.as_mut() {
                    vp.scroll_to(0);
                }
            }
            Message::ScrollTo(offset) => {
                if let Some(vp) = self.viewport.as_mut() {
                    vp.scroll_to(offset);
                }
            }
            Message::ScrollBottom => {
                if let Some(vp) = self.viewport.as_mut() {
                    vp.scroll_to(vp.max_offset());
                }
            }
            Message::Resize(height) => {
                if self.terminal_height != Some(height) {
                    self.terminal_height = Some(height);
                    self.chained_slides = 0;
                    self.relayout();
                }
            }
            Message::ToggleHelp => self.show_help = !self.show_help,
            Message::ToggleDebug => {
                self.debug.toggle();
                self.relayout();
            }
            Message::Quit => {
                self.teardown();
                self.should_quit = true;
            }
        }
    }

    /// Terminal lines available to the rows.
    pub fn list_lines(&self) -> u16 {
        let Some(height) = self.terminal_height else {
            return 0;
        };
        let debug = if self.debug.visible {
            Self::DEBUG_PANE_HEIGHT
        } else {
            0
        };
        height.saturating_sub(Self::CHROME_HEIGHT + debug)
    }

    fn page_lines(&self) -> i64 {
        (i64::from(self.list_lines()) - 1).max(1)
    }

    fn scroll_lines(&mut self, lines: i64) {
        let line_height = i64::from(self.scroller.config().line_height);
        if let Some(vp) = self.viewport.as_mut() {
            vp.scroll_by(lines * line_height);
        }
    }

    fn relayout(&mut self) {
        if self.terminal_height.is_none() {
            return;
        }
        let extent = u32::from(self.list_lines()).saturating_mul(self.scroller.config().line_height);
        match self.viewport.as_mut() {
            Some(vp) => vp.set_viewport_extent(extent),
            None => self.mount(extent),
        }
    }

    fn mount(&mut self, viewport_extent: u32) {
        let mut vp = Viewport::new(viewport_extent);
        self.scroller.mount(&mut vp);
        vp.listen();
        tracing::info!(
            offset = vp.offset(),
            viewport_extent,
            window = %self.scroller.window(),
            "viewport attached"
        );
        self.debug.log(format!("Mounted at offset {}", vp.offset()));
        self.viewport = Some(vp);
    }

    /// Detach the viewport and its scroll listener.
    pub fn teardown(&mut self) {
        if let Some(mut vp) = self.viewport.take() {
            vp.unlisten();
            self.scroller.unmount(&mut vp);
            tracing::info!("viewport detached");
        }
        if let Some(id) = self.slide_task.take() {
            self.debug.end_task(id, "abandoned");
        }
    }

    /// Deliver the queued scroll event, if any, to the scroller.
    pub fn dispatch_scroll(&mut self) -> Option<Direction> {
        let vp = self.viewport.as_mut()?;
        if !vp.take_scroll_event() {
            return None;
        }
        let direction = self.scroller.handle_scroll(Some(vp))?;
        let id = self.debug.start_task(format!(
            "Slide {} to {}",
            direction.label(),
            self.scroller.window()
        ));
        self.slide_task = Some(id);
        Some(direction)
    }

    /// Lay out a newly published window and correct the offset before paint.
    pub fn commit(&mut self) -> Option<u32> {
        let offset = self.scroller.commit(self.viewport.as_mut(), &mut self.frames)?;
        self.debug.log(format!("Corrected offset to {offset}"));
        Some(offset)
    }

    /// Run the frame callbacks of the frame that was just painted.
    pub fn after_paint(&mut self) {
        self.frames.run(&mut self.scroller);
        if !self.scroller.is_loading()
            && let Some(id) = self.slide_task.take()
        {
            self.debug.end_task(id, "settled");
            self.chained_slides += 1;
            let Some(vp) = self.viewport.as_mut() else {
                return;
            };
            if self.chained_slides < Self::MAX_CHAINED_SLIDES {
                // Scroll events seen while locked were dropped; look again now
                // that the corrected offset is on screen.
                vp.notify_scroll();
            } else {
                // Content too short for the edge threshold: both edges keep
                // triggering. Wait for input instead of sliding forever.
                vp.take_scroll_event();
                tracing::warn!(
                    slides = self.chained_slides,
                    window = %self.scroller.window(),
                    "slides keep chaining, waiting for input"
                );
                self.debug
                    .log(format!("Stopped after {} chained slides", self.chained_slides));
            }
        }
    }

    /// Whether the next frame has a scroll event to deliver.
    pub fn has_pending_scroll(&self) -> bool {
        self.viewport.as_ref().is_some_and(Viewport::has_scroll_event)
    }

    pub fn offset(&self) -> Option<u32> {
        self.viewport.as_ref().map(|vp| vp.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroller::Overflow;
    use crate::test_utils::{TestAppBuilder, run_frame};

    #[test]
    fn new_app_has_no_viewport() {
        let app = TestAppBuilder::new().build();
        assert!(app.viewport.is_none());
        assert_eq!(app.list_lines(), 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn first_resize_mounts_and_centers() {
        let app = TestAppBuilder::new().terminal_height(23).build();
        // 20 list lines * 20px = 400px; (6000 - 400) / 2
        assert_eq!(app.list_lines(), 20);
        assert_eq!(app.offset(), Some(2800));
        assert!(app.viewport.as_ref().unwrap().is_listening());
    }

    #[test]
    fn scrolling_without_viewport_is_a_no_op() {
        let mut app = TestAppBuilder::new().build();
        app.update(Message::ScrollTop);
        assert_eq!(app.dispatch_scroll(), None);
        assert_eq!(app.commit(), None);
        app.after_paint();
        assert!(!app.scroller.is_loading());
    }

    #[test]
    fn scrolling_near_top_slides_and_keeps_rows_in_place() {
        let mut app = TestAppBuilder::new().terminal_height(23).build();
        run_frame(&mut app);

        app.viewport.as_mut().unwrap().scroll_to(100);
        assert_eq!(app.dispatch_scroll(), Some(Direction::Up));
        assert_eq!(app.scroller.window().to_string(), "[-75..24]");

        assert_eq!(app.commit(), Some(1600));
        assert!(app.scroller.is_loading());
        assert_eq!(app.debug.running_tasks.len(), 1);

        app.after_paint();
        assert!(!app.scroller.is_loading());
        assert!(app.debug.running_tasks.is_empty());
        assert_eq!(app.offset(), Some(1600));
    }

    #[test]
    fn scroll_between_commit_and_paint_is_ignored() {
        let mut app = TestAppBuilder::new().terminal_height(23).build();
        run_frame(&mut app);
        app.viewport.as_mut().unwrap().scroll_to(100);
        app.dispatch_scroll();
        app.commit();

        app.update(Message::ScrollTop);
        assert_eq!(app.dispatch_scroll(), None);
        assert_eq!(app.scroller.window().first(), -75);

        // After paint the current position is re-examined.
        app.after_paint();
        assert!(app.has_pending_scroll());
        assert_eq!(app.dispatch_scroll(), Some(Direction::Up));
        assert_eq!(app.scroller.window().first(), -100);
    }

    #[test]
    fn line_scrolling_moves_by_line_height() {
        let mut app = TestAppBuilder::new().terminal_height(23).build();
        app.update(Message::ScrollLines(3));
        assert_eq!(app.offset(), Some(2860));
        app.update(Message::PageUp);
        // 19 lines per page
        assert_eq!(app.offset(), Some(2480));
        app.update(Message::HalfPageDown);
        assert_eq!(app.offset(), Some(2660));
    }

    #[test]
    fn scroll_bottom_slides_down() {
        let mut app = TestAppBuilder::new().terminal_height(23).build();
        run_frame(&mut app);
        app.update(Message::ScrollBottom);
        assert_eq!(app.offset(), Some(5600));

        assert_eq!(run_frame(&mut app), Some(Direction::Down));
        assert_eq!(app.scroller.window().to_string(), "[-25..74]");
        assert_eq!(app.offset(), Some(4100));
    }

    #[test]
    fn short_content_stops_chaining_slides() {
        // 1200px of content in a 400px viewport: both edges are always near.
        let config = ScrollerConfig {
            total_items: 20,
            load_batch_size: 5,
            ..Default::default()
        };
        let mut app = TestAppBuilder::new()
            .config(config)
            .terminal_height(23)
            .build();

        let mut slides = 0;
        for _ in 0..100 {
            if run_frame(&mut app).is_some() {
                slides += 1;
            }
            if !app.has_pending_scroll() {
                break;
            }
        }
        assert_eq!(slides, App::MAX_CHAINED_SLIDES);
        assert!(!app.has_pending_scroll());
        assert!(!app.scroller.is_loading());
        assert_eq!(
            app.viewport.as_ref().unwrap().overflow(),
            Overflow::Scroll
        );

        // Input re-arms the chain.
        app.update(Message::ScrollTo(0));
        assert_eq!(run_frame(&mut app), Some(Direction::Up));
        assert!(app.has_pending_scroll());
    }

    #[test]
    fn scroll_to_moves_to_absolute_offset() {
        let mut app = TestAppBuilder::new().terminal_height(23).build();
        app.update(Message::ScrollTo(1234));
        assert_eq!(app.offset(), Some(1234));
        app.update(Message::ScrollTo(90_000));
        assert_eq!(app.offset(), Some(5600));
    }

    #[test]
    fn toggling_debug_shrinks_the_viewport() {
        let mut app = TestAppBuilder::new().terminal_height(23).build();
        app.update(Message::ToggleDebug);
        assert_eq!(app.list_lines(), 10);
        assert_eq!(app.viewport.as_ref().unwrap().viewport_extent(), 200);
    }

    #[test]
    fn quit_detaches_the_viewport() {
        let mut app = TestAppBuilder::new().terminal_height(23).build();
        app.viewport.as_mut().unwrap().scroll_to(100);
        app.dispatch_scroll();
        assert_eq!(
            app.viewport.as_ref().unwrap().overflow(),
            Overflow::Hidden
        );

        app.update(Message::Quit);

        assert!(app.should_quit);
        assert!(app.viewport.is_none());
        assert!(!app.scroller.is_loading());
        assert!(app.debug.running_tasks.is_empty());
    }

    #[test]
    fn debug_log_is_bounded() {
        let mut debug = DebugState::new();
        for i in 0..80 {
            debug.log(format!("entry {i}"));
        }
        assert_eq!(debug.log.len(), 50);
        assert_eq!(debug.log.front().unwrap().message, "entry 30");
    }
}
