use super::ScrollReport;

/// Whether a container currently accepts user scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Scroll,
    Hidden,
}

/// A scrollable element as seen by the scroller.
///
/// Offsets and extents are pixels. `set_offset` is a programmatic write and
/// applies regardless of overflow.
pub trait ScrollContainer {
    fn offset(&self) -> u32;
    fn set_offset(&mut self, offset: u32);
    fn content_extent(&self) -> u32;
    fn set_content_extent(&mut self, extent: u32);
    fn viewport_extent(&self) -> u32;
    fn overflow(&self) -> Overflow;
    fn set_overflow(&mut self, overflow: Overflow);

    fn report(&self) -> ScrollReport {
        ScrollReport {
            offset: self.offset(),
            content_extent: self.content_extent(),
            viewport_extent: self.viewport_extent(),
        }
    }
}

/// Terminal-hosted scroll container.
///
/// Mirrors the behavior of a browser scroll element: the offset is clamped
/// to the scrollable range, every effective offset change queues exactly one
/// scroll event, and user scrolling is dropped while overflow is hidden.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    offset: u32,
    content_extent: u32,
    viewport_extent: u32,
    overflow: Overflow,
    scroll_pending: bool,
    listening: bool,
}

impl Viewport {
    pub fn new(viewport_extent: u32) -> Self {
        Self {
            viewport_extent,
            ..Self::default()
        }
    }

    pub fn max_offset(&self) -> u32 {
        self.content_extent.saturating_sub(self.viewport_extent)
    }

    /// User scroll by a signed pixel delta. Returns whether the offset moved.
    pub fn scroll_by(&mut self, delta: i64) -> bool {
        let target = (i64::from(self.offset) + delta).clamp(0, i64::from(self.max_offset()));
        self.scroll_to(target as u32)
    }

    /// User scroll to an absolute offset. Returns whether the offset moved.
    pub fn scroll_to(&mut self, offset: u32) -> bool {
        if self.overflow == Overflow::Hidden {
            tracing::trace!(offset, "user scroll dropped while overflow is hidden");
            return false;
        }
        self.move_to(offset)
    }

    pub fn set_viewport_extent(&mut self, extent: u32) {
        self.viewport_extent = extent;
        self.move_to(self.offset);
    }

    pub fn listen(&mut self) {
        self.listening = true;
    }

    /// Drop the scroll listener along with any event it has not seen yet.
    pub fn unlisten(&mut self) {
        self.listening = false;
        self.scroll_pending = false;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Queue a scroll event without moving, so the listener re-reads the
    /// current position.
    pub fn notify_scroll(&mut self) {
        self.scroll_pending = true;
    }

    pub fn has_scroll_event(&self) -> bool {
        self.listening && self.scroll_pending
    }

    /// Consume the queued scroll event, if a listener is subscribed.
    pub fn take_scroll_event(&mut self) -> bool {
        self.listening && std::mem::take(&mut self.scroll_pending)
    }

    fn move_to(&mut self, offset: u32) -> bool {
        let clamped = offset.min(self.max_offset());
        if clamped == self.offset {
            return false;
        }
        self.offset = clamped;
        self.scroll_pending = true;
        true
    }
}

impl ScrollContainer for Viewport {
    fn offset(&self) -> u32 {
        self.offset
    }

    fn set_offset(&mut self, offset: u32) {
        self.move_to(offset);
    }

    fn content_extent(&self) -> u32 {
        self.content_extent
    }

    fn set_content_extent(&mut self, extent: u32) {
        self.content_extent = extent;
        self.move_to(self.offset);
    }

    fn viewport_extent(&self) -> u32 {
        self.viewport_extent
    }

    fn overflow(&self) -> Overflow {
        self.overflow
    }

    fn set_overflow(&mut self, overflow: Overflow) {
        self.overflow = overflow;
    }
}
