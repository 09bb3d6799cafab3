use serde::Serialize;

use super::Direction;

/// Snapshot of a scroll container, taken when a scroll event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScrollReport {
    pub offset: u32,
    pub content_extent: u32,
    pub viewport_extent: u32,
}

impl ScrollReport {
    /// Pixels between the bottom of the viewport and the end of the content.
    /// Negative when the report is over-scrolled.
    pub fn distance_to_bottom(&self) -> i64 {
        i64::from(self.content_extent) - i64::from(self.offset) - i64::from(self.viewport_extent)
    }
}

/// Decide whether a report is close enough to an edge to slide the window.
///
/// The top edge is checked first, so a report that is near both edges loads
/// upward.
pub fn detect(report: &ScrollReport, edge_threshold: u32) -> Option<Direction> {
    if report.offset < edge_threshold {
        Some(Direction::Up)
    } else if report.distance_to_bottom() < i64::from(edge_threshold) {
        Some(Direction::Down)
    } else {
        None
    }
}
