//! Bidirectional infinite scrolling over a fixed-length window of row indices.
//!
//! The window slides by one batch whenever the viewport nears either edge of
//! the mounted content. Each slide is followed by a scroll correction that
//! cancels the height added or removed above the viewport, so the rows on
//! screen do not move.

mod container;
mod frame;
mod reflow;
mod sequencer;
pub mod threshold;
mod window;

pub use container::{Overflow, ScrollContainer, Viewport};
pub use frame::FrameScheduler;
pub use reflow::{ReflowGuard, ScrollCorrection};
pub use sequencer::InfiniteScroller;
pub use threshold::ScrollReport;
pub use window::IndexWindow;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}
