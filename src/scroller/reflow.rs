use serde::Serialize;

use super::{Direction, Overflow, ScrollContainer};

/// Pre-slide offset, kept until the slide has been committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollCorrection {
    pub previous_offset: u32,
    pub direction: Direction,
}

impl ScrollCorrection {
    /// Offset that keeps the same rows on screen once `added_extent` pixels
    /// have been inserted above the viewport (`Up`) or removed from above it
    /// (`Down`).
    pub fn corrected_offset(&self, added_extent: u32) -> u32 {
        match self.direction {
            Direction::Up => self.previous_offset.saturating_add(added_extent),
            Direction::Down => self.previous_offset.saturating_sub(added_extent),
        }
    }
}

/// Hides the intermediate frame of a slide and restores scroll continuity.
///
/// Holds at most one pending [`ScrollCorrection`].
#[derive(Debug, Default)]
pub struct ReflowGuard {
    pending: Option<ScrollCorrection>,
}

impl ReflowGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<ScrollCorrection> {
        self.pending
    }

    /// Record the current offset and stop the container from scrolling
    /// until [`ReflowGuard::apply`] runs.
    pub fn capture<C: ScrollContainer>(
        &mut self,
        container: &mut C,
        direction: Direction,
    ) -> ScrollCorrection {
        let correction = ScrollCorrection {
            previous_offset: container.offset(),
            direction,
        };
        container.set_overflow(Overflow::Hidden);
        self.pending = Some(correction);
        correction
    }

    /// Write the compensating offset and make the container scrollable again.
    ///
    /// Consumes the pending record; returns the offset written, or `None`
    /// when nothing was pending.
    pub fn apply<C: ScrollContainer>(&mut self, container: &mut C, added_extent: u32) -> Option<u32> {
        let correction = self.pending.take()?;
        let offset = correction.corrected_offset(added_extent);
        container.set_offset(offset);
        container.set_overflow(Overflow::Scroll);
        tracing::debug!(
            direction = correction.direction.label(),
            previous = correction.previous_offset,
            corrected = offset,
            "scroll corrected"
        );
        Some(offset)
    }

    /// Forget a pending record without touching any container.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
