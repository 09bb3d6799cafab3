use std::fmt;

use super::Direction;

/// A contiguous, ascending run of row indices currently mounted in the view.
///
/// Stored as its first index and length, so every adjacent pair differs by
/// exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexWindow {
    first: i64,
    len: usize,
}

impl IndexWindow {
    /// Window of `len` indices centered on zero: `[-floor(len/2), ...]`.
    pub fn initial(len: usize) -> Self {
        Self {
            first: -((len / 2) as i64),
            len,
        }
    }

    pub const fn first(&self) -> i64 {
        self.first
    }

    pub const fn last(&self) -> i64 {
        self.first + self.len as i64 - 1
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, position: usize) -> Option<i64> {
        (position < self.len).then(|| self.first + position as i64)
    }

    pub fn contains(&self, index: i64) -> bool {
        !self.is_empty() && index >= self.first && index <= self.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + use<> {
        self.first..self.first + self.len as i64
    }

    /// Shift the window by `batch` indices toward `direction`.
    ///
    /// `Up` prepends `[first - batch, first - 1]` and drops the last `batch`
    /// indices; `Down` appends `[last + 1, last + batch]` and drops the first
    /// `batch`. The length never changes. Callers must keep `batch < len`.
    pub fn slide(self, direction: Direction, batch: usize) -> Self {
        debug_assert!(
            batch < self.len,
            "batch {batch} must be smaller than window length {}",
            self.len
        );
        let shift = batch as i64;
        let first = match direction {
            Direction::Up => self.first - shift,
            Direction::Down => self.first + shift,
        };
        Self {
            first,
            len: self.len,
        }
    }
}

impl fmt::Display for IndexWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.first, self.last())
    }
}
