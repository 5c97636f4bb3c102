//! Line ranges within the file under analysis.

use serde::{Deserialize, Serialize};

/// A half-open range of lines in the original file.
///
/// Lines are numbered from 1. The `start` line is included and the `end`
/// line is excluded, so a range covering only line 2 is `2..3`. An empty
/// range (`start == end`) marks a pure insertion point before `start`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct LineRange {
    /// First line of the range (1-based, inclusive).
    pub start: u32,
    /// Line one past the end of the range (exclusive).
    pub end: u32,
}

impl LineRange {
    /// Creates a new line range.
    ///
    /// # Panics
    ///
    /// Panics if `start` is zero or greater than `end`.
    pub fn new(start: u32, end: u32) -> Self {
        assert!(start >= 1, "line numbers are 1-based");
        assert!(start <= end, "range start must not exceed end");
        Self { start, end }
    }

    /// Returns the number of lines covered by this range.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this range covers no lines (an insertion point).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this range ends at or before `other` starts.
    ///
    /// Two touching ranges (`self.end == other.start`) are still disjoint.
    pub fn precedes(&self, other: &LineRange) -> bool {
        self.end <= other.start
    }

    /// Returns the last line covered, or `None` for an empty range.
    pub fn last_line(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }
}
