//! Auto-applicable corrections attached to diagnostics.

use crate::range::LineRange;
use serde::{Deserialize, Serialize};

/// A replacement of a line range in the original file with new text.
///
/// Patches are produced by diff-mode adapters: each one replaces the lines
/// covered by `range` with `replacement` (which keeps its own line
/// terminators and may span any number of lines, including zero).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    /// The line range in the original file to replace.
    pub range: LineRange,
    /// The text to insert in place of the range.
    pub replacement: String,
}

impl Patch {
    /// Creates a new patch replacing `range` with `replacement`.
    pub fn new(range: LineRange, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Applies a set of pairwise disjoint patches, sorted by start line,
    /// to the original text and returns the patched result.
    ///
    /// This is the reconstruction half of the diff-mode contract: the
    /// patches emitted for one invocation, applied in order, reproduce the
    /// tool's corrected output exactly.
    ///
    /// # Panics
    ///
    /// Panics if the patches are unsorted or overlap, or if a range refers
    /// to lines past the end of the original.
    pub fn apply_all(original: &str, patches: &[Patch]) -> String {
        let lines = split_inclusive_lines(original);
        let mut result = String::with_capacity(original.len());
        // Index of the next original line (0-based) not yet emitted.
        let mut cursor = 0usize;

        for patch in patches {
            let start = (patch.range.start - 1) as usize;
            let end = (patch.range.end - 1) as usize;
            assert!(start >= cursor, "patches must be sorted and disjoint");
            assert!(end <= lines.len(), "patch range exceeds original length");

            for line in &lines[cursor..start] {
                result.push_str(line);
            }
            result.push_str(&patch.replacement);
            cursor = end;
        }

        for line in &lines[cursor..] {
            result.push_str(line);
        }
        result
    }
}

/// Splits text into lines, each retaining its trailing terminator.
///
/// A final line without a terminator is still yielded. The concatenation of
/// the returned slices is always the input text.
pub fn split_inclusive_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}
