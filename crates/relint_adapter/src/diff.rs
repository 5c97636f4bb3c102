//! Diff-mode extraction: corrected-file output becomes patch diagnostics.

use relint_diagnostics::{patch::split_inclusive_lines, Diagnostic, LineRange, Patch, Severity};
use similar::{DiffTag, TextDiff};
use std::ops::Range;

/// Compares the original file content with the tool's corrected output and
/// emits one diagnostic per edit hunk, in ascending line order.
///
/// A hunk is a maximal run of consecutive changed lines not interrupted by
/// an unchanged line. Each diagnostic carries the adapter's uniform
/// severity and message plus a [`Patch`] replacing the hunk's original
/// line span with the corresponding span of the corrected output. The
/// patches are pairwise disjoint, and applying all of them in order to the
/// original reconstructs the corrected output exactly.
///
/// A pure insertion carries an empty patch range. Its diagnostic anchors
/// to the original line the insertion follows; an insertion at the top of
/// the file has no such line and anchors to line 1.
pub(crate) fn extract(
    adapter_name: &str,
    filename: &str,
    original: &str,
    corrected: &str,
    severity: Severity,
    message: &str,
) -> Vec<Diagnostic> {
    let corrected_lines = split_inclusive_lines(corrected);
    let diff = TextDiff::from_lines(original, corrected);

    let mut hunks: Vec<(Range<usize>, Range<usize>)> = Vec::new();
    for op in diff.ops() {
        if op.tag() == DiffTag::Equal {
            continue;
        }
        let old = op.old_range();
        let new = op.new_range();
        match hunks.last_mut() {
            // Adjacent changed ops (e.g. a deletion followed directly by
            // an insertion) belong to the same hunk.
            Some((last_old, last_new)) if last_old.end == old.start && last_new.end == new.start => {
                last_old.end = old.end;
                last_new.end = new.end;
            }
            _ => hunks.push((old, new)),
        }
    }

    hunks
        .into_iter()
        .map(|(old, new)| {
            let range = LineRange::new(old.start as u32 + 1, old.end as u32 + 1);
            let replacement: String = corrected_lines[new].concat();
            let (line, end_line) = if old.is_empty() {
                // Insertion anchor: the line the insertion follows, or
                // line 1 at the top of the file (see `extract` docs).
                let anchor = old.start.max(1) as u32;
                (anchor, anchor)
            } else {
                (old.start as u32 + 1, old.end as u32)
            };
            Diagnostic::new(adapter_name, message, filename, severity)
                .with_line(line)
                .with_end_line(end_line)
                .with_patch(Patch::new(range, replacement))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hunks(original: &str, corrected: &str) -> Vec<Diagnostic> {
        extract(
            "XFormat",
            "f.c",
            original,
            corrected,
            Severity::Normal,
            "Inconsistency found.",
        )
    }

    /// Applies all emitted patches and asserts the corrected output comes
    /// back exactly, plus disjointness and ascending order.
    fn assert_round_trip(original: &str, corrected: &str) -> Vec<Diagnostic> {
        let diags = hunks(original, corrected);
        let patches: Vec<Patch> = diags
            .iter()
            .map(|d| d.patch.clone().expect("diff diagnostics carry a patch"))
            .collect();
        for pair in patches.windows(2) {
            assert!(
                pair[0].range.precedes(&pair[1].range),
                "hunks must be disjoint and ascending"
            );
            assert!(pair[0].range.start < pair[1].range.start);
        }
        assert_eq!(Patch::apply_all(original, &patches), corrected);
        diags
    }

    #[test]
    fn identical_content_yields_nothing() {
        assert!(hunks("a\nb\n", "a\nb\n").is_empty());
    }

    #[test]
    fn spec_example_single_replacement() {
        let diags = assert_round_trip("a\nb\nc\n", "a\nX\nc\n");
        assert_eq!(diags.len(), 1);
        let d = &diags[0];
        assert_eq!(d.line, Some(2));
        assert_eq!(d.end_line, Some(2));
        assert_eq!(d.severity, Severity::Normal);
        assert_eq!(d.message, "Inconsistency found.");
        assert_eq!(d.origin, "XFormat");
        let patch = d.patch.as_ref().unwrap();
        assert_eq!(patch.range, LineRange::new(2, 3));
        assert_eq!(patch.replacement, "X\n");
    }

    #[test]
    fn deletion_hunk() {
        let diags = assert_round_trip("a\nb\nc\n", "a\nc\n");
        assert_eq!(diags.len(), 1);
        let patch = diags[0].patch.as_ref().unwrap();
        assert_eq!(patch.range, LineRange::new(2, 3));
        assert_eq!(patch.replacement, "");
    }

    #[test]
    fn insertion_hunk() {
        let diags = assert_round_trip("a\nc\n", "a\nb\nc\n");
        assert_eq!(diags.len(), 1);
        let d = &diags[0];
        let patch = d.patch.as_ref().unwrap();
        assert!(patch.range.is_empty());
        assert_eq!(patch.replacement, "b\n");
        assert_eq!(d.line, Some(1));
    }

    #[test]
    fn separated_changes_make_separate_hunks() {
        let diags = assert_round_trip("a\nb\nc\nd\ne\n", "A\nb\nc\nd\nE\n");
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].patch.as_ref().unwrap().range, LineRange::new(1, 2));
        assert_eq!(diags[1].patch.as_ref().unwrap().range, LineRange::new(5, 6));
    }

    #[test]
    fn consecutive_changes_merge_into_one_hunk() {
        let diags = assert_round_trip("a\nb\nc\nd\n", "a\nX\nY\nd\n");
        assert_eq!(diags.len(), 1);
        let patch = diags[0].patch.as_ref().unwrap();
        assert_eq!(patch.range, LineRange::new(2, 4));
        assert_eq!(patch.replacement, "X\nY\n");
        assert_eq!(diags[0].line, Some(2));
        assert_eq!(diags[0].end_line, Some(3));
    }

    #[test]
    fn unequal_length_replacement() {
        let diags = assert_round_trip("a\nb\nc\n", "a\nX\nY\nZ\nc\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].patch.as_ref().unwrap().replacement, "X\nY\nZ\n");
    }

    #[test]
    fn whole_file_rewrite() {
        assert_round_trip("a\nb\n", "x\ny\nz\n");
    }

    #[test]
    fn append_at_end_of_file() {
        let diags = assert_round_trip("a\nb\n", "a\nb\nc\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].patch.as_ref().unwrap().range, LineRange::new(3, 3));
    }

    #[test]
    fn missing_trailing_newline_round_trips() {
        assert_round_trip("a\nb", "a\nB");
        assert_round_trip("a\nb\n", "a\nb");
    }

    #[test]
    fn insertion_anchors_to_preceding_line() {
        // Inserted between original lines 2 and 3.
        let diags = assert_round_trip("a\nb\nd\n", "a\nb\nc\nd\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, Some(2));
        assert_eq!(diags[0].end_line, Some(2));
        assert_eq!(diags[0].patch.as_ref().unwrap().range, LineRange::new(3, 3));
    }

    #[test]
    fn top_of_file_insertion_anchors_to_line_one() {
        let diags = assert_round_trip("b\nc\n", "a\nb\nc\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, Some(1));
        assert_eq!(diags[0].patch.as_ref().unwrap().range, LineRange::new(1, 1));
    }

    #[test]
    fn crlf_content_round_trips() {
        let diags = assert_round_trip("a\r\nb\r\nc\r\n", "a\r\nB\r\nc\r\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].patch.as_ref().unwrap().replacement, "B\r\n");
    }

    #[test]
    fn whole_file_delete_round_trips() {
        let diags = assert_round_trip("a\nb\nc\n", "");
        assert_eq!(diags.len(), 1);
        let patch = diags[0].patch.as_ref().unwrap();
        assert_eq!(patch.range, LineRange::new(1, 4));
        assert_eq!(patch.replacement, "");
    }

    #[test]
    fn interleaved_hunks_round_trip() {
        // Replacement, deletion, and insertion separated by unchanged
        // lines, with a trailing line that has no newline.
        let original = "a\nb\nc\nd\ne\nf\ng";
        let corrected = "a\nB\nc\ne\nf\nX\ng";
        let diags = assert_round_trip(original, corrected);
        assert_eq!(diags.len(), 3);
    }

    #[test]
    fn empty_original_round_trips() {
        let diags = assert_round_trip("", "a\nb\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].patch.as_ref().unwrap().range, LineRange::new(1, 1));
    }
}
