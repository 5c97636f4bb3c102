//! The sealed, validated description of one tool adapter.

use crate::builder::AdapterBuilder;
use regex::Regex;
use relint_diagnostics::Severity;
use std::collections::BTreeMap;

/// Maps raw severity labels captured from tool output to severities.
pub type SeverityMap = BTreeMap<String, Severity>;

/// The named capture groups an output pattern may use. Any other named
/// group is rejected at construction time.
pub const RECOGNIZED_GROUPS: [&str; 7] = [
    "line",
    "column",
    "end_line",
    "end_column",
    "severity",
    "message",
    "origin",
];

/// How an adapter interprets the selected output stream.
#[derive(Debug)]
pub enum OutputInterpretation {
    /// Every non-overlapping match of the pattern becomes one diagnostic.
    Pattern {
        /// The compiled output pattern.
        regex: Regex,
        /// The label-to-severity mapping; present exactly when the
        /// pattern has a `severity` capture group.
        severity_map: Option<SeverityMap>,
    },
    /// The output is the entire corrected file; every edit hunk against
    /// the original becomes one diagnostic with an attached patch.
    Diff {
        /// The uniform severity for every hunk diagnostic.
        severity: Severity,
        /// The uniform message for every hunk diagnostic.
        message: String,
    },
}

/// An immutable, validated adapter description.
///
/// Built once per adapter registration through [`AdapterSpec::builder`];
/// every invariant (mode exclusivity, pattern validity, severity map
/// consistency) is checked eagerly in
/// [`AdapterBuilder::build`](crate::AdapterBuilder::build), so a value of
/// this type is always internally consistent. Safe to share across
/// threads for concurrent invocations.
#[derive(Debug)]
pub struct AdapterSpec {
    pub(crate) executable: String,
    pub(crate) use_stdin: bool,
    pub(crate) use_stderr: bool,
    pub(crate) config_suffix: String,
    pub(crate) interpretation: OutputInterpretation,
}

impl AdapterSpec {
    /// Starts building an adapter spec for the given executable.
    pub fn builder(executable: impl Into<String>) -> AdapterBuilder {
        AdapterBuilder::new(executable)
    }

    /// The name of the external tool to run.
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Whether the file content is fed to the tool on stdin.
    pub fn use_stdin(&self) -> bool {
        self.use_stdin
    }

    /// Whether diagnostics are read from stderr instead of stdout.
    pub fn use_stderr(&self) -> bool {
        self.use_stderr
    }

    /// The filename suffix for a generated config file.
    pub fn config_suffix(&self) -> &str {
        &self.config_suffix
    }

    /// How the selected output stream is interpreted.
    pub fn interpretation(&self) -> &OutputInterpretation {
        &self.interpretation
    }

    /// Returns `true` if this adapter runs in diff mode.
    pub fn provides_correction(&self) -> bool {
        matches!(self.interpretation, OutputInterpretation::Diff { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_spec_accessors() {
        let spec = AdapterSpec::builder("xlint")
            .output_regex(r"(?P<line>\d+): (?P<message>.+)")
            .build()
            .unwrap();
        assert_eq!(spec.executable(), "xlint");
        assert!(!spec.provides_correction());
        assert!(!spec.use_stdin());
        assert!(!spec.use_stderr());
        match spec.interpretation() {
            OutputInterpretation::Pattern { severity_map, .. } => {
                assert!(severity_map.is_none());
            }
            OutputInterpretation::Diff { .. } => panic!("expected pattern mode"),
        }
    }

    #[test]
    fn diff_spec_accessors() {
        let spec = AdapterSpec::builder("xformat")
            .provides_correction(true)
            .use_stdin(true)
            .config_suffix(".xml")
            .build()
            .unwrap();
        assert!(spec.provides_correction());
        assert!(spec.use_stdin());
        assert_eq!(spec.config_suffix(), ".xml");
        match spec.interpretation() {
            OutputInterpretation::Diff { severity, message } => {
                assert_eq!(*severity, Severity::Normal);
                assert_eq!(message, "Inconsistency found.");
            }
            OutputInterpretation::Pattern { .. } => panic!("expected diff mode"),
        }
    }
}
