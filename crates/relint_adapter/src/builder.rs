//! Eager construction-time validation of adapter descriptions.

use crate::error::AdapterError;
use crate::resolver::default_severity_map;
use crate::spec::{AdapterSpec, OutputInterpretation, SeverityMap, RECOGNIZED_GROUPS};
use regex::Regex;
use relint_diagnostics::Severity;

/// The uniform message used in diff mode when none is configured.
const DEFAULT_DIFF_MESSAGE: &str = "Inconsistency found.";

/// Builder for [`AdapterSpec`] with construction-time validation.
///
/// Every rule is enforced in [`build`](Self::build), before any file is
/// processed: mode exclusivity (an option belonging to the other mode is
/// rejected by name), a required and well-formed `output_regex` in
/// pattern mode, the recognized-group schema, and the severity map
/// precedence (explicit map, else auto-installed default when the
/// pattern captures `severity`, else none).
#[derive(Debug)]
pub struct AdapterBuilder {
    executable: String,
    provides_correction: bool,
    use_stdin: bool,
    use_stderr: bool,
    config_suffix: String,
    output_regex: Option<String>,
    severity_map: Option<SeverityMap>,
    diff_severity: Option<Severity>,
    diff_message: Option<String>,
}

impl AdapterBuilder {
    /// Starts a builder for the given executable.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            provides_correction: false,
            use_stdin: false,
            use_stderr: false,
            config_suffix: String::new(),
            output_regex: None,
            severity_map: None,
            diff_severity: None,
            diff_message: None,
        }
    }

    /// Selects diff mode: the tool outputs the entirely corrected file
    /// instead of issue messages.
    pub fn provides_correction(mut self, yes: bool) -> Self {
        self.provides_correction = yes;
        self
    }

    /// Feeds the file content to the tool on stdin instead of expecting
    /// the tool to read the file itself.
    pub fn use_stdin(mut self, yes: bool) -> Self {
        self.use_stdin = yes;
        self
    }

    /// Reads the tool's output from stderr instead of stdout.
    pub fn use_stderr(mut self, yes: bool) -> Self {
        self.use_stderr = yes;
        self
    }

    /// Sets the filename suffix for a generated config file, for tools
    /// that insist on a specific config extension.
    pub fn config_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config_suffix = suffix.into();
        self
    }

    /// Sets the output pattern (pattern mode only, required there).
    pub fn output_regex(mut self, pattern: impl Into<String>) -> Self {
        self.output_regex = Some(pattern.into());
        self
    }

    /// Sets an explicit severity map (pattern mode only; requires the
    /// pattern to capture `severity`).
    pub fn severity_map(mut self, map: SeverityMap) -> Self {
        self.severity_map = Some(map);
        self
    }

    /// Sets the uniform severity for diff-mode diagnostics
    /// (default [`Severity::Normal`]).
    pub fn diff_severity(mut self, severity: Severity) -> Self {
        self.diff_severity = Some(severity);
        self
    }

    /// Sets the uniform message for diff-mode diagnostics
    /// (default `"Inconsistency found."`).
    pub fn diff_message(mut self, message: impl Into<String>) -> Self {
        self.diff_message = Some(message.into());
        self
    }

    /// Validates the description and seals it into an [`AdapterSpec`].
    pub fn build(self) -> Result<AdapterSpec, AdapterError> {
        if self.executable.trim().is_empty() {
            return Err(AdapterError::EmptyExecutable);
        }

        let interpretation = if self.provides_correction {
            self.build_diff_interpretation()?
        } else {
            self.build_pattern_interpretation()?
        };

        Ok(AdapterSpec {
            executable: self.executable,
            use_stdin: self.use_stdin,
            use_stderr: self.use_stderr,
            config_suffix: self.config_suffix,
            interpretation,
        })
    }

    fn build_diff_interpretation(&self) -> Result<OutputInterpretation, AdapterError> {
        if self.output_regex.is_some() {
            return Err(AdapterError::DisallowedOption {
                key: "output_regex",
                mode: "diff",
            });
        }
        if self.severity_map.is_some() {
            return Err(AdapterError::DisallowedOption {
                key: "severity_map",
                mode: "diff",
            });
        }
        Ok(OutputInterpretation::Diff {
            severity: self.diff_severity.unwrap_or(Severity::Normal),
            message: self
                .diff_message
                .clone()
                .unwrap_or_else(|| DEFAULT_DIFF_MESSAGE.to_string()),
        })
    }

    fn build_pattern_interpretation(&self) -> Result<OutputInterpretation, AdapterError> {
        if self.diff_severity.is_some() {
            return Err(AdapterError::DisallowedOption {
                key: "diff_severity",
                mode: "pattern",
            });
        }
        if self.diff_message.is_some() {
            return Err(AdapterError::DisallowedOption {
                key: "diff_message",
                mode: "pattern",
            });
        }

        let pattern = self
            .output_regex
            .as_deref()
            .ok_or(AdapterError::MissingOption("output_regex"))?;
        let regex = Regex::new(pattern)?;

        for name in regex.capture_names().flatten() {
            if !RECOGNIZED_GROUPS.contains(&name) {
                return Err(AdapterError::UnrecognizedGroup(name.to_string()));
            }
        }
        let has_severity_group = regex.capture_names().flatten().any(|n| n == "severity");

        // Precedence: an explicit map wins, the default map is installed
        // when the pattern captures severity, otherwise no map exists.
        let severity_map = match &self.severity_map {
            Some(map) => {
                if !has_severity_group {
                    return Err(AdapterError::SeverityMapWithoutGroup);
                }
                Some(map.clone())
            }
            None if has_severity_group => Some(default_severity_map()),
            None => None,
        };

        Ok(OutputInterpretation::Pattern {
            regex,
            severity_map,
        })
    }
}
