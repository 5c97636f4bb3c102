//! Error types for adapter construction and invocation.

use relint_exec::ExecError;

/// The coarse classification of an [`AdapterError`].
///
/// Construction-time kinds (`Configuration`, `ContractViolation`) abort
/// adapter registration entirely; invocation-time kinds (`Execution`,
/// `Interpretation`) are isolated to one (file, adapter) pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The adapter description itself is invalid.
    Configuration,
    /// The tool integration's declared contract is invalid.
    ContractViolation,
    /// The external process could not be run.
    Execution,
    /// The tool's output could not be interpreted.
    Interpretation,
}

/// Errors produced while building an adapter or invoking it on a file.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The executable name was empty.
    #[error("executable name must not be empty")]
    EmptyExecutable,

    /// A required option for the selected mode was not supplied.
    #[error("missing required option: {0}")]
    MissingOption(&'static str),

    /// An option was supplied that the selected mode does not accept.
    #[error("option '{key}' is not allowed in {mode} mode")]
    DisallowedOption {
        /// The offending option key.
        key: &'static str,
        /// The mode that rejects it ("pattern" or "diff").
        mode: &'static str,
    },

    /// The output pattern failed to compile.
    #[error("invalid output pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The output pattern names a capture group outside the recognized set.
    #[error("unrecognized capture group '{0}' in output pattern")]
    UnrecognizedGroup(String),

    /// A severity map was supplied but the pattern has no `severity` group.
    #[error("severity map supplied but the output pattern has no 'severity' capture group")]
    SeverityMapWithoutGroup,

    /// The tool integration's declared settings contract is unusable.
    #[error("contract violation: {0}")]
    Contract(String),

    /// The external tool could not be executed.
    #[error(transparent)]
    Execution(#[from] ExecError),

    /// A numeric capture group matched text that is not a positive integer.
    #[error("malformed value '{value}' for numeric group '{group}'")]
    MalformedField {
        /// The capture group that produced the value.
        group: &'static str,
        /// The text that failed to parse.
        value: String,
    },
}

impl AdapterError {
    /// Returns the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdapterError::EmptyExecutable
            | AdapterError::MissingOption(_)
            | AdapterError::DisallowedOption { .. }
            | AdapterError::InvalidPattern(_)
            | AdapterError::UnrecognizedGroup(_)
            | AdapterError::SeverityMapWithoutGroup => ErrorKind::Configuration,
            AdapterError::Contract(_) => ErrorKind::ContractViolation,
            AdapterError::Execution(_) => ErrorKind::Execution,
            AdapterError::MalformedField { .. } => ErrorKind::Interpretation,
        }
    }
}
