//! Error types for process execution and scoped resources.

use std::time::Duration;

/// Errors that can occur while executing an external tool or managing
/// its temporary configuration file.
///
/// A non-zero exit code from the tool is deliberately *not* represented
/// here: tools signal findings through their exit status all the time, so
/// the only execution failures are the inability to start or wait on the
/// process, and an exceeded deadline.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The argument vector was empty, so there was no program to run.
    #[error("cannot execute an empty command")]
    EmptyCommand,

    /// The process could not be started at all.
    #[error("failed to start '{program}': {source}")]
    Spawn {
        /// The program that could not be started.
        program: String,
        /// The underlying I/O error from the spawn attempt.
        source: std::io::Error,
    },

    /// The process outlived its deadline and was killed.
    #[error("'{program}' did not finish within {limit:?} and was killed")]
    TimedOut {
        /// The program that was killed.
        program: String,
        /// The deadline that was exceeded.
        limit: Duration,
    },

    /// An I/O error occurred while waiting on the process or draining
    /// its output streams.
    #[error("failed to collect process output: {0}")]
    Stream(std::io::Error),

    /// The temporary configuration file could not be created or written.
    #[error("failed to materialize config file: {0}")]
    TempConfig(std::io::Error),
}
