//! The structured finding record produced by adapter invocations.

use crate::patch::Patch;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// One structured finding reported by a tool adapter.
///
/// Every diagnostic names its origin (the adapter, optionally refined by
/// a tool-reported origin), the file it applies to, and a severity. Source
/// positions are optional because many tools report file-level findings.
/// Diff-mode adapters attach exactly one [`Patch`]; pattern-mode adapters
/// never do.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Who produced this finding, e.g. `"PyLintAdapter (W0612)"`.
    pub origin: String,
    /// The finding message. Empty when the tool reported none.
    pub message: String,
    /// Path of the file under analysis.
    pub file: String,
    /// How serious the finding is.
    pub severity: Severity,
    /// Line where the finding starts (1-based).
    pub line: Option<u32>,
    /// Column where the finding starts (1-based).
    pub column: Option<u32>,
    /// Line where the finding ends (1-based, inclusive).
    pub end_line: Option<u32>,
    /// Column where the finding ends (1-based).
    pub end_column: Option<u32>,
    /// An auto-applicable correction, if the adapter produced one.
    pub patch: Option<Patch>,
}

impl Diagnostic {
    /// Creates a diagnostic with the given origin, message, file, and
    /// severity, and no position information.
    pub fn new(
        origin: impl Into<String>,
        message: impl Into<String>,
        file: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            origin: origin.into(),
            message: message.into(),
            file: file.into(),
            severity,
            line: None,
            column: None,
            end_line: None,
            end_column: None,
            patch: None,
        }
    }

    /// Sets the start line.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the start column.
    pub fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }

    /// Sets the end line.
    pub fn with_end_line(mut self, end_line: u32) -> Self {
        self.end_line = Some(end_line);
        self
    }

    /// Sets the end column.
    pub fn with_end_column(mut self, end_column: u32) -> Self {
        self.end_column = Some(end_column);
        self
    }

    /// Attaches a patch to this diagnostic.
    pub fn with_patch(mut self, patch: Patch) -> Self {
        self.patch = Some(patch);
        self
    }
}
