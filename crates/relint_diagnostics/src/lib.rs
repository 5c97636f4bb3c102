//! Structured diagnostics produced by external checking tools.
//!
//! This crate provides the data model shared by every tool adapter: the
//! three-level [`Severity`] scale, the [`Diagnostic`] record with optional
//! source positions, and the [`Patch`]/[`LineRange`] pair that diff-mode
//! adapters attach to describe an auto-applicable correction.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod patch;
pub mod range;
pub mod severity;

pub use diagnostic::Diagnostic;
pub use patch::Patch;
pub use range::LineRange;
pub use severity::Severity;
