//! Adapter layer that turns external checking tools into diagnostic sources.
//!
//! A tool integration describes how to build an external tool's command
//! line (and optionally a config file); this crate handles everything
//! else: eager validation of the description into a sealed
//! [`AdapterSpec`], per-file invocation through the [`LintRunner`], and
//! conversion of the tool's raw output into typed
//! [`Diagnostic`](relint_diagnostics::Diagnostic)s.
//!
//! # Interpretation modes
//!
//! Every adapter picks exactly one of two output interpretations at
//! construction time:
//!
//! - **Pattern mode:** a compiled regex with named capture groups is
//!   matched against the output; every match becomes one diagnostic.
//! - **Diff mode:** the tool emits the entire corrected file; the
//!   difference against the original becomes one diagnostic per edit
//!   hunk, each carrying an auto-applicable patch.

#![warn(missing_docs)]

mod builder;
mod contract;
mod diff;
mod error;
mod pattern;
mod resolver;
mod runner;
mod spec;

pub use builder::AdapterBuilder;
pub use contract::{ArgumentContract, SettingKind, SettingSpec, SettingValue, Settings, ToolIntegration};
pub use error::{AdapterError, ErrorKind};
pub use resolver::{default_severity_map, resolve_severity};
pub use runner::LintRunner;
pub use spec::{AdapterSpec, OutputInterpretation, SeverityMap, RECOGNIZED_GROUPS};
