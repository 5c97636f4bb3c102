//! Process execution and scoped resource primitives for tool adapters.
//!
//! This crate provides the two collaborators every adapter invocation needs:
//! [`execute`] runs an external command synchronously and captures both
//! output streams without treating a non-zero exit code as a failure, and
//! [`ScopedConfigFile`] materializes generated configuration into a
//! temporary file that is deleted on every exit path. [`find_executable`]
//! backs the prerequisite check that runs before any invocation.

#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod prereq;
pub mod scoped;

pub use command::{execute, CapturedOutput};
pub use error::ExecError;
pub use prereq::find_executable;
pub use scoped::ScopedConfigFile;
