//! Executable resolution for prerequisite checks.

use std::path::PathBuf;

/// Looks up `name` on the invocation environment's `PATH`.
///
/// Returns the resolved path when the executable is available, `None`
/// otherwise. Adapters call this before any invocation so a missing tool
/// is reported as an unmet prerequisite instead of a spawn failure.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}
