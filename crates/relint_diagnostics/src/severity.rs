//! Diagnostic severity levels ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a diagnostic.
///
/// Ordered from least severe (`Info`) to most severe (`Major`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// An informational finding that requires no action.
    Info,
    /// A finding worth addressing but not blocking.
    Normal,
    /// A serious finding that should be fixed.
    Major,
}

impl Severity {
    /// Returns `true` if this severity is [`Major`](Severity::Major).
    pub fn is_major(self) -> bool {
        self == Severity::Major
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Normal => write!(f, "normal"),
            Severity::Major => write!(f, "major"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Severity::Info < Severity::Normal);
        assert!(Severity::Normal < Severity::Major);
    }

    #[test]
    fn is_major() {
        assert!(Severity::Major.is_major());
        assert!(!Severity::Normal.is_major());
        assert!(!Severity::Info.is_major());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Severity::Major), "major");
        assert_eq!(format!("{}", Severity::Normal), "normal");
        assert_eq!(format!("{}", Severity::Info), "info");
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Severity::Normal).unwrap();
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Normal);
    }
}
