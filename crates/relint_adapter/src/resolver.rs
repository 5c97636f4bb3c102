//! Resolution of raw severity labels captured from tool output.

use crate::spec::SeverityMap;
use relint_diagnostics::Severity;

/// Resolves a captured severity label through the adapter's map.
///
/// A label absent from the map resolves to [`Severity::Normal`]. This is a
/// deliberate fallback, not an error: tools emit severity vocabularies far
/// wider than any map anticipates, and an unknown label still describes a
/// real finding.
pub fn resolve_severity(label: &str, map: &SeverityMap) -> Severity {
    map.get(label).copied().unwrap_or(Severity::Normal)
}

/// The severity map installed when a pattern captures `severity` but the
/// adapter supplies no explicit map.
pub fn default_severity_map() -> SeverityMap {
    let mut map = SeverityMap::new();
    map.insert("error".to_string(), Severity::Major);
    map.insert("warning".to_string(), Severity::Normal);
    map.insert("info".to_string(), Severity::Info);
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_label_resolves_exactly() {
        let map = default_severity_map();
        assert_eq!(resolve_severity("error", &map), Severity::Major);
        assert_eq!(resolve_severity("warning", &map), Severity::Normal);
        assert_eq!(resolve_severity("info", &map), Severity::Info);
    }

    #[test]
    fn unknown_label_falls_back_to_normal() {
        let map = default_severity_map();
        assert_eq!(resolve_severity("fatal", &map), Severity::Normal);
        assert_eq!(resolve_severity("", &map), Severity::Normal);
    }

    #[test]
    fn empty_map_always_normal() {
        let map = SeverityMap::new();
        assert_eq!(resolve_severity("error", &map), Severity::Normal);
    }
}
