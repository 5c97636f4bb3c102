//! Pattern-mode extraction: regex matches become diagnostics.

use crate::error::AdapterError;
use crate::resolver::resolve_severity;
use crate::spec::SeverityMap;
use regex::{Captures, Regex};
use relint_diagnostics::{Diagnostic, Severity};

/// Scans `output` for non-overlapping matches of the adapter's pattern and
/// converts each match, in order, into one diagnostic.
///
/// The count and order of the returned diagnostics equal the count and
/// order of the matches. A numeric group that matched non-numeric text (or
/// zero, since positions are 1-based) aborts this file's analysis with an
/// interpretation error.
pub(crate) fn extract(
    adapter_name: &str,
    filename: &str,
    output: &str,
    regex: &Regex,
    severity_map: Option<&SeverityMap>,
) -> Result<Vec<Diagnostic>, AdapterError> {
    regex
        .captures_iter(output)
        .map(|caps| convert_match(adapter_name, filename, &caps, severity_map))
        .collect()
}

/// Converts the named groups of one match into a diagnostic.
fn convert_match(
    adapter_name: &str,
    filename: &str,
    caps: &Captures<'_>,
    severity_map: Option<&SeverityMap>,
) -> Result<Diagnostic, AdapterError> {
    let severity = match (captured(caps, "severity"), severity_map) {
        (Some(label), Some(map)) => resolve_severity(label, map),
        _ => Severity::Normal,
    };

    let origin = match captured(caps, "origin") {
        Some(tool_origin) => format!("{adapter_name} ({tool_origin})"),
        None => adapter_name.to_string(),
    };

    let message = captured(caps, "message").unwrap_or("");

    let mut diag = Diagnostic::new(origin, message, filename, severity);
    diag.line = numeric(caps, "line")?;
    diag.column = numeric(caps, "column")?;
    diag.end_line = numeric(caps, "end_line")?;
    diag.end_column = numeric(caps, "end_column")?;
    Ok(diag)
}

/// Returns the non-empty text captured by `group`, if any.
fn captured<'t>(caps: &Captures<'t>, group: &str) -> Option<&'t str> {
    caps.name(group)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

/// Parses a captured numeric group into a 1-based position.
fn numeric(caps: &Captures<'_>, group: &'static str) -> Result<Option<u32>, AdapterError> {
    match captured(caps, group) {
        None => Ok(None),
        Some(text) => match text.parse::<u32>() {
            Ok(value) if value >= 1 => Ok(Some(value)),
            _ => Err(AdapterError::MalformedField {
                group,
                value: text.to_string(),
            }),
        },
    }
}
