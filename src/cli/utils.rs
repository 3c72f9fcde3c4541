//! Shared CLI utilities.

/// Split repeatable, comma-separated values into one list, trimming
/// whitespace and discarding empty segments. Returns `None` when nothing
/// was given.
///
/// Commas always separate, so a single value cannot carry a literal comma.
pub fn parse_csv_multi(values: &[String]) -> Option<Vec<String>> {
    let parts: Vec<String> = values
        .iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts)
    }
}
