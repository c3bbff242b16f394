// Utility helpers for field normalization and console formatting.
//
// This module centralizes the "dirty" string handling so the rest of the
// code can assume clean, typed values.
use chrono::Local;
use num_format::{Locale, ToFormattedString};

/// Normalize an optional string field from the record source.
///
/// - Accepts `Option<&str>` so callers can pass through optional columns.
/// - Trims whitespace.
/// - Maps `None` and empty/whitespace-only values to `"Unknown"`.
pub fn normalize_field(s: Option<&str>) -> String {
    match s.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "Unknown".to_string(),
    }
}

/// Generation timestamp for the `updated` field, local time.
///
/// This stamps when the export ran, not how fresh the underlying data is.
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values. This is used
    // for counts in console messages (e.g., `9,855 records processed`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_field_defaults_to_unknown() {
        assert_eq!(normalize_field(None), "Unknown");
        assert_eq!(normalize_field(Some("")), "Unknown");
        assert_eq!(normalize_field(Some("   ")), "Unknown");
        assert_eq!(normalize_field(Some(" Gasabo ")), "Gasabo");
    }

    #[test]
    fn format_int_inserts_separators() {
        assert_eq!(format_int(9855i64), "9,855");
        assert_eq!(format_int(12usize), "12");
    }
}
