//! Date and timestamp recognition.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

// Cheap shape checks run before any chrono parsing attempt.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{1,2}(-\d{1,2})?([ T]|$)").unwrap(), // ISO date / year-month
        Regex::new(r"^\d{4}/\d{1,2}/\d{1,2}$").unwrap(),           // Alt ISO
        Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").unwrap(),           // US date
    ]
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a cell as a date or timestamp.
///
/// Dates without a time component map to midnight. Timestamps carrying a UTC
/// offset keep their local wall-clock time, so bucketing follows the
/// calendar the value was written in.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();

    if !DATE_PATTERNS.iter().any(|pattern| pattern.is_match(trimmed)) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    // Year-month, e.g. "2024-03"
    NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Whether a value that parsed as a timestamp carried a time of day.
pub fn has_time_component(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.contains(':') || trimmed.contains('T')
}
