//! Loose coercion rules for query parameters and record fields.
//!
//! The upstream dataset stores every field as a loosely-typed value, and
//! query parameters arrive as strings. Both are reduced to comparable
//! numbers through the two functions here; `None` is the "unparseable"
//! sentinel, and a sentinel never matches any filter.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Coerces a string to a number the way ECMAScript `Number()` does.
///
/// Empty or whitespace-only input coerces to `0.0`. `"Infinity"` spellings
/// are honored; anything else unparseable returns `None` (the NaN
/// sentinel), which no filter comparison ever matches.
pub fn js_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // f64::from_str accepts "inf" and "nan" spellings that Number() rejects.
    let lower = trimmed.to_ascii_lowercase();
    if lower.contains("inf") || lower.contains("nan") {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a date-like field and reduces it to its calendar year.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]` (the dataset's native
/// form), and bare `YYYY-MM-DD` dates. Returns `None` when the value is
/// not a parseable date.
pub fn parse_calendar_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.year());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.year());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.year());
    }
    None
}
