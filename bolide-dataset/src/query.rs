//! The filter/paginate pipeline and the distinct-years derivation.

use std::collections::BTreeSet;

use bolide_core::constants::{DEFAULT_LIMIT, DEFAULT_PAGE};
use bolide_core::{js_number, MeteorPage, MeteorQuery, MeteorRecord};

/// Runs the query pipeline over a record sequence.
///
/// Filters by calendar year, then by minimum mass, then slices out the
/// requested page. Unparseable values never match: a record with a garbled
/// date or mass is excluded, and an unparseable filter value excludes
/// everything. `total` counts the filtered records before pagination.
///
/// Empty-string `year`/`mass` parameters are treated as absent. `page` and
/// `limit` default to 1 and 10 only when absent; when present they go
/// through numeric coercion, so nonsense input yields an empty page rather
/// than an error.
pub fn run_query(records: &[MeteorRecord], query: &MeteorQuery) -> MeteorPage {
    let mut filtered: Vec<&MeteorRecord> = records.iter().collect();

    if let Some(year) = query.year.as_deref().filter(|v| !v.is_empty()) {
        let wanted = js_number(year);
        filtered.retain(|record| match (record.calendar_year(), wanted) {
            (Some(actual), Some(wanted)) => f64::from(actual) == wanted,
            _ => false,
        });
    }

    if let Some(mass) = query.mass.as_deref().filter(|v| !v.is_empty()) {
        let threshold = js_number(mass);
        filtered.retain(|record| match (record.mass_value(), threshold) {
            (Some(actual), Some(threshold)) => actual > threshold,
            _ => false,
        });
    }

    let total = filtered.len() as u64;

    let page = match query.page.as_deref() {
        Some(raw) => js_number(raw),
        None => Some(DEFAULT_PAGE as f64),
    };
    let limit = match query.limit.as_deref() {
        Some(raw) => js_number(raw),
        None => Some(DEFAULT_LIMIT as f64),
    };

    let data = match (page, limit) {
        (Some(page), Some(limit)) => {
            let start = (page - 1.0) * limit;
            let (start, end) = slice_bounds(filtered.len(), start, start + limit);
            filtered[start..end].iter().map(|r| (*r).clone()).collect()
        }
        // an unparseable page or limit resolves both indices to 0
        _ => Vec::new(),
    };

    MeteorPage { data, total }
}

/// Distinct calendar years across all records, sorted as strings.
///
/// Records whose date is absent or unparseable are discarded. The sort is
/// lexicographic, not numeric: "10" orders before "2".
pub fn distinct_years(records: &[MeteorRecord]) -> Vec<String> {
    let years: BTreeSet<String> = records
        .iter()
        .filter_map(MeteorRecord::calendar_year)
        .map(|year| year.to_string())
        .collect();
    years.into_iter().collect()
}

/// Resolves fractional slice indices to a half-open range over `len`
/// elements, following ECMAScript `Array.prototype.slice`: NaN becomes 0,
/// values truncate toward zero, negative values count from the end, and
/// everything clamps to the sequence bounds.
fn slice_bounds(len: usize, start: f64, end: f64) -> (usize, usize) {
    let start = resolve_index(len, start);
    let end = resolve_index(len, end);
    (start, end.max(start))
}

fn resolve_index(len: usize, value: f64) -> usize {
    if value.is_nan() {
        return 0;
    }
    let value = value.trunc();
    if value < 0.0 {
        let from_end = len as f64 + value;
        if from_end < 0.0 {
            0
        } else {
            from_end as usize
        }
    } else if value >= len as f64 {
        len
    } else {
        value as usize
    }
}
