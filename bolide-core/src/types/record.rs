//! The meteorite record type.
//!
//! The upstream dataset is loosely typed: `year` and `mass` arrive as
//! strings, numbers, or not at all. Both are normalized to optional strings
//! at the deserialization boundary; numeric and date interpretation happens
//! later, through the explicit coercion helpers in [`crate::coerce`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::coerce::{js_number, parse_calendar_year};

/// One entry of the meteorite landings dataset.
///
/// Only `year` and `mass` are interpreted; every other source field is
/// carried through untouched so responses return records wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeteorRecord {
    /// Landing date as reported by the source (e.g. `1880-01-01T00:00:00.000`).
    #[serde(
        default,
        deserialize_with = "loose_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    /// Mass in grams as reported by the source.
    #[serde(
        default,
        deserialize_with = "loose_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mass: Option<String>,
    /// Remaining source fields, passed through verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl MeteorRecord {
    /// Creates a record carrying only the interpreted fields.
    pub fn new(year: Option<&str>, mass: Option<&str>) -> Self {
        Self {
            year: year.map(str::to_owned),
            mass: mass.map(str::to_owned),
            extra: serde_json::Map::new(),
        }
    }

    /// Calendar year of the landing date, if the date parses.
    pub fn calendar_year(&self) -> Option<i32> {
        self.year.as_deref().and_then(parse_calendar_year)
    }

    /// Mass coerced to a number, if present and parseable.
    pub fn mass_value(&self) -> Option<f64> {
        self.mass.as_deref().and_then(js_number)
    }
}

/// Accepts a string, number, or boolean and stores its string form;
/// null, absent, and structured values become `None`.
fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}
