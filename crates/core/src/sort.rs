//! Character ordering
//!
//! Sorts opaque character records by one of the fields the catalog exposes.
//! Names use [`locale_cmp`]; mass and height are numeric strings where the
//! catalog writes `"unknown"` for missing measurements.

use std::cmp::Ordering;

use serde_json::Value;

use crate::collation::locale_cmp;
use crate::error::ValidationError;
use crate::swapi::Record;

/// Marker the catalog uses for a measurement it does not have
pub const UNKNOWN: &str = "unknown";

/// Field a character listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Mass,
    Height,
}

impl SortField {
    /// Record key holding the value this field sorts on
    pub fn key(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Mass => "mass",
            SortField::Height => "height",
        }
    }

    /// Parse the public `ordenar` query value
    ///
    /// `None` and the empty string mean "keep upstream order".
    pub fn from_ordenar(value: Option<&str>) -> Result<Option<Self>, ValidationError> {
        match value {
            None | Some("") => Ok(None),
            Some("nombre") => Ok(Some(SortField::Name)),
            Some("peso") => Ok(Some(SortField::Mass)),
            Some("altura") => Ok(Some(SortField::Height)),
            Some(other) => Err(ValidationError::InvalidSort(other.to_string())),
        }
    }
}

/// Numeric weight of a measurement
///
/// `"unknown"`, missing, and unparseable values all weigh `+inf` so they land
/// after every real measurement. Thousands separators are ignored.
pub fn measurement(value: Option<&Value>) -> f64 {
    let Some(raw) = value.and_then(Value::as_str) else {
        return f64::INFINITY;
    };

    if raw == UNKNOWN {
        return f64::INFINITY;
    }

    raw.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|n| !n.is_nan())
        .unwrap_or(f64::INFINITY)
}

fn name_of(record: &Record) -> &str {
    record.get("name").and_then(Value::as_str).unwrap_or("")
}

/// Compare two character records on `field`
pub fn compare_characters(a: &Record, b: &Record, field: SortField) -> Ordering {
    match field {
        SortField::Name => locale_cmp(name_of(a), name_of(b)),
        SortField::Mass | SortField::Height => {
            let key = field.key();
            measurement(a.get(key)).total_cmp(&measurement(b.get(key)))
        }
    }
}

/// Sort character records ascending by `field`
///
/// Stable: records that compare equal keep their upstream order.
pub fn sort_characters(mut characters: Vec<Record>, field: SortField) -> Vec<Record> {
    characters.sort_by(|a, b| compare_characters(a, b, field));
    characters
}
