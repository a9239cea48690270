//! Date normalizer
//!
//! Record dates live under different field names depending on the endpoint.
//! The first candidate that parses to a valid date wins; a record with no
//! valid candidate gets no date.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::models::FieldResolver;

/// Date fields, highest priority first
pub const DATE_FIELDS: FieldResolver =
    FieldResolver::new(&["date", "date_transaction", "date_revenu", "date_depense"]);

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Normalize the date of a raw record
pub fn parse_record_date(object: &Value) -> Option<NaiveDate> {
    DATE_FIELDS.resolve_with(object, parse_date_value)
}

/// Parse one JSON value as a date
///
/// Strings go through [`parse_date_str`]; integers are epoch milliseconds.
pub fn parse_date_value(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}

/// Parse a date string in any accepted form
///
/// Offset timestamps keep the calendar date written in their own offset.
pub fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}
