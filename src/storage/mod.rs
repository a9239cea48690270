//! Input loading for budgetlens
//!
//! Reads JSON exports of the backend's transactions and budgets endpoints.
//! Payloads may be a bare array or a paginated object wrapping the array.

pub mod file_io;

pub use file_io::{read_json_required, write_json_atomic};

use std::path::Path;

use serde_json::Value;

use crate::error::{BudgetLensError, BudgetLensResult};
use crate::models::{BudgetEnvelope, TransactionRecord};
use crate::services::normalize::{normalize_envelope, normalize_records};

/// Keys under which paginated responses nest their items
const COLLECTION_KEYS: [&str; 4] = ["data", "transactions", "items", "results"];

/// Extract the item array from a response body
pub fn unwrap_collection(body: Value) -> BudgetLensResult<Vec<Value>> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => COLLECTION_KEYS
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .ok_or_else(|| {
                BudgetLensError::Input(format!(
                    "expected an array or an object with one of: {}",
                    COLLECTION_KEYS.join(", ")
                ))
            }),
        other => Err(BudgetLensError::Input(format!(
            "expected an array, found {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Normalize a transactions response body
pub fn parse_transactions(body: Value) -> BudgetLensResult<Vec<TransactionRecord>> {
    let items = unwrap_collection(body)?;
    let records = normalize_records(&items);

    let undated = records.iter().filter(|r| !r.is_dated()).count();
    if undated > 0 {
        tracing::warn!(undated, "records without a valid date are left out of monthly views");
    }

    Ok(records)
}

/// Normalize a budgets response body, skipping entries without category or month
pub fn parse_envelopes(body: Value) -> BudgetLensResult<Vec<BudgetEnvelope>> {
    let items = unwrap_collection(body)?;
    let mut envelopes = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match normalize_envelope(item) {
            Ok(envelope) => envelopes.push(envelope),
            Err(e) => tracing::warn!(index, error = %e, "skipping budget entry"),
        }
    }

    Ok(envelopes)
}

/// Load and normalize a transactions export
pub fn load_transactions<P: AsRef<Path>>(path: P) -> BudgetLensResult<Vec<TransactionRecord>> {
    let path = path.as_ref();
    let records = parse_transactions(read_json_required(path)?)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded transactions");
    Ok(records)
}

/// Load and normalize a budgets export
pub fn load_envelopes<P: AsRef<Path>>(path: P) -> BudgetLensResult<Vec<BudgetEnvelope>> {
    let path = path.as_ref();
    let envelopes = parse_envelopes(read_json_required(path)?)?;
    tracing::debug!(path = %path.display(), count = envelopes.len(), "loaded envelopes");
    Ok(envelopes)
}
