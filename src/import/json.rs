//! JSON import and element normalization
//!
//! Import is all-or-nothing at the document level: the text must be a JSON
//! array. Individual elements are never rejected; every field is coerced to
//! something usable.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{CashioError, CashioResult};
use crate::models::{category, today, Entry, EntryId, EntryKind, Money};

/// Parse import text into normalized entries, using today's date for
/// elements without one
pub fn parse_import(text: &str) -> CashioResult<Vec<Entry>> {
    parse_import_on(text, &today())
}

/// Parse import text into normalized entries with an explicit fallback date
pub fn parse_import_on(text: &str, fallback_date: &str) -> CashioResult<Vec<Entry>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| CashioError::Import(format!("Invalid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(CashioError::Import(format!(
                "Expected a JSON array of entries, found {}",
                describe(&other)
            )))
        }
    };

    debug!(count = items.len(), "normalizing imported entries");
    Ok(items
        .iter()
        .map(|item| normalize_imported(item, fallback_date))
        .collect())
}

/// Normalize one imported element
///
/// Missing or empty categories become the default category and a missing
/// date becomes `fallback_date`.
pub fn normalize_imported(value: &Value, fallback_date: &str) -> Entry {
    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);

    let category = fields
        .get("category")
        .and_then(Value::as_str)
        .map(category::or_default)
        .unwrap_or_else(|| category::DEFAULT_CATEGORY.to_string());

    let date = match fields.get("date").and_then(Value::as_str) {
        Some(date) if !date.is_empty() => date,
        _ => fallback_date,
    };

    Entry {
        id: coerce_id(fields.get("id")),
        kind: coerce_kind(fields.get("type")),
        amount: fields.get("amount").map(coerce_amount).unwrap_or_default(),
        category,
        note: string_or_empty(fields.get("note")),
        date: date.chars().take(10).collect(),
    }
}

/// Normalize one element of the persisted ledger blob
///
/// Only the amount and type are coerced. Category, note and date are kept
/// as stored (missing becomes an empty string).
pub fn normalize_persisted(value: &Value) -> Entry {
    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);

    Entry {
        id: coerce_id(fields.get("id")),
        kind: coerce_kind(fields.get("type")),
        amount: fields.get("amount").map(coerce_amount).unwrap_or_default(),
        category: string_or_empty(fields.get("category")),
        note: string_or_empty(fields.get("note")),
        date: string_or_empty(fields.get("date")),
    }
}

/// Coerce any JSON value into an amount, defaulting to zero
///
/// Numbers and numeric strings are rounded to the nearest unit; booleans
/// count as 0/1. Everything else, and anything negative or non-finite, is 0.
pub fn coerce_amount(value: &Value) -> Money {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    Money::coerce(number)
}

fn coerce_id(value: Option<&Value>) -> EntryId {
    match value {
        Some(Value::String(s)) => EntryId::from(s.as_str()),
        Some(Value::Number(n)) => EntryId::from(n.to_string()),
        _ => EntryId::generate(),
    }
}

fn coerce_kind(value: Option<&Value>) -> EntryKind {
    value
        .and_then(Value::as_str)
        .map(EntryKind::from_code)
        .unwrap_or(EntryKind::Inflow)
}

fn string_or_empty(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
