//! Defensive field decoders for raw store documents.
//!
//! The document store is schemaless and weakly typed at the wire level:
//! documents may be missing keys, carry the wrong type after a partial write
//! or schema migration, or encode dates three different ways depending on the
//! client version that wrote them. Every domain record is built from its raw
//! document through these coercions so that a reading client never crashes on
//! drifted data.
//!
//! Policy split, deliberate and relied upon by callers: required fields fail
//! loudly through [`require`]; optional fields default silently through the
//! `parse_*` functions.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde_json::{Map, Value};

use crate::error::{CoreError, Result};

/// Decodes a stored date value to local time.
///
/// # Accepted Formats
///
/// * **Timestamp object**: `{ "seconds": 1704067200, "nanoseconds": 0 }`
///   (the platform timestamp wire shape; `"nanos"` is accepted as an alias)
/// * **ISO-8601 / RFC 3339 string**: `"2024-01-01T00:00:00Z"`
/// * **Epoch milliseconds**: integer or float number
///
/// Absent or unrecognized input falls back to the current instant. That
/// fallback is a compatibility choice inherited from the original clients;
/// callers that must distinguish "no date" from "now" should use
/// [`parse_datetime_strict`] instead.
pub fn parse_datetime(value: Option<&Value>) -> DateTime<Local> {
    try_datetime(value).unwrap_or_else(Local::now)
}

/// Strict variant of [`parse_datetime`]: absent or unrecognized input is a
/// decode fault instead of defaulting to the current instant.
pub fn parse_datetime_strict(value: Option<&Value>) -> Result<DateTime<Local>> {
    try_datetime(value).ok_or_else(|| CoreError::Decode {
        message: format!(
            "unrecognized datetime value: {}",
            value.map(Value::to_string).unwrap_or_else(|| "null".into())
        ),
    })
}

fn try_datetime(value: Option<&Value>) -> Option<DateTime<Local>> {
    match value? {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Local)),
        Value::Number(n) => {
            let millis = if let Some(i) = n.as_i64() {
                i
            } else {
                let f = n.as_f64()?;
                if !f.is_finite() {
                    return None;
                }
                f.round() as i64
            };
            Utc.timestamp_millis_opt(millis)
                .single()
                .map(|dt| dt.with_timezone(&Local))
        }
        Value::Object(map) => {
            let seconds = map.get("seconds").and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("nanos"))
                .and_then(Value::as_i64)
                .unwrap_or(0);
            Utc.timestamp_opt(seconds, nanos.clamp(0, 999_999_999) as u32)
                .single()
                .map(|dt| dt.with_timezone(&Local))
        }
        _ => None,
    }
}

/// Decodes a floating-point field: matching number, integer, or a numeric
/// string. Null or unparsable input yields `default`.
pub fn parse_f64(value: Option<&Value>, default: f64) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Decodes an integer field: integer, float (truncated toward zero), or an
/// integer string. Null or unparsable input yields `default`.
pub fn parse_i64(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i
            } else if let Some(f) = n.as_f64() {
                if f.is_finite() { f.trunc() as i64 } else { default }
            } else {
                default
            }
        }
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Decodes a boolean field: bool, `"true"`/`"false"` strings
/// (case-insensitive), or a number (nonzero is true). Otherwise `default`.
pub fn parse_bool(value: Option<&Value>, default: bool) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                true
            } else if s.eq_ignore_ascii_case("false") {
                false
            } else {
                default
            }
        }
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(default),
        _ => default,
    }
}

/// Decodes a string field: strings pass through, scalars are stringified.
/// Null or structured input yields `default`.
pub fn parse_string(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(v @ (Value::Bool(_) | Value::Number(_))) => stringify(v),
        _ => default.to_string(),
    }
}

/// Decodes a list-of-strings field, preserving element order.
///
/// Null yields an empty list; array elements that are not strings are
/// stringified (`1` → `"1"`, `true` → `"true"`); any non-array input yields
/// an empty list.
pub fn parse_string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(stringify).collect(),
        _ => Vec::new(),
    }
}

/// Decodes a string-keyed mapping field.
///
/// Null yields an empty mapping; an object passes through (keys are already
/// strings in the wire model); any other type yields an empty mapping.
pub fn parse_string_map(value: Option<&Value>) -> Map<String, Value> {
    match value {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

/// Validates a required field: present and non-null yields the value, absent
/// or null is a validation fault naming the field.
///
/// This is the single faulting path in the decoder.
pub fn require<'a>(raw: &'a Map<String, Value>, field: &str) -> Result<&'a Value> {
    match raw.get(field) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(CoreError::MissingField {
            field: field.to_string(),
        }),
    }
}

/// [`require`] specialized to string identity fields; non-string scalars are
/// stringified rather than rejected.
pub fn require_str(raw: &Map<String, Value>, field: &str) -> Result<String> {
    let value = require(raw, field)?;
    Ok(match value {
        Value::String(s) => s.clone(),
        other => stringify(other),
    })
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
