//! Encode-path helpers mirroring the decoders in [`crate::decode`].
//!
//! Writers go through these so that what lands in the store is exactly what
//! the decoders expect back.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Encodes a local instant for storage. Always normalizes to UTC and renders
/// RFC 3339 with second precision and a `Z` suffix.
pub fn encode_datetime(dt: DateTime<Local>) -> Value {
    Value::String(
        dt.with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

/// Encodes a list of strings as a plain array.
pub fn encode_string_list(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

/// Encodes a string-keyed boolean mapping (loan vote maps).
pub fn encode_bool_map<'a, I>(entries: I) -> Value
where
    I: IntoIterator<Item = (&'a String, &'a bool)>,
{
    let mut map = Map::new();
    for (key, value) in entries {
        map.insert(key.clone(), Value::Bool(*value));
    }
    Value::Object(map)
}
