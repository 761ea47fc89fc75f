use chrono::{DateTime, Local};
use serde_json::{Map, Value};

use crate::decode::{parse_bool, parse_datetime, parse_string, parse_string_list, require_str};
use crate::encode::{encode_datetime, encode_string_list};
use crate::error::Result;
use crate::registry::fields;

/// Member profile, stored in the `usuarios` collection keyed by `uid`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Local>,
    pub active: bool,
    pub group_ids: Vec<String>,
}

impl User {
    /// Builds a user from its raw document. `uid` is required; everything
    /// else defaults defensively.
    pub fn from_raw(raw: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            uid: require_str(raw, fields::UID)?,
            name: parse_string(raw.get(fields::NAME), ""),
            email: parse_string(raw.get(fields::EMAIL), ""),
            registered_at: parse_datetime(raw.get(fields::REGISTERED_AT)),
            active: parse_bool(raw.get(fields::ACTIVE), true),
            group_ids: parse_string_list(raw.get(fields::GROUP_IDS)),
        })
    }

    pub fn to_raw(&self) -> Map<String, Value> {
        let mut raw = Map::new();
        raw.insert(fields::UID.into(), Value::String(self.uid.clone()));
        raw.insert(fields::NAME.into(), Value::String(self.name.clone()));
        raw.insert(fields::EMAIL.into(), Value::String(self.email.clone()));
        raw.insert(
            fields::REGISTERED_AT.into(),
            encode_datetime(self.registered_at),
        );
        raw.insert(fields::ACTIVE.into(), Value::Bool(self.active));
        raw.insert(
            fields::GROUP_IDS.into(),
            encode_string_list(&self.group_ids),
        );
        raw
    }
}
