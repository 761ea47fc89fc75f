use chrono::{DateTime, Local};
use serde_json::{Map, Value};

use crate::decode::{parse_datetime, parse_f64, parse_string, parse_string_list, require_str};
use crate::encode::{encode_datetime, encode_string_list};
use crate::error::Result;
use crate::registry::fields;

/// Savings group, stored in the `grupos` collection keyed by the document id.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub admin_uid: String,
    pub member_ids: Vec<String>,
    pub created_at: DateTime<Local>,
    pub savings_goal: f64,
    pub balance: f64,
}

impl Group {
    /// Builds a group from its raw document. The document id comes from the
    /// store key; `adminUid` is required (a group without an owner is not
    /// addressable by any screen).
    pub fn from_raw(id: &str, raw: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            id: id.to_string(),
            name: parse_string(raw.get(fields::NAME), ""),
            admin_uid: require_str(raw, fields::ADMIN_UID)?,
            member_ids: parse_string_list(raw.get(fields::MEMBER_IDS)),
            created_at: parse_datetime(raw.get(fields::CREATED_AT)),
            savings_goal: parse_f64(raw.get(fields::SAVINGS_GOAL), 0.0),
            balance: parse_f64(raw.get(fields::BALANCE), 0.0),
        })
    }

    /// Raw document for the store; the id stays in the store key.
    pub fn to_raw(&self) -> Map<String, Value> {
        let mut raw = Map::new();
        raw.insert(fields::NAME.into(), Value::String(self.name.clone()));
        raw.insert(
            fields::ADMIN_UID.into(),
            Value::String(self.admin_uid.clone()),
        );
        raw.insert(
            fields::MEMBER_IDS.into(),
            encode_string_list(&self.member_ids),
        );
        raw.insert(fields::CREATED_AT.into(), encode_datetime(self.created_at));
        raw.insert(fields::SAVINGS_GOAL.into(), self.savings_goal.into());
        raw.insert(fields::BALANCE.into(), self.balance.into());
        raw
    }
}
