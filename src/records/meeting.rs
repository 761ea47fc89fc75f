use chrono::{DateTime, Local};
use serde_json::{Map, Value};

use crate::decode::{parse_datetime, parse_string, parse_string_list, require_str};
use crate::encode::{encode_datetime, encode_string_list};
use crate::error::Result;
use crate::registry::fields;

/// Scheduled group meeting, stored in `reuniones`.
#[derive(Debug, Clone, PartialEq)]
pub struct Meeting {
    pub id: String,
    pub group_id: String,
    pub title: String,
    pub location: String,
    pub scheduled_at: DateTime<Local>,
    pub attendee_ids: Vec<String>,
}

impl Meeting {
    pub fn from_raw(id: &str, raw: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            id: id.to_string(),
            group_id: require_str(raw, fields::GROUP_ID)?,
            title: parse_string(raw.get(fields::TITLE), ""),
            location: parse_string(raw.get(fields::LOCATION), ""),
            scheduled_at: parse_datetime(raw.get(fields::SCHEDULED_AT)),
            attendee_ids: parse_string_list(raw.get(fields::ATTENDEE_IDS)),
        })
    }

    pub fn to_raw(&self) -> Map<String, Value> {
        let mut raw = Map::new();
        raw.insert(fields::GROUP_ID.into(), Value::String(self.group_id.clone()));
        raw.insert(fields::TITLE.into(), Value::String(self.title.clone()));
        raw.insert(fields::LOCATION.into(), Value::String(self.location.clone()));
        raw.insert(
            fields::SCHEDULED_AT.into(),
            encode_datetime(self.scheduled_at),
        );
        raw.insert(
            fields::ATTENDEE_IDS.into(),
            encode_string_list(&self.attendee_ids),
        );
        raw
    }
}
