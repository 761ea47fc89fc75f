use chrono::{DateTime, Local};
use serde_json::{Map, Value};

use crate::decode::{parse_datetime, parse_f64, parse_string, require_str};
use crate::encode::encode_datetime;
use crate::error::Result;
use crate::registry::fields;

/// Direction of a group transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// Wire value as stored in the `tipo` field; unknown values read back as
    /// deposits, the common case.
    pub fn from_wire(value: &str) -> Self {
        if value.eq_ignore_ascii_case("retiro") {
            TransactionKind::Withdrawal
        } else {
            TransactionKind::Deposit
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "aporte",
            TransactionKind::Withdrawal => "retiro",
        }
    }
}

/// A logged contribution or withdrawal, stored in `transacciones`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub group_id: String,
    pub user_id: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub note: String,
    pub date: DateTime<Local>,
}

impl Transaction {
    pub fn from_raw(id: &str, raw: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            id: id.to_string(),
            group_id: require_str(raw, fields::GROUP_ID)?,
            user_id: require_str(raw, fields::USER_ID)?,
            amount: parse_f64(raw.get(fields::AMOUNT), 0.0),
            kind: TransactionKind::from_wire(&parse_string(raw.get(fields::KIND), "aporte")),
            note: parse_string(raw.get(fields::NOTE), ""),
            date: parse_datetime(raw.get(fields::DATE)),
        })
    }

    pub fn to_raw(&self) -> Map<String, Value> {
        let mut raw = Map::new();
        raw.insert(fields::GROUP_ID.into(), Value::String(self.group_id.clone()));
        raw.insert(fields::USER_ID.into(), Value::String(self.user_id.clone()));
        raw.insert(fields::AMOUNT.into(), self.amount.into());
        raw.insert(
            fields::KIND.into(),
            Value::String(self.kind.as_wire().to_string()),
        );
        raw.insert(fields::NOTE.into(), Value::String(self.note.clone()));
        raw.insert(fields::DATE.into(), encode_datetime(self.date));
        raw
    }
}
