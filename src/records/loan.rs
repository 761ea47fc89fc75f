use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde_json::{Map, Value};

use crate::decode::{parse_bool, parse_datetime, parse_f64, parse_string, parse_string_map, require_str};
use crate::encode::{encode_bool_map, encode_datetime};
use crate::error::Result;
use crate::registry::fields;

/// Lifecycle state of a loan request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanStatus {
    Pending,
    Approved,
    Rejected,
    Repaid,
}

impl LoanStatus {
    /// Wire value as stored in the `estado` field; unknown values read back
    /// as pending rather than faulting.
    pub fn from_wire(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "aprobado" => LoanStatus::Approved,
            "rechazado" => LoanStatus::Rejected,
            "pagado" => LoanStatus::Repaid,
            _ => LoanStatus::Pending,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "pendiente",
            LoanStatus::Approved => "aprobado",
            LoanStatus::Rejected => "rechazado",
            LoanStatus::Repaid => "pagado",
        }
    }
}

/// Loan request with its per-member vote map, stored in `prestamos`.
///
/// Votes are kept in insertion-stable order (`BTreeMap`) so encoded
/// documents are deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    pub id: String,
    pub group_id: String,
    pub borrower_uid: String,
    pub amount: f64,
    pub interest_rate: f64,
    pub status: LoanStatus,
    pub votes: BTreeMap<String, bool>,
    pub requested_at: DateTime<Local>,
    pub due_date: Option<DateTime<Local>>,
}

impl Loan {
    pub fn from_raw(id: &str, raw: &Map<String, Value>) -> Result<Self> {
        let votes = parse_string_map(raw.get(fields::VOTES))
            .iter()
            .map(|(voter, value)| (voter.clone(), parse_bool(Some(value), false)))
            .collect();
        let due_date = raw
            .get(fields::DUE_DATE)
            .filter(|v| !v.is_null())
            .map(|v| parse_datetime(Some(v)));
        Ok(Self {
            id: id.to_string(),
            group_id: require_str(raw, fields::GROUP_ID)?,
            borrower_uid: require_str(raw, fields::BORROWER_UID)?,
            amount: parse_f64(raw.get(fields::AMOUNT), 0.0),
            interest_rate: parse_f64(raw.get(fields::INTEREST_RATE), 0.0),
            status: LoanStatus::from_wire(&parse_string(raw.get(fields::STATUS), "pendiente")),
            votes,
            requested_at: parse_datetime(raw.get(fields::REQUESTED_AT)),
            due_date,
        })
    }

    pub fn to_raw(&self) -> Map<String, Value> {
        let mut raw = Map::new();
        raw.insert(fields::GROUP_ID.into(), Value::String(self.group_id.clone()));
        raw.insert(
            fields::BORROWER_UID.into(),
            Value::String(self.borrower_uid.clone()),
        );
        raw.insert(fields::AMOUNT.into(), self.amount.into());
        raw.insert(fields::INTEREST_RATE.into(), self.interest_rate.into());
        raw.insert(
            fields::STATUS.into(),
            Value::String(self.status.as_wire().to_string()),
        );
        raw.insert(fields::VOTES.into(), encode_bool_map(&self.votes));
        raw.insert(
            fields::REQUESTED_AT.into(),
            encode_datetime(self.requested_at),
        );
        if let Some(due) = self.due_date {
            raw.insert(fields::DUE_DATE.into(), encode_datetime(due));
        }
        raw
    }
}
