//! End-to-end decode/encode tests for the domain records

use chrono::{TimeZone, Utc};
use fincomu_core::error::CoreError;
use fincomu_core::records::{Group, Loan, LoanStatus, Meeting, Transaction, TransactionKind, User};
use serde_json::{Map, Value, json};

fn raw(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("object literal")
}

#[test]
fn user_decodes_and_reencodes_the_registration_date_in_utc() {
    let doc = raw(json!({
        "uid": "u1",
        "nombre": "Ana",
        "fechaRegistro": "2024-01-01T00:00:00Z",
        "esActivo": true
    }));

    let user = User::from_raw(&doc).unwrap();
    assert_eq!(user.uid, "u1");
    assert_eq!(user.name, "Ana");
    assert!(user.active);
    assert_eq!(
        user.registered_at,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
    // Optional fields the document never had come back as safe defaults.
    assert_eq!(user.email, "");
    assert!(user.group_ids.is_empty());

    let encoded = user.to_raw();
    assert_eq!(encoded.get("fechaRegistro"), Some(&json!("2024-01-01T00:00:00Z")));
    assert_eq!(encoded.get("uid"), Some(&json!("u1")));
}

#[test]
fn user_without_uid_is_a_validation_fault() {
    let doc = raw(json!({"nombre": "Ana"}));
    let err = User::from_raw(&doc).unwrap_err();
    assert!(matches!(err, CoreError::MissingField { field } if field == "uid"));
}

#[test]
fn user_tolerates_type_drift_in_optional_fields() {
    let doc = raw(json!({
        "uid": "u1",
        "nombre": 42,
        "esActivo": "true",
        "gruposIds": [1, "g2"]
    }));
    let user = User::from_raw(&doc).unwrap();
    assert_eq!(user.name, "42");
    assert!(user.active);
    assert_eq!(user.group_ids, vec!["1", "g2"]);
}

#[test]
fn group_round_trips_and_parses_numeric_strings() {
    let doc = raw(json!({
        "nombre": "Ahorro Familiar",
        "adminUid": "u1",
        "miembrosIds": ["u1", "u2"],
        "fechaCreacion": "2024-02-01T12:00:00Z",
        "metaAhorro": "1500.5",
        "saldo": 320.25
    }));
    let group = Group::from_raw("g1", &doc).unwrap();
    assert_eq!(group.id, "g1");
    assert_eq!(group.savings_goal, 1500.5);
    assert_eq!(group.balance, 320.25);

    let encoded = group.to_raw();
    assert_eq!(encoded.get("adminUid"), Some(&json!("u1")));
    assert_eq!(encoded.get("metaAhorro"), Some(&json!(1500.5)));
    // The id lives in the store key, not the document.
    assert!(!encoded.contains_key("id"));
    assert_eq!(Group::from_raw("g1", &encoded).unwrap(), group);
}

#[test]
fn group_without_admin_is_a_validation_fault() {
    let doc = raw(json!({"nombre": "Sin dueño"}));
    let err = Group::from_raw("g1", &doc).unwrap_err();
    assert!(matches!(err, CoreError::MissingField { field } if field == "adminUid"));
}

#[test]
fn transaction_kind_wire_values() {
    assert_eq!(TransactionKind::from_wire("retiro"), TransactionKind::Withdrawal);
    assert_eq!(TransactionKind::from_wire("RETIRO"), TransactionKind::Withdrawal);
    assert_eq!(TransactionKind::from_wire("aporte"), TransactionKind::Deposit);
    // Unknown wire values read back as deposits rather than faulting.
    assert_eq!(TransactionKind::from_wire("???"), TransactionKind::Deposit);
    assert_eq!(TransactionKind::Withdrawal.as_wire(), "retiro");
}

#[test]
fn transaction_round_trips() {
    let doc = raw(json!({
        "grupoId": "g1",
        "usuarioId": "u2",
        "monto": "50",
        "tipo": "retiro",
        "fecha": "2024-04-01T09:30:00Z"
    }));
    let tx = Transaction::from_raw("t1", &doc).unwrap();
    assert_eq!(tx.amount, 50.0);
    assert_eq!(tx.kind, TransactionKind::Withdrawal);
    assert_eq!(tx.note, "");
    assert_eq!(Transaction::from_raw("t1", &tx.to_raw()).unwrap(), tx);
}

#[test]
fn loan_decodes_votes_and_status() {
    let doc = raw(json!({
        "grupoId": "g1",
        "solicitanteUid": "u3",
        "monto": 1000.0,
        "tasaInteres": 0.05,
        "estado": "aprobado",
        "votos": {"u1": true, "u2": false, "u4": "true"},
        "fechaSolicitud": "2024-05-01T00:00:00Z"
    }));
    let loan = Loan::from_raw("l1", &doc).unwrap();
    assert_eq!(loan.status, LoanStatus::Approved);
    assert_eq!(loan.votes.get("u1"), Some(&true));
    assert_eq!(loan.votes.get("u2"), Some(&false));
    // String-typed vote drift coerces instead of crashing the reader.
    assert_eq!(loan.votes.get("u4"), Some(&true));
    assert!(loan.due_date.is_none());

    let encoded = loan.to_raw();
    assert!(!encoded.contains_key("fechaVencimiento"));
    assert_eq!(Loan::from_raw("l1", &encoded).unwrap(), loan);
}

#[test]
fn loan_status_unknown_wire_value_reads_as_pending() {
    let doc = raw(json!({
        "grupoId": "g1",
        "solicitanteUid": "u3",
        "estado": "en-revisión"
    }));
    let loan = Loan::from_raw("l1", &doc).unwrap();
    assert_eq!(loan.status, LoanStatus::Pending);
    assert_eq!(loan.amount, 0.0);
    assert!(loan.votes.is_empty());
}

#[test]
fn meeting_round_trips() {
    let doc = raw(json!({
        "grupoId": "g1",
        "titulo": "Cierre de mes",
        "lugar": "Casa comunal",
        "fechaProgramada": "2024-06-15T18:00:00Z",
        "asistentesIds": ["u1", "u2"]
    }));
    let meeting = Meeting::from_raw("m1", &doc).unwrap();
    assert_eq!(meeting.title, "Cierre de mes");
    assert_eq!(meeting.attendee_ids, vec!["u1", "u2"]);
    assert_eq!(Meeting::from_raw("m1", &meeting.to_raw()).unwrap(), meeting);
}
