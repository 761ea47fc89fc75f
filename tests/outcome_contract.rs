//! Contract tests for the Outcome container

use fincomu_core::{CoreError, Outcome};

#[test]
fn success_carries_payload() {
    let outcome = Outcome::success(41);
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert_eq!(outcome.value(), Some(&41));
    assert_eq!(outcome.value_or_fail().unwrap(), 41);
}

#[test]
fn empty_success_is_success_but_has_no_payload() {
    let outcome: Outcome<String> = Outcome::success_empty();
    assert!(outcome.is_success());
    assert!(outcome.value().is_none());
}

#[test]
fn value_or_fail_on_empty_success_fails_loudly() {
    let outcome: Outcome<String> = Outcome::success_empty();
    let err = outcome.value_or_fail().unwrap_err();
    assert!(matches!(err, CoreError::Contract { .. }));
}

#[test]
fn failure_exposes_message_and_cause() {
    let cause = anyhow::anyhow!("socket closed");
    let outcome: Outcome<u32> = Outcome::failure("No se pudo cargar el grupo", Some(cause));
    assert!(outcome.is_failure());
    assert!(!outcome.is_success());
    assert_eq!(outcome.error_message(), Some("No se pudo cargar el grupo"));
    assert!(outcome.cause().is_some());
    assert!(outcome.value().is_none());
}

#[test]
fn value_or_fail_on_failure_propagates_the_cause() {
    let outcome: Outcome<u32> =
        Outcome::failure("mensaje visible", Some(anyhow::anyhow!("socket closed")));
    let err = outcome.value_or_fail().unwrap_err();
    assert!(err.to_string().contains("socket closed"));
}

#[test]
fn value_or_fail_on_failure_without_cause_uses_the_message() {
    let outcome: Outcome<u32> = Outcome::failure("mensaje visible", None);
    let err = outcome.value_or_fail().unwrap_err();
    assert!(err.to_string().contains("mensaje visible"));
}

#[test]
fn value_or_fail_keeps_typed_causes_typed() {
    let cause = anyhow::Error::new(CoreError::MissingField {
        field: "uid".into(),
    });
    let outcome: Outcome<u32> = Outcome::failure("perfil inválido", Some(cause));
    let err = outcome.value_or_fail().unwrap_err();
    assert!(matches!(err, CoreError::MissingField { field } if field == "uid"));
}

#[test]
fn from_fault_derives_the_message_from_the_cause() {
    let outcome: Outcome<u32> = Outcome::from_fault(anyhow::anyhow!("timeout after 20s"));
    assert_eq!(outcome.error_message(), Some("timeout after 20s"));
    assert!(outcome.cause().is_some());
}

#[test]
fn core_errors_convert_into_failures() {
    let outcome: Outcome<u32> = CoreError::MissingField {
        field: "uid".into(),
    }
    .into();
    assert!(outcome.is_failure());
    assert!(outcome.error_message().unwrap().contains("uid"));
}

#[test]
fn map_is_a_no_op_on_failure() {
    let outcome: Outcome<u32> = Outcome::failure("falló", None);
    let mapped = outcome.map(|n| n * 2);
    assert!(mapped.is_failure());
    assert_eq!(mapped.error_message(), Some("falló"));
}

#[test]
fn map_preserves_the_cause_on_failure() {
    let outcome: Outcome<u32> = Outcome::failure("falló", Some(anyhow::anyhow!("root cause")));
    let mapped = outcome.map(|n| n.to_string());
    assert!(mapped.cause().is_some());
    assert_eq!(format!("{}", mapped.cause().unwrap()), "root cause");
}

#[test]
fn map_transforms_the_payload_on_success() {
    let outcome = Outcome::success(21).map(|n| n * 2);
    assert_eq!(outcome.value_or_fail().unwrap(), 42);
}

#[test]
fn map_on_empty_success_stays_empty() {
    let outcome: Outcome<u32> = Outcome::success_empty();
    let mapped = outcome.map(|n| n.to_string());
    assert!(mapped.is_success());
    assert!(mapped.value().is_none());
}

#[test]
fn try_map_success_path() {
    let outcome = Outcome::success("42").try_map(|s| Ok(s.parse::<u32>()?));
    assert_eq!(outcome.value_or_fail().unwrap(), 42);
}

#[test]
fn try_map_fault_becomes_failure_with_cause() {
    let outcome = Outcome::success("not a number").try_map(|s| Ok(s.parse::<u32>()?));
    assert!(outcome.is_failure());
    let message = outcome.error_message().unwrap().to_string();
    assert!(message.starts_with("transform failed"));
    assert!(outcome.cause().is_some());
}

#[test]
fn try_map_passes_failures_through_untouched() {
    let outcome: Outcome<u32> = Outcome::failure("original", None);
    let mapped: Outcome<String> = outcome.try_map(|_| anyhow::bail!("never runs"));
    assert_eq!(mapped.error_message(), Some("original"));
}
