//! Integration tests for Error types
//!
//! Tests error construction, display text, and source chaining.

use std::error::Error as _;

use fracas_foundation::{Error, Formula, Value};

// =============================================================================
// Construction and Display
// =============================================================================

#[test]
fn error_malformed_formula() {
    let err = Error::malformed_formula("7to9", "unrecognized dice expression");
    assert!(matches!(err, Error::MalformedFormula { .. }));
    assert_eq!(err.to_string(), "unrecognized dice expression: \"7to9\"");
}

#[test]
fn error_arity_mismatch() {
    let err = Error::arity_mismatch("POWER", 2, 3);
    assert!(matches!(
        err,
        Error::ArityMismatch {
            expected: 2,
            actual: 3,
            ..
        }
    ));
    assert_eq!(err.to_string(), "POWER expects 1 value or 2, got 3");
}

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch("int", "text");
    assert_eq!(err.to_string(), "type mismatch: expected int, got text");
}

#[test]
fn error_missing_context() {
    let err = Error::missing_context("Hero");
    assert_eq!(err.to_string(), "Hero has no current context");
}

#[test]
fn error_not_a_context() {
    let err = Error::not_a_context("bench");
    assert_eq!(err.to_string(), "bench is not a context");
}

#[test]
fn error_definition_io_chains_the_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err = Error::definition_io("missing.dat", io);
    assert!(err.to_string().contains("missing.dat"));
    assert!(err.source().is_some());
}

// =============================================================================
// Errors Raised by the Foundation Itself
// =============================================================================

#[test]
fn formula_parse_raises_malformed() {
    let err = Formula::parse("garbage").unwrap_err();
    assert!(matches!(err, Error::MalformedFormula { .. }));
    assert!(err.to_string().contains("garbage"));
}

#[test]
fn value_to_formula_raises_type_mismatch_for_lists() {
    let err = Value::parse("1,2").to_formula().unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert!(err.to_string().contains("list"));
}

#[test]
fn errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
