//! Integration tests for the `last` function.

use stencil_foundation::{Error, Seq, Value};
use stencil_functions::collection::native_last;

use crate::helpers::call_from_manifest;

// =============================================================================
// Direct Invocation
// =============================================================================

#[test]
fn last_returns_final_element() {
    let seq: Value = vec!["a", "b", "c"].into();
    assert_eq!(native_last(&[seq]).unwrap(), Value::from("c"));
}

#[test]
fn last_single_element_sequence() {
    let seq: Value = vec![Value::Int(9)].into();
    assert_eq!(native_last(&[seq]).unwrap(), Value::Int(9));
}

#[test]
fn last_empty_sequence_returns_nil() {
    // Permissive host semantics: no error path for an empty sequence.
    let seq = Value::Seq(Seq::<Value>::new());
    assert_eq!(native_last(&[seq]).unwrap(), Value::Nil);
}

#[test]
fn last_heterogeneous_sequence() {
    let seq: Value = vec![Value::from("a"), Value::Int(3), Value::Nil].into();
    assert_eq!(native_last(&[seq]).unwrap(), Value::Nil);
}

#[test]
fn last_ignores_extra_arguments() {
    let seq: Value = vec!["a", "b"].into();
    assert_eq!(
        native_last(&[seq, Value::from("ignored")]).unwrap(),
        Value::from("b")
    );
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn last_zero_arguments_is_arity_error() {
    let err = native_last(&[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "last(): wrong number of arguments given (0 for 1)"
    );
}

#[test]
fn last_string_argument_is_type_error() {
    let err = native_last(&[Value::from("abc")]).unwrap_err();
    assert!(matches!(err, Error::UnsupportedArgument { .. }));
    assert_eq!(
        err.to_string(),
        "last(): requires a sequence to work with, got string"
    );
}

#[test]
fn last_int_argument_is_type_error() {
    let err = native_last(&[Value::Int(5)]).unwrap_err();
    assert!(matches!(err, Error::UnsupportedArgument { .. }));
}

// =============================================================================
// Host Calling Convention (manifest wrap)
// =============================================================================

#[test]
fn last_from_manifest() {
    let a: Value = vec!["a", "b", "c"].into();
    let b: Value = vec!["d", "e", "f"].into();
    assert_eq!(
        call_from_manifest("last", vec![a]).unwrap(),
        Value::from("c")
    );
    assert_eq!(
        call_from_manifest("last", vec![b]).unwrap(),
        Value::from("f")
    );
}

#[test]
fn last_from_manifest_empty_sequence() {
    let empty = Value::Seq(Seq::<Value>::new());
    assert_eq!(call_from_manifest("last", vec![empty]).unwrap(), Value::Nil);
}

#[test]
fn last_from_manifest_zero_arguments() {
    let err = call_from_manifest("last", vec![]).unwrap_err();
    assert!(matches!(err, Error::WrongArgumentCount { given: 0, .. }));
}

#[test]
fn last_from_manifest_string_argument() {
    let err = call_from_manifest("last", vec![Value::from("abc")]).unwrap_err();
    assert!(matches!(err, Error::UnsupportedArgument { .. }));
}
