//! Integration tests for Error types
//!
//! Tests error construction and the exact diagnostic wording the host
//! surfaces to end users.

use stencil_foundation::{Error, Expectation, Type};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_wrong_argument_count() {
    let err = Error::wrong_argument_count("last", 1, 0);
    assert!(matches!(
        err,
        Error::WrongArgumentCount {
            function: "last",
            required: 1,
            given: 0
        }
    ));
}

#[test]
fn error_unsupported_argument() {
    let err = Error::unsupported_argument("last", Expectation::Sequence, Type::Int);
    assert!(matches!(err, Error::UnsupportedArgument { .. }));
}

#[test]
fn error_unknown_function() {
    let err = Error::unknown_function("frobnicate");
    assert!(matches!(err, Error::UnknownFunction(_)));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn display_wrong_argument_count() {
    let err = Error::wrong_argument_count("strip", 1, 0);
    assert_eq!(
        err.to_string(),
        "strip(): wrong number of arguments given (0 for 1)"
    );
}

#[test]
fn display_requires_sequence() {
    let err = Error::unsupported_argument("last", Expectation::Sequence, Type::String);
    assert_eq!(
        err.to_string(),
        "last(): requires a sequence to work with, got string"
    );
}

#[test]
fn display_requires_sequence_or_string() {
    let err = Error::unsupported_argument("strip", Expectation::SequenceOrString, Type::Float);
    assert_eq!(
        err.to_string(),
        "strip(): requires a sequence or a string to work with, got float"
    );
}

#[test]
fn display_unknown_function() {
    let err = Error::unknown_function("frobnicate");
    assert_eq!(err.to_string(), "frobnicate(): unknown function");
}
