//! Error types raised back to the host evaluator.
//!
//! Uses `thiserror` for ergonomic error definition. The host halts evaluation
//! of the current expression and surfaces the message to the end user, so
//! every variant renders with the function name embedded.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// Result alias for stencil operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for stencil function calls.
///
/// Functions validate before transforming and fail closed: either variant
/// aborts the call immediately with no partial result.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Too few arguments after call-wrapping normalization.
    #[error("{function}(): wrong number of arguments given ({given} for {required})")]
    WrongArgumentCount {
        /// Name of the function that rejected the call.
        function: &'static str,
        /// Minimum number of arguments the function accepts.
        required: usize,
        /// Number of arguments actually given.
        given: usize,
    },

    /// First argument's type is not accepted by the function.
    #[error("{function}(): requires {expected} to work with, got {actual}")]
    UnsupportedArgument {
        /// Name of the function that rejected the call.
        function: &'static str,
        /// The type shape the function accepts.
        expected: Expectation,
        /// The type actually given.
        actual: Type,
    },

    /// Name was not found in the function registry.
    #[error("{0}(): unknown function")]
    UnknownFunction(String),

    /// A function name was registered twice (startup misconfiguration).
    #[error("{0}(): function already registered")]
    DuplicateFunction(String),
}

impl Error {
    /// Creates a wrong-argument-count error.
    #[must_use]
    pub fn wrong_argument_count(function: &'static str, required: usize, given: usize) -> Self {
        Self::WrongArgumentCount {
            function,
            required,
            given,
        }
    }

    /// Creates an unsupported-argument error.
    #[must_use]
    pub fn unsupported_argument(function: &'static str, expected: Expectation, actual: Type) -> Self {
        Self::UnsupportedArgument {
            function,
            expected,
            actual,
        }
    }

    /// Creates an unknown-function error.
    #[must_use]
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction(name.into())
    }

    /// Creates a duplicate-function error.
    #[must_use]
    pub fn duplicate_function(name: impl Into<String>) -> Self {
        Self::DuplicateFunction(name.into())
    }
}

/// Type shapes a function can declare as accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expectation {
    /// Accepts a sequence only.
    Sequence,
    /// Accepts a sequence or a string.
    SequenceOrString,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence => write!(f, "a sequence"),
            Self::SequenceOrString => write!(f, "a sequence or a string"),
        }
    }
}
