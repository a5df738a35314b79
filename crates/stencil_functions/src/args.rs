//! Call-argument normalization shared by every registered function.
//!
//! Depending on the call site (manifest vs. template), the host may deliver
//! the true argument list wrapped in an outer single-element sequence. The
//! registry unwraps this once, at the dispatch boundary, so individual
//! functions only ever see a flat argument list.

use stencil_foundation::{Error, Result, Value};

/// Unwraps the host-call wrapping artifact.
///
/// If the first positional argument is itself a sequence, the argument list
/// becomes that inner sequence's elements; any trailing arguments outside the
/// wrap are discarded, matching the host convention. Otherwise the list is
/// returned unchanged.
#[must_use]
pub fn normalize(args: &[Value]) -> Vec<Value> {
    match args.first() {
        Some(Value::Seq(inner)) => inner.iter().cloned().collect(),
        _ => args.to_vec(),
    }
}

/// Validates arity against a normalized argument list.
///
/// # Errors
///
/// Returns [`Error::WrongArgumentCount`] when fewer than `required` arguments
/// were given.
pub fn require_min(function: &'static str, args: &[Value], required: usize) -> Result<()> {
    if args.len() < required {
        return Err(Error::wrong_argument_count(function, required, args.len()));
    }
    Ok(())
}
