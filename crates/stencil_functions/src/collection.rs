//! Sequence functions.

use stencil_foundation::{Error, Expectation, Result, Value};

use crate::args::require_min;

/// Host-facing documentation for `last`.
pub const LAST_DOC: &str = "\
Returns the last element from a sequence.

Prototype:

    last(a)

Where a is a sequence.

For example:

  Given the following statements:

    $a = ['a', 'b', 'c']
    $b = ['d', 'e', 'f']

    notice last($a)
    notice last($b)

  The result will be as follows:

    notice: c
    notice: f
";

/// Sequence: last - final element of a sequence.
///
/// An empty sequence yields nil rather than an error, matching the host's
/// permissive lookup semantics.
///
/// # Errors
///
/// Returns [`Error::WrongArgumentCount`] when called without arguments and
/// [`Error::UnsupportedArgument`] when the argument is not a sequence.
pub fn native_last(args: &[Value]) -> Result<Value> {
    require_min("last", args, 1)?;
    match &args[0] {
        Value::Seq(seq) => Ok(seq.last().cloned().unwrap_or(Value::Nil)),
        other => Err(Error::unsupported_argument(
            "last",
            Expectation::Sequence,
            other.value_type(),
        )),
    }
}
