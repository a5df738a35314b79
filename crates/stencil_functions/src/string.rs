//! String functions.

use stencil_foundation::{Error, Expectation, Result, Seq, Value};

use crate::args::require_min;

/// Host-facing documentation for `strip`.
pub const STRIP_DOC: &str = "\
Returns either a new sequence or string with leading and trailing whitespace
removed from elements within.

Prototype:

    strip(x)

Where x is either a sequence or a string value.

For example:

  Given the following statements:

    $a = 'abc '
    $b = ' def '
    $c = [' gh', ' i ', 'j ']

    notice strip($a)
    notice strip($b)
    notice strip($c)

  The result will be as follows:

    notice: abc
    notice: def
    notice: [gh, i, j]
";

/// String: strip - trim leading and trailing whitespace.
///
/// A string argument is trimmed directly. A sequence argument yields a new
/// sequence of the same length and order with each string element trimmed;
/// non-string elements pass through unchanged, and nested sequences are not
/// descended into.
///
/// # Errors
///
/// Returns [`Error::WrongArgumentCount`] when called without arguments and
/// [`Error::UnsupportedArgument`] when the argument is neither a sequence
/// nor a string.
pub fn native_strip(args: &[Value]) -> Result<Value> {
    require_min("strip", args, 1)?;
    match &args[0] {
        Value::String(s) => Ok(Value::String(s.trim().into())),
        Value::Seq(seq) => {
            let stripped: Seq<Value> = seq
                .iter()
                .map(|item| match item {
                    Value::String(s) => Value::String(s.trim().into()),
                    other => other.clone(),
                })
                .collect();
            Ok(Value::Seq(stripped))
        }
        other => Err(Error::unsupported_argument(
            "strip",
            Expectation::SequenceOrString,
            other.value_type(),
        )),
    }
}
