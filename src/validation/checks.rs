//! Stock rules for the checks data-entry forms keep writing.

use crate::core::{FieldValue, Rule};

/// Fails when the value is falsy (`Undefined`, `Null`, `false`, `0`, `NaN`
/// or the empty string).
///
/// Note that a single space is truthy and passes.
pub fn required(message: impl Into<String>) -> Rule {
    Rule::predicate(FieldValue::is_truthy, message)
}

/// Fails when the value does not convert to a number.
///
/// Conversion is loose: blank text converts to `0` and therefore passes.
/// Use [`strict_numeric`] when blank input must be rejected.
pub fn numeric(message: impl Into<String>) -> Rule {
    Rule::predicate(|value| !value.is_nan(), message)
}

/// Fails when the value is falsy or does not convert to a number.
///
/// `0` is falsy, so this rejects zero as well.
pub fn required_numeric(message: impl Into<String>) -> Rule {
    Rule::predicate(|value| value.is_truthy() && !value.is_nan(), message)
}

/// Fails on blank text, `Undefined`, `Null`, and anything that does not
/// convert to a number.
pub fn strict_numeric(message: impl Into<String>) -> Rule {
    Rule::predicate(
        |value| {
            !matches!(value, FieldValue::Undefined | FieldValue::Null)
                && !value.is_blank()
                && !value.is_nan()
        },
        message,
    )
}

/// Never fails.
pub fn accept_any() -> Rule {
    Rule::new(|_| None)
}
