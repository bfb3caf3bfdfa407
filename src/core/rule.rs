//! Validation rules for single fields.

use super::value::FieldValue;
use std::fmt;
use std::sync::Arc;

/// Pure function that checks one field value.
///
/// A rule returns `None` when the value is acceptable and `Some(message)`
/// otherwise. Rules see only their own field's value, never the rest of
/// the form.
///
/// # Example
///
/// ```rust
/// use formstate::core::{FieldValue, Rule};
///
/// let not_empty = Rule::new(|v: &FieldValue| {
///     if v.is_truthy() { None } else { Some("required".to_string()) }
/// });
///
/// assert_eq!(not_empty.check(&FieldValue::from("")), Some("required".to_string()));
/// assert_eq!(not_empty.check(&FieldValue::from("Feijoada")), None);
/// ```
#[derive(Clone)]
pub struct Rule {
    check: Arc<dyn Fn(&FieldValue) -> Option<String> + Send + Sync>,
}

impl Rule {
    /// Create a rule from a pure check function.
    ///
    /// The function must be deterministic and thread-safe (Send + Sync).
    pub fn new<C>(check: C) -> Self
    where
        C: Fn(&FieldValue) -> Option<String> + Send + Sync + 'static,
    {
        Rule {
            check: Arc::new(check),
        }
    }

    /// Create a rule from a predicate and a fixed message.
    ///
    /// The message is reported when the predicate returns `false`.
    ///
    /// ```rust
    /// use formstate::core::{FieldValue, Rule};
    ///
    /// let positive = Rule::predicate(|v: &FieldValue| v.to_number() > 0.0, "must be positive");
    ///
    /// assert!(positive.check(&FieldValue::from(3)).is_none());
    /// assert_eq!(positive.check(&FieldValue::from(-1)).as_deref(), Some("must be positive"));
    /// ```
    pub fn predicate<P>(accepts: P, message: impl Into<String>) -> Self
    where
        P: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::new(move |value| (!accepts(value)).then(|| message.clone()))
    }

    /// Run the rule against a value.
    pub fn check(&self, value: &FieldValue) -> Option<String> {
        (self.check)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rule")
    }
}
