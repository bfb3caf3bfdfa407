//! Change events delivered by inputs.

use crate::core::FieldValue;

/// What an input reports when it changes.
#[derive(Clone, Debug, PartialEq)]
pub enum ChangeEvent {
    /// Text typed into an input. Inputs always report their value as text.
    Input { value: String },

    /// A value set directly, bypassing the input's text.
    Value(FieldValue),
}

impl ChangeEvent {
    pub fn input(value: impl Into<String>) -> Self {
        Self::Input {
            value: value.into(),
        }
    }

    /// The event's current value.
    pub fn into_value(self) -> FieldValue {
        match self {
            Self::Input { value } => FieldValue::Text(value),
            Self::Value(value) => value,
        }
    }
}

impl From<&str> for ChangeEvent {
    fn from(value: &str) -> Self {
        Self::input(value)
    }
}

impl From<String> for ChangeEvent {
    fn from(value: String) -> Self {
        Self::input(value)
    }
}

impl From<FieldValue> for ChangeEvent {
    fn from(value: FieldValue) -> Self {
        Self::Value(value)
    }
}
