//! Validation failures and rule-set construction errors.

use crate::core::Field;
use thiserror::Error;

/// A single failed rule: the field and the message its rule produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldError<F: Field> {
    pub field: F,
    pub message: String,
}

/// Errors that can occur when building a rule set
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Field '{field}' already has a rule")]
    DuplicateRule { field: String },

    #[error("Rule given for field '{field}', which the form does not declare")]
    UnknownField { field: String },
}
