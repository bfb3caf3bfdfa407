//! Engine misuse errors.

use thiserror::Error;

/// Errors reported by the strict engine operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Field '{field}' is not part of this form")]
    UnknownField { field: String },
}
