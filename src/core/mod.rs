//! Core form types.
//!
//! This module contains the domain-independent pieces every form uses:
//! - Field naming via the `Field` trait
//! - Dynamic values with loose coercion (`FieldValue`)
//! - Value and error mappings
//! - Per-field validation rules
//!
//! Nothing here performs I/O or holds mutable state.

mod field;
mod rule;
mod value;
mod values;

pub use field::Field;
pub use rule::Rule;
pub use value::FieldValue;
pub use values::{FieldErrors, FieldValues};
