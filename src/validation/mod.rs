//! Rule sets and validation for whole forms.
//!
//! A rule set maps each field to one [`Rule`](crate::core::Rule). Checking a
//! rule set uses Stillwater's `Validation` type so that every failing field
//! is reported in a single pass instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use formstate::core::FieldValues;
//! use formstate::validation::{numeric, required, RuleSet};
//!
//! let rules = RuleSet::builder()
//!     .rule("nome".to_string(), required("required"))
//!     .rule("valor".to_string(), numeric("invalid"))
//!     .build()
//!     .unwrap();
//!
//! let values = FieldValues::new()
//!     .with("nome".to_string(), "")
//!     .with("valor".to_string(), 0);
//!
//! let errors = rules.errors_for(&values);
//! assert_eq!(errors.get(&"nome".to_string()), Some("required"));
//! assert!(errors.get(&"valor".to_string()).is_none());
//! ```

pub mod builder;
pub mod checks;
pub mod errors;
pub mod rules;

// Re-export commonly used types
pub use builder::RuleSetBuilder;
pub use checks::{accept_any, numeric, required, required_numeric, strict_numeric};
pub use errors::{BuildError, FieldError};
pub use rules::RuleSet;
