//! Formstate: a small form-state and validation engine
//!
//! Formstate keeps the in-progress values of one data-entry form, runs the
//! caller's per-field rules against them, and keeps the resulting error
//! messages for display. The engine is pure in-process state; talking to a
//! server is left to the optional [`host`] layer.
//!
//! # Core Concepts
//!
//! - **Fields**: Typed field names via the `Field` trait or [`field_enum!`]
//! - **Values**: Dynamic `FieldValue`s with loose truthiness and numeric coercion
//! - **Rules**: Pure per-field checks collected into a `RuleSet`
//! - **Engine**: `FormEngine` owning values and errors for one form
//!
//! # Example
//!
//! ```rust
//! use formstate::core::FieldValues;
//! use formstate::engine::{ChangeEvent, FormEngine};
//! use formstate::field_enum;
//! use formstate::validation::{numeric, required, RuleSet};
//!
//! field_enum! {
//!     pub enum Dish {
//!         Name => "nome",
//!         Price => "valor",
//!     }
//! }
//!
//! let mut form = FormEngine::new(
//!     FieldValues::new().with(Dish::Name, "").with(Dish::Price, 0),
//! );
//!
//! let rules = RuleSet::builder()
//!     .rule(Dish::Name, required("required"))
//!     .rule(Dish::Price, numeric("invalid"))
//!     .build()
//!     .unwrap();
//!
//! assert!(!form.validate(&rules));
//! assert_eq!(form.error(&Dish::Name), Some("required"));
//!
//! let mut on_name = form.change_handler(Dish::Name);
//! on_name.handle(ChangeEvent::input("Feijoada"));
//!
//! assert!(form.validate(&rules));
//! assert!(form.errors().is_empty());
//! ```

pub mod core;
pub mod engine;
pub mod host;
mod macros;
pub mod snapshot;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Field, FieldErrors, FieldValue, FieldValues, Rule};
pub use engine::{ChangeEvent, ChangeHandler, FormEngine, SharedForm};
pub use validation::{BuildError, RuleSet};
