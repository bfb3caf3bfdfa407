//! The form state engine.
//!
//! A [`FormEngine`] owns one form's values and errors and mediates between
//! raw input events and that state:
//!
//! - **Change handlers** write one field from an input event
//! - **Bulk updates** replace all values, e.g. with a fetched record
//! - **Validation** recomputes all errors from a rule set
//!
//! [`SharedForm`] wraps an engine for hosts whose callbacks need owned
//! handles.

mod error;
mod event;
mod form;
mod handler;
mod shared;

pub use error::FormError;
pub use event::ChangeEvent;
pub use form::{EngineState, FormEngine};
pub use handler::ChangeHandler;
pub use shared::SharedForm;
