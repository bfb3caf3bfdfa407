//! The imperative shell around the engine.
//!
//! Forms that edit remote records all follow the same flow: fetch the
//! record when editing, validate on submit, post the values, reset on
//! success, and tell the user what happened. [`FormController`] implements
//! that flow once, against two capabilities supplied by the host:
//!
//! - **[`RecordApi`]**: async, fallible `get` and `post`
//! - **[`Notification`]**: read back by whatever displays the banner
//!
//! The engine itself stays free of I/O; every network step lives here.

mod api;
mod config;
mod controller;
mod notify;

pub use api::{ApiError, RecordApi};
pub use config::FormConfig;
pub use controller::{FormController, SubmitOutcome};
pub use notify::{Notification, Severity};
