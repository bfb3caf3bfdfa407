//! Per-form controller configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where a form's records live and what it tells the user.
///
/// Missing keys fall back to [`FormConfig::default`] when deserialized.
///
/// ```rust
/// use formstate::host::FormConfig;
///
/// let config: FormConfig = serde_json::from_str(r#"{ "resource": "/pratos" }"#).unwrap();
///
/// assert_eq!(config.resource, "/pratos");
/// assert_eq!(config.notification_ms, 10_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Collection path; records are fetched from `{resource}/{id}`.
    pub resource: String,
    pub notification_ms: u64,
    pub load_failed: String,
    pub submit_succeeded: String,
    pub submit_failed: String,
}

impl FormConfig {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            ..Self::default()
        }
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub(crate) fn record_path(&self, id: &str) -> String {
        format!("{}/{}", self.resource.trim_end_matches('/'), id)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            resource: "/".to_string(),
            notification_ms: 10_000,
            load_failed: "Could not load the record.".to_string(),
            submit_succeeded: "Record saved.".to_string(),
            submit_failed: "Could not save the record. Try again.".to_string(),
        }
    }
}
