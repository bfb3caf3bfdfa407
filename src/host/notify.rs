//! Transient notifications raised by form controllers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

/// A message shown to the user for a limited time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, duration: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            duration,
            raised_at: Utc::now(),
        }
    }

    /// Whether the notification's display time has run out at `now` (pure).
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.raised_at)
            .to_std()
            .map(|shown| shown >= self.duration)
            .unwrap_or(false)
    }
}
