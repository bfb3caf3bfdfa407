//! Record API capability consumed by form controllers.

use thiserror::Error;

/// Errors a record API can report
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server answered with status {code}")]
    Status { code: u16 },

    #[error("Response could not be decoded: {0}")]
    Decode(String),
}

/// HTTP-style client for fetching and submitting records.
///
/// Implementations are free to run on any executor; controllers only await
/// the returned futures.
#[allow(async_fn_in_trait)]
pub trait RecordApi {
    /// Fetch the record at `path`.
    async fn get(&self, path: &str) -> Result<serde_json::Value, ApiError>;

    /// Submit `body` to `path`, returning the server's answer.
    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError>;
}
