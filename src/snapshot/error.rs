//! Snapshot error types.

use thiserror::Error;

/// Why a snapshot could not be written or read back.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The JSON draft could not be encoded or is malformed.
    #[error("snapshot JSON codec failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The binary draft could not be encoded or is truncated or corrupt.
    #[error("snapshot binary codec failed: {0}")]
    Binary(#[from] bincode::Error),

    /// The draft was written by another snapshot format.
    #[error("snapshot format {found} cannot be restored, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
