//! Error types for off-chain backend adapters.

use thiserror::Error;

/// Errors from off-chain backend operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// No record exists at the given URI.
    #[error("no record at {uri}")]
    NotFound { uri: String },

    /// The backend returned data that is not a flat JSON object.
    #[error("malformed record at {uri}: {reason}")]
    Malformed { uri: String, reason: String },

    /// HTTP transport failure.
    #[error("http: {0}")]
    Http(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error from the underlying backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other backend-specific failure.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for adapter operations.
pub type AdapterResult<T> = std::result::Result<T, AdapterError>;
