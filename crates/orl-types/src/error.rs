//! Error types for foundation type parsing and validation.

use thiserror::Error;

/// Errors from parsing and validating foundation types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// The URI string is empty.
    #[error("uri is empty")]
    Empty,

    /// The URI carries no `://` separator.
    #[error("uri has no schema separator: {uri}")]
    MissingSeparator { uri: String },

    /// The schema token is empty or contains characters outside the
    /// ASCII alphanumeric-plus-hyphen set.
    #[error("invalid schema token: {token:?}")]
    InvalidSchema { token: String },

    /// Nothing follows the `://` separator.
    #[error("uri has an empty target: {uri}")]
    EmptyTarget { uri: String },

    /// A payload was built from JSON that is not an object.
    #[error("payload is not a JSON object")]
    PayloadNotObject,
}

/// Convenience type alias for foundation type operations.
pub type TypeResult<T> = std::result::Result<T, TypeError>;
