//! Error types for registry operations.

use thiserror::Error;

/// Errors from adapter registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No adapter factory is registered for the schema token.
    #[error("unsupported data schema: {schema}")]
    UnsupportedSchema { schema: String },

    /// The URI does not carry a parseable schema token.
    #[error("malformed off-chain uri: {0}")]
    MalformedUri(#[from] orl_types::TypeError),

    /// A schema token passed to `setup` is not valid.
    #[error("invalid schema token: {token:?}")]
    InvalidSchemaToken { token: String },

    /// `setup` was called twice without an intervening `reset`.
    #[error("registry is already configured; call reset() first")]
    AlreadyConfigured,
}

/// Convenience type alias for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
