//! Top-level error type for library consumers.

use thiserror::Error;

/// Errors surfaced through the [`Library`](crate::Library) facade.
#[derive(Debug, Error)]
pub enum OrlError {
    /// Registry configuration or lookup failure.
    #[error(transparent)]
    Registry(#[from] orl_registry::RegistryError),

    /// Pointer construction or resolution failure.
    #[error(transparent)]
    Pointer(#[from] orl_pointer::PointerError),
}

/// Convenience type alias for facade operations.
pub type OrlResult<T> = std::result::Result<T, OrlError>;
