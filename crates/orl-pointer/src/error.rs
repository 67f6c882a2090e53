//! Error types for pointer construction and resolution.

use orl_adapter::AdapterError;
use orl_registry::RegistryError;
use thiserror::Error;

/// Errors from data pointer construction and resolution.
#[derive(Debug, Error)]
pub enum PointerError {
    /// A pointer cannot be created without a URI.
    #[error("cannot create a data pointer without uri")]
    MissingReference,

    /// Two declared field names collide under case-insensitive comparison.
    #[error("conflict in field names: {name}")]
    FieldNameConflict { name: String },

    /// The accessed field is not declared on this pointer.
    #[error("undeclared field: {name}")]
    UnknownField { name: String },

    /// A recursive field's raw value is not a syntactically valid URI.
    /// Fatal for that field only; sibling fields still resolve.
    #[error("field {field:?} value {value} does not appear to be a valid reference")]
    InvalidReference { field: String, value: String },

    /// The backend adapter failed during fetch. The payload cache is left
    /// unset, so a later access retries the download.
    #[error("cannot download data from {uri}: {source}")]
    Download {
        uri: String,
        #[source]
        source: AdapterError,
    },

    /// Registry-level failure (unsupported schema, malformed URI), surfaced
    /// to the caller unchanged.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A selection entry is not a valid dotted path.
    #[error("invalid selection path: {path:?}")]
    InvalidPath { path: String },
}

/// Convenience type alias for pointer operations.
pub type PointerResult<T> = std::result::Result<T, PointerError>;
