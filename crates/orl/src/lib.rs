//! Off-chain Record Layer (ORL).
//!
//! A record that lives off a primary ledger is represented on-chain only as
//! an opaque URI; the actual payload must be fetched from one of several
//! pluggable backends and reassembled into a tree. ORL is that resolution
//! engine: a lazy, schema-dispatched, cacheable pointer abstraction plus
//! the adapter registry it depends on.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use orl::{FieldSpec, InMemoryAdapter, Library, RegistryConfig};
//!
//! # async fn run() -> Result<(), orl::OrlError> {
//! let library = Library::new(
//!     RegistryConfig::new().adapter("in-memory", || Arc::new(InMemoryAdapter::new())),
//! )?;
//!
//! let record = library.pointer(
//!     "in-memory://some-key",
//!     vec![
//!         "name".into(),
//!         FieldSpec::pointer("description", vec!["address".into()]),
//!     ],
//! )?;
//!
//! // Nothing has been downloaded yet; this first access fetches once.
//! let name = record.field("name").await?;
//! let snapshot = record.to_plain_object(Some(&["description"])).await?;
//! # let _ = (name, snapshot);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod library;

pub use error::{OrlError, OrlResult};
pub use library::Library;

// Re-export the core surface for single-crate consumers.
pub use orl_adapter::{AdapterError, InMemoryAdapter, OffChainAdapter};
pub use orl_pointer::{
    DataPointer, FieldDescriptor, FieldSpec, FieldValue, PointerError, Snapshot, SnapshotValue,
};
pub use orl_registry::{global, AdapterRegistry, RegistryConfig, RegistryError};
pub use orl_types::{payload_from_json, Payload, Uri};

#[cfg(feature = "http")]
pub use orl_adapter::HttpAdapter;
