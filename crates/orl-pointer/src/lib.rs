//! The lazy, cacheable data pointer core of the Off-chain Record Layer.
//!
//! A [`DataPointer`] represents one off-chain record: a URI plus a declared
//! set of named fields, some of which are themselves nested pointers. The
//! record payload is fetched at most once per pointer (until
//! [`reset`](DataPointer::reset)), each declared field resolves as an
//! independently awaitable value, and an arbitrarily deep subtree can be
//! materialized into a plain [`Snapshot`] bounded by dotted field paths.
//!
//! # Resolution flow
//!
//! On first field access the pointer asks its injected
//! [`AdapterRegistry`](orl_registry::AdapterRegistry) for the adapter
//! matching the URI's schema token, downloads the flat payload exactly
//! once, and serves every declared field from it — constructing child
//! pointers on the fly for fields flagged as recursive.

pub mod error;
pub mod field;
pub mod pointer;
pub mod snapshot;

pub use error::{PointerError, PointerResult};
pub use field::{FieldDescriptor, FieldSpec};
pub use pointer::{DataPointer, FieldValue};
pub use snapshot::{Snapshot, SnapshotValue};
