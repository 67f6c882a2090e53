//! Off-chain backend adapters for the Off-chain Record Layer.
//!
//! An adapter is a backend-specific client able to resolve a URI into a
//! flat key/value [`Payload`](orl_types::Payload). The resolution core only
//! ever consumes this capability; it never implements a backend itself.
//!
//! # Backends
//!
//! All backends implement the [`OffChainAdapter`] trait:
//!
//! - [`InMemoryAdapter`] — `HashMap`-based backend for tests and embedding,
//!   keyed by content hash
//! - `HttpAdapter` — JSON-over-HTTP backend (behind the `http` feature)
//!
//! # Design Rules
//!
//! 1. `download` must be safe to call repeatedly and from overlapping
//!    tasks: the registry memoizes one instance per schema token and every
//!    pointer using that token shares it.
//! 2. Adapters return the record verbatim; interpretation of values is the
//!    pointer core's job.
//! 3. All backend failures are propagated, never silently swallowed.

pub mod error;
pub mod memory;
pub mod traits;

#[cfg(feature = "http")]
pub mod http;

pub use error::{AdapterError, AdapterResult};
pub use memory::InMemoryAdapter;
pub use traits::OffChainAdapter;

#[cfg(feature = "http")]
pub use http::HttpAdapter;
