//! Adapter registry for the Off-chain Record Layer.
//!
//! Maps a URI schema token (the prefix before `://`) to a live backend
//! adapter. Factories are registered once via [`AdapterRegistry::setup`];
//! the adapter instance for a token is created on first use and reused for
//! every subsequent call — adapters are never re-created per lookup.
//!
//! The pointer core always takes an explicitly injected
//! `Arc<AdapterRegistry>`. For applications that want one shared instance,
//! the [`global`] module wraps a process-wide registry.

pub mod config;
pub mod error;
pub mod global;
pub mod registry;

pub use config::{AdapterFactory, RegistryConfig};
pub use error::{RegistryError, RegistryResult};
pub use registry::AdapterRegistry;
