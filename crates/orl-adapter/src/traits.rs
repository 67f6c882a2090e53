//! The [`OffChainAdapter`] trait defining the backend capability.

use async_trait::async_trait;
use orl_types::{Payload, Uri};

use crate::error::AdapterResult;

/// Backend client for one URI schema.
///
/// Implementations must be shareable (`Send + Sync`): the registry keeps a
/// single instance per schema token, and every pointer using that token
/// calls it, possibly concurrently. `download` must therefore tolerate
/// repeated and overlapping invocations.
///
/// Write operations (upload, removal) are deliberately not part of this
/// trait — they sit outside the resolution path. Backends that support
/// them expose inherent methods instead.
#[async_trait]
pub trait OffChainAdapter: Send + Sync + std::fmt::Debug {
    /// Fetch the flat record addressed by `uri`.
    ///
    /// Returns `Err` on any backend failure; a missing record is
    /// [`AdapterError::NotFound`](crate::AdapterError::NotFound), not an
    /// empty payload.
    async fn download(&self, uri: &Uri) -> AdapterResult<Payload>;
}
