//! In-memory off-chain backend for tests and embedding.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use orl_types::{Payload, Uri};

use crate::error::{AdapterError, AdapterResult};
use crate::traits::OffChainAdapter;

/// In-memory, `HashMap`-based off-chain backend.
///
/// Records are keyed by the BLAKE3 hash of their JSON serialization, so
/// identical payloads share one key. A URI's rest (everything after `://`)
/// is the key; the schema token is ignored, which lets one instance back
/// several registered schemas at once.
pub struct InMemoryAdapter {
    records: RwLock<HashMap<String, Payload>>,
}

impl InMemoryAdapter {
    /// Create a new empty in-memory backend.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Store a payload and return its content key.
    pub fn put(&self, payload: Payload) -> AdapterResult<String> {
        let encoded = serde_json::to_vec(&payload)?;
        let key = blake3::hash(&encoded).to_hex().to_string();
        self.records
            .write()
            .expect("lock poisoned")
            .insert(key.clone(), payload);
        Ok(key)
    }

    /// Store a payload and return a full URI under the given schema token.
    pub fn put_as(&self, schema: &str, payload: Payload) -> AdapterResult<String> {
        let key = self.put(payload)?;
        Ok(format!("{schema}://{key}"))
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the backend holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OffChainAdapter for InMemoryAdapter {
    async fn download(&self, uri: &Uri) -> AdapterResult<Payload> {
        let records = self.records.read().expect("lock poisoned");
        records
            .get(uri.rest())
            .cloned()
            .ok_or_else(|| AdapterError::NotFound {
                uri: uri.as_str().to_string(),
            })
    }
}

impl std::fmt::Debug for InMemoryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAdapter")
            .field("record_count", &self.len())
            .finish()
    }
}
