//! The core registry structure mapping schema tokens to live adapters.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use orl_adapter::OffChainAdapter;
use orl_types::{uri::is_valid_schema_token, Uri};
use tracing::debug;

use crate::config::{AdapterFactory, RegistryConfig};
use crate::error::{RegistryError, RegistryResult};

struct RegistryEntry {
    factory: AdapterFactory,
    instance: Option<Arc<dyn OffChainAdapter>>,
}

/// Maps URI schema tokens to memoized backend adapter instances.
///
/// Configured once via [`setup`](Self::setup), torn down via
/// [`reset`](Self::reset). Tokens are matched case-sensitively. The adapter
/// for a token is created on first lookup and shared by every caller
/// afterwards, so `download` implementations must tolerate concurrent use.
/// `setup` and `reset` follow a single-writer-at-a-time discipline (process
/// start and teardown); they are not meant to race live lookups.
pub struct AdapterRegistry {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    configured: bool,
    entries: HashMap<String, RegistryEntry>,
}

impl AdapterRegistry {
    /// Create an empty, unconfigured registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Register all bindings from `config`.
    ///
    /// Fails with [`RegistryError::AlreadyConfigured`] if called twice
    /// without an intervening [`reset`](Self::reset) — guards against
    /// accidental re-registration mid-run. Every schema token is validated
    /// before any binding is stored.
    pub fn setup(&self, config: RegistryConfig) -> RegistryResult<()> {
        let mut inner = self.inner.write().expect("lock poisoned");
        if inner.configured {
            return Err(RegistryError::AlreadyConfigured);
        }
        if let Some(token) = config
            .adapters
            .keys()
            .find(|token| !is_valid_schema_token(token))
        {
            return Err(RegistryError::InvalidSchemaToken {
                token: token.clone(),
            });
        }
        for (token, factory) in config.adapters {
            inner.entries.insert(
                token,
                RegistryEntry {
                    factory,
                    instance: None,
                },
            );
        }
        inner.configured = true;
        debug!(schemas = inner.entries.len(), "adapter registry configured");
        Ok(())
    }

    /// Return the memoized adapter for the schema token of `uri`.
    ///
    /// The token is the substring before `://`; a URI without the separator
    /// or with a bad token fails with [`RegistryError::MalformedUri`], an
    /// unregistered token with [`RegistryError::UnsupportedSchema`].
    pub fn adapter_for(&self, uri: &str) -> RegistryResult<Arc<dyn OffChainAdapter>> {
        let parsed = Uri::parse(uri)?;
        self.adapter_for_schema(parsed.schema())
    }

    /// Return the memoized adapter for a bare schema token.
    pub fn adapter_for_schema(&self, schema: &str) -> RegistryResult<Arc<dyn OffChainAdapter>> {
        // Fast path under the read lock: instance already memoized.
        {
            let inner = self.inner.read().expect("lock poisoned");
            match inner.entries.get(schema) {
                Some(RegistryEntry {
                    instance: Some(adapter),
                    ..
                }) => return Ok(adapter.clone()),
                Some(_) => {}
                None => {
                    return Err(RegistryError::UnsupportedSchema {
                        schema: schema.to_string(),
                    })
                }
            }
        }

        let mut inner = self.inner.write().expect("lock poisoned");
        let entry =
            inner
                .entries
                .get_mut(schema)
                .ok_or_else(|| RegistryError::UnsupportedSchema {
                    schema: schema.to_string(),
                })?;
        // Re-check under the write lock; another caller may have won.
        let adapter = match &entry.instance {
            Some(adapter) => adapter.clone(),
            None => {
                debug!(schema, "instantiating off-chain adapter");
                let adapter = (entry.factory)();
                entry.instance = Some(adapter.clone());
                adapter
            }
        };
        Ok(adapter)
    }

    /// Clear all registrations and memoized instances.
    ///
    /// Used for test isolation and process shutdown; afterwards `setup`
    /// may be called again.
    pub fn reset(&self) {
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.entries.clear();
        inner.configured = false;
        debug!("adapter registry reset");
    }

    /// Whether `setup` has run since construction or the last `reset`.
    pub fn is_configured(&self) -> bool {
        self.inner.read().expect("lock poisoned").configured
    }

    /// Sorted list of all registered schema tokens.
    pub fn schemas(&self) -> Vec<String> {
        let inner = self.inner.read().expect("lock poisoned");
        let mut schemas: Vec<String> = inner.entries.keys().cloned().collect();
        schemas.sort();
        schemas
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().expect("lock poisoned");
        f.debug_struct("AdapterRegistry")
            .field("configured", &inner.configured)
            .field("schema_count", &inner.entries.len())
            .finish()
    }
}
