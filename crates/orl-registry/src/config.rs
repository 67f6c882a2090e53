//! Registry configuration: schema token to adapter factory bindings.

use std::collections::HashMap;
use std::sync::Arc;

use orl_adapter::OffChainAdapter;

/// Factory producing the backend adapter for one schema token.
///
/// Invoked at most once per token between `setup` and `reset`; the produced
/// instance is memoized by the registry.
pub type AdapterFactory = Box<dyn Fn() -> Arc<dyn OffChainAdapter> + Send + Sync>;

/// Builder collecting the bindings passed to
/// [`AdapterRegistry::setup`](crate::AdapterRegistry::setup).
#[derive(Default)]
pub struct RegistryConfig {
    pub(crate) adapters: HashMap<String, AdapterFactory>,
}

impl RegistryConfig {
    /// Start an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `schema` to a factory. A later binding for the same token wins.
    pub fn adapter<F>(mut self, schema: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn OffChainAdapter> + Send + Sync + 'static,
    {
        self.adapters.insert(schema.into(), Box::new(factory));
        self
    }

    /// Bind `schema` to an already-built shared adapter instance.
    pub fn instance(self, schema: impl Into<String>, adapter: Arc<dyn OffChainAdapter>) -> Self {
        self.adapter(schema, move || adapter.clone())
    }

    /// Number of bindings collected so far.
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Returns `true` if no bindings were collected.
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl std::fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut schemas: Vec<&str> = self.adapters.keys().map(String::as_str).collect();
        schemas.sort_unstable();
        f.debug_struct("RegistryConfig")
            .field("schemas", &schemas)
            .finish()
    }
}
