//! The [`Library`] facade: a configured registry plus pointer construction.

use std::sync::Arc;

use orl_pointer::{DataPointer, FieldSpec};
use orl_registry::{AdapterRegistry, RegistryConfig};

use crate::error::OrlResult;

/// Main entry point for applications embedding ORL.
///
/// Owns one configured [`AdapterRegistry`] and injects it into every
/// pointer it creates. Multiple libraries with independent registries can
/// coexist in one process; the [`global`](orl_registry::global) module
/// covers the singleton case instead.
pub struct Library {
    registry: Arc<AdapterRegistry>,
}

impl Library {
    /// Build a library around a freshly configured registry.
    pub fn new(config: RegistryConfig) -> OrlResult<Self> {
        let registry = Arc::new(AdapterRegistry::new());
        registry.setup(config)?;
        Ok(Self { registry })
    }

    /// Wrap an existing, possibly shared, registry.
    pub fn with_registry(registry: Arc<AdapterRegistry>) -> Self {
        Self { registry }
    }

    /// Create a lazy pointer over `uri` with the declared field schema.
    /// No I/O happens until a field is accessed.
    pub fn pointer(
        &self,
        uri: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> OrlResult<Arc<DataPointer>> {
        Ok(DataPointer::create(self.registry.clone(), uri, fields)?)
    }

    /// The registry this library injects into its pointers.
    pub fn registry(&self) -> Arc<AdapterRegistry> {
        self.registry.clone()
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("registry", &self.registry)
            .finish()
    }
}
