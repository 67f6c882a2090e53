//! Process-wide registry singleton.
//!
//! The resolution core always takes an explicitly injected registry; this
//! module is the convenience wrapper for applications that want a single
//! shared instance configured at process start.

use std::sync::{Arc, LazyLock};

use crate::config::RegistryConfig;
use crate::error::RegistryResult;
use crate::registry::AdapterRegistry;

static GLOBAL: LazyLock<Arc<AdapterRegistry>> = LazyLock::new(|| Arc::new(AdapterRegistry::new()));

/// Handle to the process-wide registry instance.
pub fn global() -> Arc<AdapterRegistry> {
    GLOBAL.clone()
}

/// Configure the process-wide registry.
///
/// Fails if it is already configured; call [`reset`] first.
pub fn setup(config: RegistryConfig) -> RegistryResult<()> {
    GLOBAL.setup(config)
}

/// Clear the process-wide registry. Used for test isolation and shutdown.
pub fn reset() {
    GLOBAL.reset()
}
