//! Dragon Repository Registry
//!
//! Auto-registration system for repository backends. Backends register
//! themselves into [`DRAGON_REPOSITORIES`] with `linkme` and are looked up by
//! name at runtime.
//!
//! ```text
//! Backend defines:   #[linkme::distributed_slice(DRAGON_REPOSITORIES)]
//!                    static ENTRY: DragonRepositoryEntry = ...
//!                          ↓
//! Resolver queries:  DRAGON_REPOSITORIES.iter()
//!                          ↓
//! Config selects:    "repository.provider = memory" → MemoryDragonRepository
//! ```
//!
//! ### Registering a backend (in lair-providers)
//!
//! ```ignore
//! use lair_domain::ports::{DragonRepositoryEntry, DRAGON_REPOSITORIES};
//!
//! #[linkme::distributed_slice(DRAGON_REPOSITORIES)]
//! static MEMORY: DragonRepositoryEntry = DragonRepositoryEntry {
//!     name: "memory",
//!     description: "In-memory dragon repository",
//!     factory: |_config| Ok(Arc::new(MemoryDragonRepository::new())),
//! };
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::DEFAULT_DRAGON_REPOSITORY_PROVIDER;
use crate::repositories::DragonRepository;

/// Configuration for repository backend creation
///
/// Backends use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct DragonRepositoryConfig {
    /// Backend name (e.g., "memory")
    pub provider: String,
    /// Additional backend-specific configuration
    pub extra: HashMap<String, String>,
}

impl DragonRepositoryConfig {
    /// Create a new config with the given backend name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Config naming the default backend
    pub fn default_backend() -> Self {
        Self::new(DEFAULT_DRAGON_REPOSITORY_PROVIDER)
    }
}

impl From<&str> for DragonRepositoryConfig {
    fn from(provider: &str) -> Self {
        Self::new(provider)
    }
}

/// Registry entry for repository backends
pub struct DragonRepositoryEntry {
    /// Unique backend name (e.g., "memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a backend instance
    pub factory: fn(&DragonRepositoryConfig) -> Result<Arc<dyn DragonRepository>, String>,
}

#[linkme::distributed_slice]
pub static DRAGON_REPOSITORIES: [DragonRepositoryEntry] = [..];

/// Resolve a repository backend by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn DragonRepository>)` - Created backend instance
/// * `Err(String)` - Backend not found or creation failed
pub fn resolve_dragon_repository(
    config: &DragonRepositoryConfig,
) -> Result<Arc<dyn DragonRepository>, String> {
    let provider_name = &config.provider;

    for entry in DRAGON_REPOSITORIES {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = DRAGON_REPOSITORIES.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown dragon repository '{provider_name}'. Available: {available:?}"
    ))
}

/// List all registered repository backends as `(name, description)`
pub fn list_dragon_repositories() -> Vec<(&'static str, &'static str)> {
    DRAGON_REPOSITORIES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
