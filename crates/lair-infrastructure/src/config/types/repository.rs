//! Repository backend configuration

use lair_domain::constants::DEFAULT_DRAGON_REPOSITORY_PROVIDER;
use lair_domain::ports::DragonRepositoryConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which dragon repository backend to build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Registered backend name (e.g., "memory")
    pub provider: String,
    /// Backend-specific settings
    pub extra: HashMap<String, String>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_DRAGON_REPOSITORY_PROVIDER.to_string(),
            extra: HashMap::new(),
        }
    }
}

impl RepositoryConfig {
    /// Convert to the registry's backend config
    pub fn to_registry(&self) -> DragonRepositoryConfig {
        DragonRepositoryConfig {
            provider: self.provider.clone(),
            extra: self.extra.clone(),
        }
    }
}
