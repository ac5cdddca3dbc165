//! Injector Bootstrap
//!
//! Composition root: turns an [`AppConfig`] into a populated [`Injector`].
//!
//! ```text
//! AppConfig.repository ──► resolve_dragon_repository ──► init({"dragonRepository": repo})
//! AppConfig.injector.values ─────────────────────────► add({name: value, ..})
//! ```

use super::injector::Injector;
use super::provider::Provider;
use crate::config::AppConfig;
use lair_domain::constants::DRAGON_REPOSITORY;
use lair_domain::error::{Error, Result};
use lair_domain::ports::{list_dragon_repositories, resolve_dragon_repository};
use std::fmt;
use tracing::info;

/// Build an injector from configuration
///
/// The configured repository backend is registered under
/// [`DRAGON_REPOSITORY`], then every configured plain value is merged in.
/// A configured value with the same name replaces the repository.
pub fn build_injector(config: &AppConfig) -> Result<Injector> {
    let repository = resolve_dragon_repository(&config.repository.to_registry())
        .map_err(|e| Error::configuration(format!("Failed to resolve dragon repository: {e}")))?;

    info!(
        provider = repository.provider_name(),
        "Resolved dragon repository"
    );

    let mut injector = Injector::new();
    injector.init([(DRAGON_REPOSITORY, Provider::repository(repository))]);
    injector.add(
        config
            .injector
            .values
            .iter()
            .map(|(name, value)| (name.clone(), Provider::Value(value.clone()))),
    );

    info!(providers = ?injector.names(), "Injector ready");
    Ok(injector)
}

/// List registered repository backends
pub fn list_available_repositories() -> AvailableRepositories {
    AvailableRepositories {
        repositories: list_dragon_repositories(),
    }
}

/// Available repository backends
#[derive(Debug, Clone)]
pub struct AvailableRepositories {
    /// Registered backends (name, description)
    pub repositories: Vec<(&'static str, &'static str)>,
}

impl fmt::Display for AvailableRepositories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dragon Repositories:")?;
        for (name, desc) in &self.repositories {
            writeln!(f, "  - {name}: {desc}")?;
        }
        Ok(())
    }
}
