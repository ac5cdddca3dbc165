//! Main application configuration

use super::{InjectorConfig, LoggingConfig, RepositoryConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [repository]
/// provider = "memory"
///
/// [injector.values]
/// lairName = "Erebor"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Repository backend selection
    #[serde(default)]
    pub repository: RepositoryConfig,
    /// Extra providers registered into the injector
    #[serde(default)]
    pub injector: InjectorConfig,
}
