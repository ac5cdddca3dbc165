//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `lair_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "lair.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "lair";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "LAIR";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Environment key (after the prefix) holding case-preserved injector values
pub const INJECTOR_VALUES_ENV_KEY: &str = "INJECTOR__VALUES";

/// Configuration path of the injector values table
pub const INJECTOR_VALUES_KEY: &str = "injector.values";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "LAIR_LOG";

/// Log file name stem used when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "lair";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;
