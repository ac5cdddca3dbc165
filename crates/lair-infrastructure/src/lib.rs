//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the domain and UI layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Injector registry and bootstrap from configuration |
//! | [`config`] | TOML + environment configuration via figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers converting foreign errors |
//! | [`constants`] | Centralized configuration constants |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{Injector, Provider, build_injector};
pub use error_ext::ErrorContext;
