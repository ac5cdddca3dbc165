//! Dependency Injection
//!
//! A small name-based injector instead of a container framework:
//!
//! ```text
//! AppConfig ──► build_injector ──► Injector { "dragonRepository": Provider, .. }
//!                   │                         │
//!           linkme registry            inject::<T>(name)
//!        (DRAGON_REPOSITORIES)                │
//!                                       UI listeners
//! ```
//!
//! - [`injector`]: the registry itself (`init`, `add`, `inject`)
//! - [`provider`]: the closed set of provider kinds and typed extraction
//! - [`bootstrap`]: composition from configuration

pub mod bootstrap;
pub mod injector;
pub mod provider;

pub use bootstrap::{AvailableRepositories, build_injector, list_available_repositories};
pub use injector::Injector;
pub use provider::{Injectable, Provider};
