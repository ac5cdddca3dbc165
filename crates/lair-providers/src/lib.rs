//! # Lair - Provider Implementations
//!
//! User-selectable backend implementations. Each backend implements a port
//! defined in `lair-domain` and registers itself in the domain registry, so
//! configuration can pick it by name.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Repository | `DragonRepository` | Memory |
//!
//! This crate must be linked into the final binary (not only as a
//! dev-dependency) for its registry entries to be visible.

// Re-export lair-domain types commonly used with providers
pub use lair_domain::error::{Error, Result};
pub use lair_domain::repositories::DragonRepository;

/// Dragon repository backends
pub mod repository;

#[cfg(feature = "repository-memory")]
pub use repository::MemoryDragonRepository;
