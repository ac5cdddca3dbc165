//! Domain Port Interfaces
//!
//! Registration points for pluggable backends. Backends live in
//! `lair-providers` and are discovered at runtime through [`registry`].

pub mod registry;

pub use registry::{
    DRAGON_REPOSITORIES, DragonRepositoryConfig, DragonRepositoryEntry, list_dragon_repositories,
    resolve_dragon_repository,
};
