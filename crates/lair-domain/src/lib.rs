//! # Domain Layer
//!
//! Core types for Lair: the dragon entity, the repository port that stores
//! it, the registry of repository backends and the shared error type.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | `Dragon`, `DragonType`, `NewDragon` |
//! | [`repositories`] | `DragonRepository` port |
//! | [`ports`] | Repository backend registry (linkme) |
//! | [`error`] | Domain error and `Result` alias |
//! | [`constants`] | Injector keys and defaults |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;

// Re-export commonly used types
pub use entities::{Dragon, DragonType, NewDragon};
pub use error::{Error, Result};
pub use repositories::DragonRepository;
