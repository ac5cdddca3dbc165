//! Repository Interfaces
//!
//! Repositories abstract the storage and retrieval of domain entities,
//! providing a consistent interface regardless of the underlying storage.
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`DragonRepository`] | CRUD operations for dragons |

/// Dragon repository interface
pub mod dragon_repository;

pub use dragon_repository::DragonRepository;
