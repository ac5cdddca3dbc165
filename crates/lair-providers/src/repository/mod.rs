//! Dragon repository backends

#[cfg(feature = "repository-memory")]
pub mod memory;

#[cfg(feature = "repository-memory")]
pub use memory::MemoryDragonRepository;
