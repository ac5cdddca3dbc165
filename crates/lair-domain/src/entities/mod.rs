//! Domain entities

/// Dragon entity and its categorical type
pub mod dragon;

pub use dragon::{Dragon, DragonType, NewDragon};
