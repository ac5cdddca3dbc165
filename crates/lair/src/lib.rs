//! # Lair
//!
//! A dragon registry built around a small name-based injector.
//!
//! This crate is the public facade: it re-exports the layers and hosts the
//! command line front end used by the `lair` binary.
//!
//! ## Example
//!
//! ```ignore
//! use lair::infrastructure::{AppConfig, build_injector};
//! use lair::ui::{DragonComponent, DragonFormData};
//!
//! let injector = build_injector(&AppConfig::default())?;
//! let component = DragonComponent::new()?;
//! let dragon = component
//!     .create_listeners(&injector)
//!     .on_submit(&DragonFormData::new("Smaug", "fire", "120"))
//!     .await?;
//! assert_eq!(dragon.id, "1");
//! ```

// Force linkme registration of the repository backends
extern crate lair_providers;

pub mod cli;

/// Domain layer - entities, ports and errors
pub mod domain {
    pub use lair_domain::*;
}

/// Infrastructure layer - injector, configuration and logging
pub mod infrastructure {
    pub use lair_infrastructure::*;
}

/// Provider implementations
pub mod providers {
    pub use lair_providers::*;
}

/// Presentation layer - dragon component
pub mod ui {
    pub use lair_ui::*;
}

pub use cli::{Cli, Command, execute, load_config};
pub use domain::{Dragon, DragonType, Error, NewDragon, Result};
