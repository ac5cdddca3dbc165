//! Dragon entity
//!
//! A dragon is identified by a repository-assigned `id` and carries a name,
//! a categorical [`DragonType`] and an age in years.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categorical dragon type
///
/// The string form is the lowercase variant name, which is also what the
/// creation form submits.
///
/// # Example
///
/// ```
/// use lair_domain::DragonType;
///
/// let kind: DragonType = "Fire".parse().unwrap();
/// assert_eq!(kind, DragonType::Fire);
/// assert_eq!(kind.to_string(), "fire");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragonType {
    /// Fire-breathing dragon
    Fire,
    /// Water dragon
    Water,
    /// Earth dragon
    Earth,
    /// Air dragon
    Air,
}

impl DragonType {
    /// Every dragon type, in display order
    pub const ALL: [DragonType; 4] = [
        DragonType::Fire,
        DragonType::Water,
        DragonType::Earth,
        DragonType::Air,
    ];

    /// Lowercase string form
    pub fn as_str(self) -> &'static str {
        match self {
            DragonType::Fire => "fire",
            DragonType::Water => "water",
            DragonType::Earth => "earth",
            DragonType::Air => "air",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            DragonType::Fire => "Fire",
            DragonType::Water => "Water",
            DragonType::Earth => "Earth",
            DragonType::Air => "Air",
        }
    }
}

impl fmt::Display for DragonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DragonType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        DragonType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown dragon type: {s}")))
    }
}

/// A stored dragon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dragon {
    /// Repository-assigned identifier
    pub id: String,
    /// Dragon name
    pub name: String,
    /// Dragon type
    #[serde(rename = "type")]
    pub dragon_type: DragonType,
    /// Age in years
    pub age: u32,
}

impl Dragon {
    /// Attach an id to a new dragon
    pub fn from_new(id: impl Into<String>, dragon: NewDragon) -> Self {
        Self {
            id: id.into(),
            name: dragon.name,
            dragon_type: dragon.dragon_type,
            age: dragon.age,
        }
    }
}

/// A dragon that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDragon {
    /// Dragon name
    pub name: String,
    /// Dragon type
    #[serde(rename = "type")]
    pub dragon_type: DragonType,
    /// Age in years
    pub age: u32,
}

impl NewDragon {
    /// Create a new unsaved dragon
    pub fn new(name: impl Into<String>, dragon_type: DragonType, age: u32) -> Self {
        Self {
            name: name.into(),
            dragon_type,
            age,
        }
    }
}
