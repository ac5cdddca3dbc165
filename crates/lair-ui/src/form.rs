//! Dragon creation form data
//!
//! Holds raw field values as submitted and turns them into a [`NewDragon`].

use lair_domain::entities::{DragonType, NewDragon};
use lair_domain::error::{Error, Result};

/// Form field carrying the dragon name
pub const FIELD_NAME: &str = "name";
/// Form field carrying the dragon type
pub const FIELD_TYPE: &str = "type";
/// Form field carrying the dragon age
pub const FIELD_AGE: &str = "age";

/// Raw values of the creation form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragonFormData {
    /// Value of the `name` input
    pub name: String,
    /// Value of the `type` select
    pub dragon_type: String,
    /// Value of the `age` input
    pub age: String,
}

impl DragonFormData {
    /// Form with the given field values
    pub fn new(
        name: impl Into<String>,
        dragon_type: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dragon_type: dragon_type.into(),
            age: age.into(),
        }
    }

    /// Collect form data from `(field, value)` pairs
    ///
    /// Unknown fields are ignored; a repeated field keeps its last value.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (field, value) in fields {
            match field.as_ref() {
                FIELD_NAME => form.name = value.into(),
                FIELD_TYPE => form.dragon_type = value.into(),
                FIELD_AGE => form.age = value.into(),
                _ => {}
            }
        }
        form
    }

    /// Parse the raw values into an unsaved dragon
    pub fn parse(&self) -> Result<NewDragon> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::invalid_argument("Dragon name is required"));
        }

        let dragon_type: DragonType = self.dragon_type.parse()?;

        let age = self.age.trim().parse::<u32>().map_err(|_| {
            Error::invalid_argument(format!("Dragon age must be a whole number: {}", self.age))
        })?;

        Ok(NewDragon::new(name, dragon_type, age))
    }
}
