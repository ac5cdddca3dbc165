//! Provider kinds stored in the injector
//!
//! The injector does not hold arbitrary `Any` values: every provider is one
//! of the kinds listed in [`Provider`], and callers pull them back out as a
//! concrete type through [`Injectable`].

use lair_domain::repositories::DragonRepository;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A value registered in the injector under a name
#[derive(Clone)]
pub enum Provider {
    /// Dragon repository service
    DragonRepository(Arc<dyn DragonRepository>),
    /// Plain configuration value
    Value(Value),
}

impl Provider {
    /// Wrap a repository service
    pub fn repository(repository: Arc<dyn DragonRepository>) -> Self {
        Self::DragonRepository(repository)
    }

    /// Human-readable kind, used in mismatch errors
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DragonRepository(_) => DRAGON_REPOSITORY_KIND,
            Self::Value(value) => value_kind(value),
        }
    }

    /// Whether this provider counts as missing on lookup
    ///
    /// Values that are `null`, `false`, zero or the empty string are treated
    /// the same as an unregistered name.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::DragonRepository(_) => false,
            Self::Value(value) => falsy_value(value),
        }
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DragonRepository(repo) => f
                .debug_tuple("DragonRepository")
                .field(&repo.provider_name())
                .finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

impl From<Arc<dyn DragonRepository>> for Provider {
    fn from(repository: Arc<dyn DragonRepository>) -> Self {
        Self::DragonRepository(repository)
    }
}

impl From<Value> for Provider {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! value_provider_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Provider {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

value_provider_from!(bool, i32, i64, u32, u64, f64, String, &str);

const DRAGON_REPOSITORY_KIND: &str = "dragon repository";

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn falsy_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Types that can be pulled out of a [`Provider`]
pub trait Injectable: Sized {
    /// Kind name reported when the stored provider does not match
    const KIND: &'static str;

    /// Extract `Self` from the provider, or `None` on a kind mismatch
    fn from_provider(provider: &Provider) -> Option<Self>;
}

impl Injectable for Arc<dyn DragonRepository> {
    const KIND: &'static str = DRAGON_REPOSITORY_KIND;

    fn from_provider(provider: &Provider) -> Option<Self> {
        match provider {
            Provider::DragonRepository(repo) => Some(Arc::clone(repo)),
            Provider::Value(_) => None,
        }
    }
}

impl Injectable for Value {
    const KIND: &'static str = "value";

    fn from_provider(provider: &Provider) -> Option<Self> {
        match provider {
            Provider::Value(value) => Some(value.clone()),
            Provider::DragonRepository(_) => None,
        }
    }
}

impl Injectable for String {
    const KIND: &'static str = "string";

    fn from_provider(provider: &Provider) -> Option<Self> {
        match provider {
            Provider::Value(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }
}

impl Injectable for bool {
    const KIND: &'static str = "boolean";

    fn from_provider(provider: &Provider) -> Option<Self> {
        match provider {
            Provider::Value(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}

impl Injectable for i64 {
    const KIND: &'static str = "integer";

    fn from_provider(provider: &Provider) -> Option<Self> {
        match provider {
            Provider::Value(value) => value.as_i64(),
            Provider::DragonRepository(_) => None,
        }
    }
}

impl Injectable for u64 {
    const KIND: &'static str = "unsigned integer";

    fn from_provider(provider: &Provider) -> Option<Self> {
        match provider {
            Provider::Value(value) => value.as_u64(),
            Provider::DragonRepository(_) => None,
        }
    }
}

impl Injectable for f64 {
    const KIND: &'static str = "number";

    fn from_provider(provider: &Provider) -> Option<Self> {
        match provider {
            Provider::Value(value) => value.as_f64(),
            Provider::DragonRepository(_) => None,
        }
    }
}
