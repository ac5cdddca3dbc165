//! Injector - name-based provider registry
//!
//! Maps provider names to [`Provider`]s. The injector is an ordinary value
//! owned by whoever composes the application and handed out by reference;
//! configuration goes through `&mut self` (`init`, `add`) and lookups through
//! `&self` (`inject`).
//!
//! ```
//! use lair_infrastructure::di::{Injector, Provider};
//!
//! let mut injector = Injector::new();
//! injector.init([("a", Provider::from(1))]);
//! injector.add([("b", Provider::from(2))]);
//!
//! assert_eq!(injector.inject::<i64>("a").unwrap(), 1);
//! assert_eq!(injector.inject::<i64>("b").unwrap(), 2);
//! assert!(injector.inject::<i64>("c").is_err());
//! ```

use super::provider::{Injectable, Provider};
use lair_domain::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

/// Name-to-provider registry
#[derive(Clone, Default)]
pub struct Injector {
    providers: HashMap<String, Provider>,
}

impl Injector {
    /// Create an empty injector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an injector holding exactly `providers`
    pub fn with_providers<I, K>(providers: I) -> Self
    where
        I: IntoIterator<Item = (K, Provider)>,
        K: Into<String>,
    {
        let mut injector = Self::new();
        injector.init(providers);
        injector
    }

    /// Replace every registered provider with `providers`
    pub fn init<I, K>(&mut self, providers: I)
    where
        I: IntoIterator<Item = (K, Provider)>,
        K: Into<String>,
    {
        self.providers = providers
            .into_iter()
            .map(|(name, provider)| (name.into(), provider))
            .collect();
        info!(count = self.providers.len(), "Injector providers initialized");
    }

    /// Drop every registered provider
    pub fn reset(&mut self) {
        self.init(std::iter::empty::<(String, Provider)>());
    }

    /// Merge `providers` into the registry; incoming names win
    pub fn add<I, K>(&mut self, providers: I)
    where
        I: IntoIterator<Item = (K, Provider)>,
        K: Into<String>,
    {
        for (name, provider) in providers {
            let name = name.into();
            debug!(provider = %name, kind = provider.kind(), "Registering provider");
            self.providers.insert(name, provider);
        }
    }

    /// Look up the provider registered under `name` as a `T`
    ///
    /// # Errors
    /// * [`Error::ProviderNotFound`] - nothing registered under `name`, or the
    ///   stored value is falsy (see [`Provider::is_falsy`])
    /// * [`Error::ProviderKindMismatch`] - the stored provider is not a `T`
    pub fn inject<T: Injectable>(&self, name: &str) -> Result<T> {
        let provider = match self.providers.get(name) {
            Some(provider) if !provider.is_falsy() => provider,
            _ => {
                warn!(provider = name, "No provider registered");
                return Err(Error::provider_not_found(name));
            }
        };

        T::from_provider(provider)
            .ok_or_else(|| Error::provider_kind_mismatch(name, T::KIND, provider.kind()))
    }

    /// Raw access to a registered provider
    pub fn get(&self, name: &str) -> Option<&Provider> {
        self.providers.get(name)
    }

    /// Whether a provider is registered under `name`
    ///
    /// Falsy values count as registered here even though [`Injector::inject`]
    /// reports them as not found.
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered provider names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no providers are registered
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for Injector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for name in self.names() {
            map.entry(&name, &self.providers[name]);
        }
        map.finish()
    }
}
