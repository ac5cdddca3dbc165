//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the contextual variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Lair
#[derive(Error, Debug)]
pub enum Error {
    /// No provider registered under the requested name, or the stored
    /// value is falsy
    #[error("Injector Error: no provider found for {name}")]
    ProviderNotFound {
        /// The provider name that was requested
        name: String,
    },

    /// A provider exists under the name but holds a different kind
    #[error("Injector Error: provider {name} is a {found}, expected {expected}")]
    ProviderKindMismatch {
        /// The provider name that was requested
        name: String,
        /// Kind the caller asked for
        expected: &'static str,
        /// Kind actually stored
        found: &'static str,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Invalid or unloadable configuration
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// File or stream I/O failed
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A supporting library (templates, logging, serialization) failed
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxedSource>,
    },
}

impl Error {
    /// Create a provider-not-found error
    pub fn provider_not_found<S: Into<String>>(name: S) -> Self {
        Self::ProviderNotFound { name: name.into() }
    }

    /// Create a provider kind mismatch error
    pub fn provider_kind_mismatch<S: Into<String>>(
        name: S,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::ProviderKindMismatch {
            name: name.into(),
            expected,
            found,
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error without a source
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}
