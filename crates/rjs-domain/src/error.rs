//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for RequireJS configuration assembly
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Locale provider failure
    #[error("Locale provider error: {message}")]
    Locale {
        /// Description of the locale error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Asset URL resolver failure
    #[error("Asset URL error: {message}")]
    AssetUrl {
        /// Description of the asset URL error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Namespace mapping failure
    #[error("Namespace mapping error: {message}")]
    NamespaceMapping {
        /// Description of the mapping error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Service error creation methods
impl Error {
    /// Create a locale provider error
    pub fn locale<S: Into<String>>(message: S) -> Self {
        Self::Locale {
            message: message.into(),
            source: None,
        }
    }

    /// Create an asset URL error
    pub fn asset_url<S: Into<String>>(message: S) -> Self {
        Self::AssetUrl {
            message: message.into(),
            source: None,
        }
    }

    /// Create a namespace mapping error
    pub fn namespace_mapping<S: Into<String>>(message: S) -> Self {
        Self::NamespaceMapping {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
