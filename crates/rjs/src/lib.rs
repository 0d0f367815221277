//! # RequireJS Configuration
//!
//! Builds the configuration object handed to the RequireJS loader: module
//! paths, shims, startup dependencies, load priorities, base URL and locale.
//!
//! ## Example
//!
//! ```ignore
//! use rjs::infrastructure::{ConfigLoader, render_configuration};
//!
//! let settings = ConfigLoader::new().with_config_path("requirejs.toml").load()?;
//! let json = render_configuration(&settings)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - ports, value objects and errors
//! - `application` - the configuration builder and shim optimization
//! - `infrastructure` - settings, logging, adapters and bootstrap

/// Domain layer - ports, value objects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use rjs_domain::*;
}

/// Application layer - configuration builder
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use rjs_application::*;
}

/// Infrastructure layer - settings, logging and adapters
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use rjs_infrastructure::*;
}

pub use rjs_application::{ConfigurationBuilder, LoaderServices};
pub use rjs_domain::{Error, LoaderConfiguration, Result};
