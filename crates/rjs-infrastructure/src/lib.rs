//! # Infrastructure Layer
//!
//! Technical concerns around the configuration builder: where settings come
//! from, how the builder's services are provided, and how events are logged.
//!
//! ## Module Categories
//!
//! ### Configuration & wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment settings loaded with Figment |
//! | [`di`] | Builds a configured `ConfigurationBuilder` from settings |
//! | [`constants`] | Centralized infrastructure constants |
//!
//! ### Service adapters
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Static locale, asset URL and debug flag providers, namespace mapping |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod adapters;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{build_configuration_builder, render_configuration};
pub use error_ext::ErrorContext;
