//! Composition root
//!
//! Wires the static adapters into `LoaderServices` and seeds a
//! `ConfigurationBuilder` from loaded settings.
//!
//! ```text
//! AppConfig → adapters → LoaderServices → ConfigurationBuilder → LoaderConfiguration
//! ```

pub mod bootstrap;

pub use bootstrap::{build_configuration_builder, loader_services, render_configuration};
