//! Use cases

/// Loader configuration assembly
pub mod configuration_builder;

pub use configuration_builder::{ConfigurationBuilder, LoaderServices};
