//! # Domain Layer
//!
//! Core types for assembling a RequireJS loader configuration.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Reserved configuration keys and location patterns |
//! | [`ports`] | Service contracts consumed by the builder |
//! | [`value_objects`] | Path, shim and configuration values |
//!
//! The domain crate has no knowledge of how locales, asset URLs or namespace
//! mappings are produced. Those concerns are reached through [`ports`] and
//! implemented in the infrastructure crate.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    LoaderConfiguration, PathLocations, ShimDeclaration, ShimEntry, ShimMap,
};
