//! Domain Value Objects
//!
//! Immutable values describing a loader configuration.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`PathLocations`] | One location or an ordered fallback list for a module |
//! | [`ShimEntry`] | Declared shim metadata for a non-module script |
//! | [`ShimDeclaration`] | Optimized shim metadata as emitted to the loader |
//! | [`LoaderConfiguration`] | Final merged configuration |

/// Final loader configuration
pub mod configuration;
/// Module path definitions
pub mod path;
/// Shim declarations
pub mod shim;

pub use configuration::LoaderConfiguration;
pub use path::PathLocations;
pub use shim::{ShimDeclaration, ShimEntry, ShimMap};
