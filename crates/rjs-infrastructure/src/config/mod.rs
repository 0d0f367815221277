//! Configuration management
//!
//! Settings describing the loader (paths, shims, options), the static
//! environment the adapters serve (locale, asset root, debug flag) and
//! logging. Loaded from defaults, a TOML file and `RJS__` environment
//! variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
