//! Domain services used by the configuration builder

/// Location normalization and base URL resolution
pub mod location;
/// Shim optimization
pub mod shim;

pub use location::{
    is_absolute_location, normalize_base_url, resolve_base_url, strip_script_extension,
};
pub use shim::optimize_shim;
