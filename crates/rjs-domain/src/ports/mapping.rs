//! Namespace Mapping Port
//!
//! Maps a logical module location (for example `@AcmeBundle/js/main.js`)
//! onto the path the file is published under, relative to the asset root.

use crate::error::Result;

/// Namespace mapper port
pub trait NamespaceMapper: Send + Sync {
    /// Public path for `location`, or `None` when no namespace covers it
    fn module_path(&self, location: &str) -> Result<Option<String>>;
}
