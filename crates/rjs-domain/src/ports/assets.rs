//! Asset URL Resolver Port
//!
//! Resolves the public URL of a static asset. Implementations may append a
//! cache-busting query string (e.g. `/assets/app.js?v=3`); callers that need
//! a bare directory URL are responsible for removing it.

use crate::error::Result;

/// Asset URL resolver port
///
/// # Example
///
/// ```ignore
/// use rjs_domain::ports::AssetUrlResolver;
///
/// fn asset_root(assets: &dyn AssetUrlResolver) -> rjs_domain::Result<String> {
///     assets.url("")
/// }
/// ```
pub trait AssetUrlResolver: Send + Sync {
    /// Public URL for `relative_path`, possibly suffixed with a query string
    fn url(&self, relative_path: &str) -> Result<String>;
}
