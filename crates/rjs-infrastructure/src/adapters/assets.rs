//! Asset URL resolver over a fixed root URL
//!
//! Joins relative asset paths onto a root and appends the configured
//! cache-busting query, the way asset helpers version their URLs.

use rjs_domain::constants::{PATH_SEPARATOR, QUERY_SEPARATOR};
use rjs_domain::error::Result;
use rjs_domain::ports::AssetUrlResolver;

/// Asset resolver rooted at a fixed URL
#[derive(Debug, Clone)]
pub struct StaticAssetUrlResolver {
    root: String,
    version: Option<String>,
}

impl StaticAssetUrlResolver {
    /// Create a resolver for assets served under `root`
    pub fn new<S: Into<String>>(root: S) -> Self {
        Self {
            root: root.into(),
            version: None,
        }
    }

    /// Append `version` as query string to every URL
    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl AssetUrlResolver for StaticAssetUrlResolver {
    fn url(&self, relative_path: &str) -> Result<String> {
        let mut url = format!(
            "{}{}{}",
            self.root.trim_end_matches(PATH_SEPARATOR),
            PATH_SEPARATOR,
            relative_path.trim_start_matches(PATH_SEPARATOR)
        );
        if let Some(version) = self.version.as_deref().filter(|v| !v.is_empty()) {
            url.push(QUERY_SEPARATOR);
            url.push_str(version);
        }
        Ok(url)
    }
}
