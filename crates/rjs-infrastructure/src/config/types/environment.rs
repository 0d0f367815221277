//! Environment settings served by the static adapters

use crate::constants::{DEFAULT_ASSET_ROOT, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};

/// Locale, asset URL and debug flag used when no application services are injected
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    /// Locale reported to the loader
    pub locale: String,

    /// URL static assets are served under
    pub asset_root: String,

    /// Cache-busting query appended to asset URLs (e.g. `v=3`)
    pub asset_version: Option<String>,

    /// Debug flag; absent means the parameter is undefined
    pub debug: Option<bool>,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            asset_root: DEFAULT_ASSET_ROOT.to_string(),
            asset_version: None,
            debug: None,
        }
    }
}
