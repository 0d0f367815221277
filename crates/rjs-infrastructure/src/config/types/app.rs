//! Application configuration root

use super::{EnvironmentSettings, LoaderSettings, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root of the settings file
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [environment]
/// locale = "fr"
/// asset_root = "/assets"
/// asset_version = "v=3"
/// debug = false
///
/// [loader]
/// base_url = "js"
/// use_almond = true
/// deps = ["app/main"]
///
/// [loader.paths]
/// jquery = ["//cdn.example.com/jquery.min", "@Vendor/jquery.js"]
///
/// [loader.shim.backbone]
/// deps = ["underscore", "jquery"]
/// exports = "Backbone"
///
/// [loader.namespaces]
/// "@Vendor" = "bundles/vendor/js"
///
/// [loader.options]
/// waitSeconds = 15
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Loader configuration sources
    pub loader: LoaderSettings,

    /// Values served by the static adapters
    pub environment: EnvironmentSettings,
}
