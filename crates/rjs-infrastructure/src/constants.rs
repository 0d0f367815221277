//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Configuration keys and location patterns live in `rjs_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "requirejs.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "requirejs";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "RJS";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOADER DEFAULTS
// ============================================================================

/// Default script directory, relative to the asset root
pub const DEFAULT_BASE_PATH: &str = "js";

/// Default locale when no translator is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Default asset root URL
pub const DEFAULT_ASSET_ROOT: &str = "/";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "RJS_LOG";
