//! Domain layer constants
//!
//! Keys of the generated loader configuration and the patterns used to
//! normalize module locations.

// ============================================================================
// CONFIGURATION KEYS
// ============================================================================

/// Key holding the script base URL
pub const KEY_BASE_URL: &str = "baseUrl";

/// Key holding the current locale
pub const KEY_LOCALE: &str = "locale";

/// Key holding module path definitions
pub const KEY_PATHS: &str = "paths";

/// Key holding shim declarations
pub const KEY_SHIM: &str = "shim";

/// Key holding modules loaded on startup
pub const KEY_DEPS: &str = "deps";

/// Key holding the eager load priority list
pub const KEY_PRIORITY: &str = "priority";

/// Key holding the almond flag
pub const KEY_ALMOND: &str = "almond";

/// Keys generated by the builder; options using one of these replace the generated value
pub const RESERVED_KEYS: [&str; 7] = [
    KEY_BASE_URL,
    KEY_LOCALE,
    KEY_PATHS,
    KEY_SHIM,
    KEY_DEPS,
    KEY_PRIORITY,
    KEY_ALMOND,
];

// ============================================================================
// SHIM FIELDS
// ============================================================================

/// Shim field listing implicit dependencies
pub const SHIM_FIELD_DEPS: &str = "deps";

/// Shim field naming the exported global
pub const SHIM_FIELD_EXPORTS: &str = "exports";

// ============================================================================
// LOCATION PATTERNS
// ============================================================================

/// Locations matching this pattern are already absolute or protocol-relative
pub const ABSOLUTE_LOCATION_PATTERN: &str = r"^(//|http|https)";

/// Suffix stripped from resolved module paths
pub const SCRIPT_EXTENSION_PATTERN: &str = r"\.js$";

/// Separator between a URL and its query string
pub const QUERY_SEPARATOR: char = '?';

/// URL path separator
pub const PATH_SEPARATOR: char = '/';
