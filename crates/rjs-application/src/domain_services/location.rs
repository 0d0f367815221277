//! Location normalization
//!
//! Helpers deciding how a module location is written into the `paths`
//! section, and how the asset root URL is derived.

use regex::Regex;
use rjs_domain::constants::{
    ABSOLUTE_LOCATION_PATTERN, PATH_SEPARATOR, QUERY_SEPARATOR, SCRIPT_EXTENSION_PATTERN,
};
use rjs_domain::error::Result;
use rjs_domain::ports::AssetUrlResolver;
use std::sync::LazyLock;

static ABSOLUTE_LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ABSOLUTE_LOCATION_PATTERN).expect("Invalid regex"));

static SCRIPT_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SCRIPT_EXTENSION_PATTERN).expect("Invalid regex"));

/// Whether `location` starts with `//`, `http` or `https` and must be kept verbatim
pub fn is_absolute_location(location: &str) -> bool {
    ABSOLUTE_LOCATION.is_match(location)
}

/// Remove one trailing `.js` from a module path
pub fn strip_script_extension(module_path: &str) -> String {
    SCRIPT_EXTENSION.replace(module_path, "").into_owned()
}

/// Turn an asset URL into a base URL: drop the query string, then trailing slashes
pub fn normalize_base_url(url: &str) -> &str {
    let without_query = url
        .split_once(QUERY_SEPARATOR)
        .map_or(url, |(base, _)| base);
    without_query.trim_end_matches(PATH_SEPARATOR)
}

/// Resolve the URL static assets are served under
///
/// Asks the resolver for the empty relative path and normalizes the answer
/// with [`normalize_base_url`]. Resolver errors propagate unchanged.
pub fn resolve_base_url(assets: &dyn AssetUrlResolver) -> Result<String> {
    let url = assets.url("")?;
    Ok(normalize_base_url(&url).to_string())
}
