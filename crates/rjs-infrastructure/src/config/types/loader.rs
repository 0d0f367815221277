//! Loader settings

use crate::constants::DEFAULT_BASE_PATH;
use indexmap::IndexMap;
use rjs_domain::value_objects::{PathLocations, ShimMap};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Everything the configuration builder is seeded with
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// Script directory relative to the asset root
    pub base_url: String,

    /// Module path definitions, applied through `set_path`
    pub paths: IndexMap<String, PathLocations>,

    /// Shim declarations
    pub shim: ShimMap,

    /// Modules loaded on startup
    pub deps: Vec<String>,

    /// Modules loaded eagerly
    pub priority: Vec<String>,

    /// Extra top-level options, merged last
    pub options: Map<String, Value>,

    /// Emit the almond flag in production
    pub use_almond: bool,

    /// Namespace prefix to public path registrations
    pub namespaces: IndexMap<String, String>,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_PATH.to_string(),
            paths: IndexMap::new(),
            shim: ShimMap::new(),
            deps: Vec::new(),
            priority: Vec::new(),
            options: Map::new(),
            use_almond: false,
            namespaces: IndexMap::new(),
        }
    }
}
