//! Configuration Builder Use Case
//!
//! Collects path definitions, shims, startup dependencies and caller options,
//! then merges them with values read from the injected services into the
//! configuration handed to the module loader.

use crate::domain_services::location::{
    is_absolute_location, resolve_base_url, strip_script_extension,
};
use crate::domain_services::shim::optimize_shim;
use indexmap::IndexMap;
use rjs_domain::constants::{
    KEY_ALMOND, KEY_BASE_URL, KEY_DEPS, KEY_LOCALE, KEY_PATHS, KEY_PRIORITY, KEY_SHIM,
    PATH_SEPARATOR,
};
use rjs_domain::error::Result;
use rjs_domain::ports::{AssetUrlResolver, DebugFlagProvider, LocaleProvider, NamespaceMapper};
use rjs_domain::value_objects::{LoaderConfiguration, PathLocations, ShimMap};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, trace};

/// Services the builder reads from while assembling a configuration
#[derive(Clone)]
pub struct LoaderServices {
    /// Current locale
    pub locale: Arc<dyn LocaleProvider>,
    /// Asset URL generation
    pub assets: Arc<dyn AssetUrlResolver>,
    /// Debug/production flag
    pub debug: Arc<dyn DebugFlagProvider>,
    /// Logical location to public path mapping
    pub mapping: Arc<dyn NamespaceMapper>,
}

impl LoaderServices {
    /// Bundle the injected services
    pub fn new(
        locale: Arc<dyn LocaleProvider>,
        assets: Arc<dyn AssetUrlResolver>,
        debug: Arc<dyn DebugFlagProvider>,
        mapping: Arc<dyn NamespaceMapper>,
    ) -> Self {
        Self {
            locale,
            assets,
            debug,
            mapping,
        }
    }
}

/// Builds the RequireJS configuration for one page or build
///
/// The builder is mutable while settings are collected. [`build`](Self::build)
/// consumes it and returns the immutable [`LoaderConfiguration`].
///
/// # Example
///
/// ```ignore
/// let mut builder = ConfigurationBuilder::new(services, "js/", shim, deps, priority);
/// builder.set_path("jquery", ["//cdn.example.com/jquery", "@Vendor/jquery.js"])?;
/// builder.add_option("waitSeconds", 15);
/// let configuration = builder.build()?;
/// ```
pub struct ConfigurationBuilder {
    services: LoaderServices,
    base_path: String,
    options: Map<String, Value>,
    paths: IndexMap<String, PathLocations>,
    shim: ShimMap,
    deps: Vec<String>,
    priority: Vec<String>,
    use_almond: bool,
    unresolved: Vec<String>,
}

impl ConfigurationBuilder {
    /// Create a builder
    ///
    /// `base_path` is the script directory relative to the asset root; leading
    /// and trailing slashes are removed.
    pub fn new(
        services: LoaderServices,
        base_path: &str,
        shim: ShimMap,
        deps: Vec<String>,
        priority: Vec<String>,
    ) -> Self {
        Self {
            services,
            base_path: base_path.trim_matches(PATH_SEPARATOR).to_string(),
            options: Map::new(),
            paths: IndexMap::new(),
            shim,
            deps,
            priority,
            use_almond: false,
            unresolved: Vec::new(),
        }
    }

    /// Store a top-level option, replacing any previous value
    ///
    /// Options are merged last, so an option named like a generated key
    /// (`baseUrl`, `paths`, ...) replaces the generated value.
    pub fn add_option<S, V>(&mut self, name: S, value: V)
    where
        S: Into<String>,
        V: Into<Value>,
    {
        self.options.insert(name.into(), value.into());
    }

    /// Define where a module is loaded from
    ///
    /// Absolute and protocol-relative locations are kept. Other locations are
    /// resolved through the namespace mapper and rewritten to
    /// `<base url>/<module path>` without the `.js` suffix; locations the
    /// mapper does not know are kept as given and recorded in
    /// [`unresolved_locations`](Self::unresolved_locations).
    pub fn set_path<S, L>(&mut self, module: S, locations: L) -> Result<()>
    where
        S: Into<String>,
        L: Into<PathLocations>,
    {
        let module = module.into();
        let mut base_url: Option<String> = None;
        let mut resolved = Vec::new();
        let mut unresolved = Vec::new();

        for location in locations.into().into_vec() {
            if is_absolute_location(&location) {
                resolved.push(location);
                continue;
            }

            match self.services.mapping.module_path(&location)? {
                Some(module_path) if !module_path.is_empty() => {
                    if base_url.is_none() {
                        base_url = Some(resolve_base_url(self.services.assets.as_ref())?);
                    }
                    let base = base_url.as_deref().unwrap_or_default();
                    let rewritten = format!("{base}/{}", strip_script_extension(&module_path));
                    trace!(
                        module = %module,
                        from = %location,
                        to = %rewritten,
                        "Resolved module location"
                    );
                    resolved.push(rewritten);
                }
                _ => {
                    debug!(
                        module = %module,
                        location = %location,
                        "No namespace mapping for location, keeping it unchanged"
                    );
                    unresolved.push(location.clone());
                    resolved.push(location);
                }
            }
        }

        self.unresolved.extend(unresolved);
        self.paths.insert(module, PathLocations::collapse(resolved));
        Ok(())
    }

    /// Enable or disable the almond flag for production builds
    pub fn set_use_almond(&mut self, use_almond: bool) {
        self.use_almond = use_almond;
    }

    /// Path definitions collected so far
    pub fn paths(&self) -> &IndexMap<String, PathLocations> {
        &self.paths
    }

    /// Caller options collected so far
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// Script directory relative to the asset root
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Whether the almond flag was requested
    pub fn use_almond(&self) -> bool {
        self.use_almond
    }

    /// Locations passed through unchanged because no namespace mapping covered them
    pub fn unresolved_locations(&self) -> &[String] {
        &self.unresolved
    }

    /// URL of the script directory: asset base URL joined with the base path
    pub fn script_url(&self) -> Result<String> {
        let base_url = resolve_base_url(self.services.assets.as_ref())?;
        Ok(format!("{base_url}/{}", self.base_path))
    }

    /// Whether `almond` is emitted: debug flag defined, false, and almond requested
    fn almond_enabled(&self) -> bool {
        self.use_almond && self.services.debug.debug() == Some(false)
    }

    /// Produce the final configuration
    ///
    /// Generated keys come first; caller options are merged last and win on
    /// conflicts. Locale and asset URL failures propagate unchanged.
    pub fn build(self) -> Result<LoaderConfiguration> {
        let mut config = Map::new();
        config.insert(KEY_BASE_URL.to_string(), Value::String(self.script_url()?));
        config.insert(
            KEY_LOCALE.to_string(),
            Value::String(self.services.locale.locale()?),
        );

        if !self.paths.is_empty() {
            config.insert(KEY_PATHS.to_string(), serde_json::to_value(&self.paths)?);
        }

        if !self.shim.is_empty() {
            let optimized = optimize_shim(&self.shim);
            config.insert(KEY_SHIM.to_string(), serde_json::to_value(&optimized)?);
        }

        if !self.deps.is_empty() {
            config.insert(KEY_DEPS.to_string(), serde_json::to_value(&self.deps)?);
        }

        if !self.priority.is_empty() {
            config.insert(
                KEY_PRIORITY.to_string(),
                serde_json::to_value(&self.priority)?,
            );
        }

        if self.almond_enabled() {
            config.insert(KEY_ALMOND.to_string(), Value::Bool(true));
        }

        for (name, value) in self.options {
            if config.contains_key(&name) {
                debug!(option = %name, "Option overrides generated configuration key");
            }
            config.insert(name, value);
        }

        debug!(
            keys = config.len(),
            unresolved = self.unresolved.len(),
            "Loader configuration assembled"
        );
        Ok(LoaderConfiguration::new(config))
    }
}
