//! Builder bootstrap
//!
//! Turns [`AppConfig`] into a ready [`ConfigurationBuilder`]: the adapters
//! are created from the environment settings, namespaces are registered, and
//! every configured path, option and the almond flag are applied.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().with_config_path("requirejs.toml").load()?;
//! let json = render_configuration(&config)?;
//! ```

use crate::adapters::{
    NamespaceMapping, StaticAssetUrlResolver, StaticDebugFlag, StaticLocaleProvider,
};
use crate::config::AppConfig;
use rjs_application::{ConfigurationBuilder, LoaderServices};
use rjs_domain::error::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Create the builder services from settings
pub fn loader_services(config: &AppConfig) -> Result<LoaderServices> {
    let environment = &config.environment;

    let mut assets = StaticAssetUrlResolver::new(environment.asset_root.clone());
    if let Some(version) = &environment.asset_version {
        assets = assets.with_version(version.clone());
    }

    let mut mapping = NamespaceMapping::new();
    for (namespace, path) in &config.loader.namespaces {
        mapping.register_namespace(namespace.clone(), path.clone())?;
    }

    Ok(LoaderServices::new(
        Arc::new(StaticLocaleProvider::new(environment.locale.clone())),
        Arc::new(assets),
        Arc::new(StaticDebugFlag::new(environment.debug)),
        Arc::new(mapping),
    ))
}

/// Create a builder seeded with every loader setting
pub fn build_configuration_builder(config: &AppConfig) -> Result<ConfigurationBuilder> {
    let loader = &config.loader;
    let mut builder = ConfigurationBuilder::new(
        loader_services(config)?,
        &loader.base_url,
        loader.shim.clone(),
        loader.deps.clone(),
        loader.priority.clone(),
    );

    for (module, locations) in &loader.paths {
        builder.set_path(module.clone(), locations.clone())?;
    }
    for (name, value) in &loader.options {
        builder.add_option(name.clone(), value.clone());
    }
    builder.set_use_almond(loader.use_almond);

    if !builder.unresolved_locations().is_empty() {
        warn!(
            locations = ?builder.unresolved_locations(),
            "Locations without namespace mapping were kept unchanged"
        );
    }

    Ok(builder)
}

/// Build the configuration described by `config` and serialize it as JSON
pub fn render_configuration(config: &AppConfig) -> Result<String> {
    let configuration = build_configuration_builder(config)?.build()?;
    info!(keys = configuration.len(), "Rendered loader configuration");
    configuration.to_json_string()
}
