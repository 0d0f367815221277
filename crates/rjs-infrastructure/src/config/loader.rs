//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use rjs_domain::constants::RESERVED_KEYS;
use rjs_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `RJS__ENVIRONMENT__LOCALE`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Nested keys use a double underscore (e.g. RJS__LOADER__USE_ALMOND)
        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates
            .into_iter()
            .find(|path| !path.as_os_str().is_empty() && path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Fails fast on values the builder cannot use. Options shadowing generated
/// keys are allowed but logged.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_environment(config)?;
    validate_paths(config)?;
    validate_namespaces(config)?;
    validate_options(config)?;
    Ok(())
}

fn validate_environment(config: &AppConfig) -> Result<()> {
    if config.environment.locale.trim().is_empty() {
        return Err(Error::configuration("Locale cannot be empty"));
    }
    Ok(())
}

fn validate_paths(config: &AppConfig) -> Result<()> {
    for (module, locations) in &config.loader.paths {
        if module.trim().is_empty() {
            return Err(Error::configuration("Path module names cannot be empty"));
        }
        if locations.is_empty() {
            return Err(Error::configuration(format!(
                "Path '{module}' must define at least one location"
            )));
        }
        if locations.as_slice().iter().any(|l| l.trim().is_empty()) {
            return Err(Error::configuration(format!(
                "Path '{module}' contains an empty location"
            )));
        }
    }
    Ok(())
}

fn validate_namespaces(config: &AppConfig) -> Result<()> {
    if config
        .loader
        .namespaces
        .keys()
        .any(|prefix| prefix.trim().is_empty())
    {
        return Err(Error::configuration("Namespace prefixes cannot be empty"));
    }
    Ok(())
}

fn validate_options(config: &AppConfig) -> Result<()> {
    for name in config.loader.options.keys() {
        if name.trim().is_empty() {
            return Err(Error::configuration("Option names cannot be empty"));
        }
        if RESERVED_KEYS.contains(&name.as_str()) {
            warn!(option = %name, "Option replaces a generated configuration key");
        }
    }
    Ok(())
}
