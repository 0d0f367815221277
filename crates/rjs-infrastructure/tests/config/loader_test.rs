//! Configuration loader tests

use rjs_domain::error::Error;
use rjs_domain::value_objects::PathLocations;
use rjs_infrastructure::config::{AppConfig, ConfigLoader};
use rjs_infrastructure::constants::{DEFAULT_BASE_PATH, DEFAULT_LOCALE};
use std::env;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Env prefix no test environment defines
const ISOLATED_PREFIX: &str = "RJS_LOADER_TEST_UNSET";

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("requirejs.toml");
    fs::write(&path, content).expect("Failed to write config file");
    path
}

fn load(path: &Path) -> rjs_domain::Result<AppConfig> {
    ConfigLoader::new()
        .with_config_path(path)
        .with_env_prefix(ISOLATED_PREFIX)
        .load()
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = load(&dir.path().join("absent.toml")).expect("Should load defaults");

    assert_eq!(config.loader.base_url, DEFAULT_BASE_PATH);
    assert_eq!(config.environment.locale, DEFAULT_LOCALE);
    assert!(config.loader.paths.is_empty());
    assert!(config.environment.debug.is_none());
    assert!(!config.loader.use_almond);
}

#[test]
fn test_file_values_are_applied() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(
        &dir,
        r#"
[environment]
locale = "de"
asset_root = "/static"
debug = false

[loader]
base_url = "scripts"
deps = ["app/main"]
use_almond = true

[loader.paths]
jquery = ["//cdn.example.com/jquery", "lib/jquery"]
app = "app/index"

[loader.shim.backbone]
deps = ["underscore", "jquery"]
exports = "Backbone"

[loader.options]
waitSeconds = 15
"#,
    );

    let config = load(&path).expect("Should load config");

    assert_eq!(config.environment.locale, "de");
    assert_eq!(config.environment.asset_root, "/static");
    assert_eq!(config.environment.debug, Some(false));
    assert_eq!(config.loader.base_url, "scripts");
    assert_eq!(config.loader.deps, vec!["app/main".to_string()]);
    assert!(config.loader.use_almond);
    assert_eq!(
        config.loader.paths.get("jquery"),
        Some(&PathLocations::Fallbacks(vec![
            "//cdn.example.com/jquery".to_string(),
            "lib/jquery".to_string(),
        ]))
    );
    assert_eq!(
        config.loader.paths.get("app"),
        Some(&PathLocations::Single("app/index".to_string()))
    );
    let backbone = config.loader.shim.get("backbone").expect("shim entry");
    assert_eq!(backbone.exports.as_deref(), Some("Backbone"));
    assert_eq!(
        config.loader.options.get("waitSeconds"),
        Some(&serde_json::json!(15))
    );
}

#[test]
fn test_empty_locale_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&dir, "[environment]\nlocale = \"\"\n");

    assert!(load(&path).is_err());
}

#[test]
fn test_empty_path_locations_are_rejected() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&dir, "[loader.paths]\napp = []\n");

    assert!(load(&path).is_err());
}

#[test]
fn test_empty_namespace_prefix_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&dir, "[loader.namespaces]\n\"\" = \"bundles\"\n");

    assert!(load(&path).is_err());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&dir, "[logging]\nlevel = \"loud\"\n");

    assert!(load(&path).is_err());
}

#[test]
fn test_mistyped_value_keeps_extraction_error_as_source() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&dir, "[loader]\nuse_almond = \"sometimes\"\n");

    let err = load(&path).expect_err("Mistyped value should be rejected");

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Failed to extract configuration"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("saved.toml");

    let mut config = AppConfig::default();
    config.environment.locale = "es".to_string();
    config.loader.deps = vec!["main".to_string()];

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix(ISOLATED_PREFIX);
    loader
        .save_to_file(&config, &path)
        .expect("Should save config");
    let reloaded = loader.load().expect("Should reload config");

    assert_eq!(reloaded.environment.locale, "es");
    assert_eq!(reloaded.loader.deps, vec!["main".to_string()]);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

/// Run with: `cargo test -p rjs-infrastructure --test integration -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&dir, "[environment]\nlocale = \"de\"\n");
    set_env("RJS__ENVIRONMENT__LOCALE", "nl");

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("Should load config");

    assert_eq!(config.environment.locale, "nl");
    remove_env("RJS__ENVIRONMENT__LOCALE");
}
