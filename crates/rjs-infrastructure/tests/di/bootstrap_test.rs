//! Bootstrap tests

use rjs_infrastructure::config::{AppConfig, ConfigLoader};
use rjs_infrastructure::{build_configuration_builder, render_configuration};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

const SETTINGS: &str = r#"
[environment]
locale = "fr"
asset_root = "/assets"
asset_version = "v=3"
debug = false

[loader]
base_url = "js/"
deps = ["app"]
use_almond = true

[loader.paths]
jquery = ["//cdn.example.com/jquery.min", "@Vendor/jquery.js"]
app = "@App/main.js"
legacy = "vendor/legacy"

[loader.shim.backbone]
deps = ["underscore", "jquery"]
exports = "Backbone"

[loader.shim."jquery.cookie"]
deps = ["jquery"]

[loader.shim.unused]
deps = []

[loader.namespaces]
"@Vendor" = "bundles/vendor/js"
"@App" = "bundles/app"

[loader.options]
waitSeconds = 15
"#;

fn settings() -> AppConfig {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("requirejs.toml");
    fs::write(&path, SETTINGS).expect("Failed to write config file");

    ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("RJS_BOOTSTRAP_TEST_UNSET")
        .load()
        .expect("Should load config")
}

#[test]
fn test_render_configuration_from_settings() {
    let json = render_configuration(&settings()).expect("Should render configuration");
    let rendered: Value = serde_json::from_str(&json).expect("Output should be JSON");

    assert_eq!(
        rendered,
        json!({
            "baseUrl": "/assets/js",
            "locale": "fr",
            "paths": {
                "jquery": ["//cdn.example.com/jquery.min", "/assets/bundles/vendor/js/jquery"],
                "app": "/assets/bundles/app/main",
                "legacy": "vendor/legacy"
            },
            "shim": {
                "backbone": { "deps": ["underscore", "jquery"], "exports": "Backbone" },
                "jquery.cookie": ["jquery"]
            },
            "deps": ["app"],
            "almond": true,
            "waitSeconds": 15
        })
    );
}

#[test]
fn test_builder_records_unresolved_locations() {
    let builder = build_configuration_builder(&settings()).expect("Should build builder");

    assert_eq!(builder.unresolved_locations(), ["vendor/legacy"]);
    assert!(builder.use_almond());
    assert_eq!(builder.base_path(), "js");
}

#[test]
fn test_debug_mode_omits_almond() {
    let mut config = settings();
    config.environment.debug = Some(true);

    let configuration = build_configuration_builder(&config)
        .and_then(|builder| builder.build())
        .expect("Should build configuration");

    assert!(!configuration.contains_key("almond"));
}

#[test]
fn test_default_settings_render_minimal_configuration() {
    let json = render_configuration(&AppConfig::default()).expect("Should render configuration");

    assert_eq!(json, r#"{"baseUrl":"/js","locale":"en"}"#);
}
