//! Adapter Tests

use rjs_domain::ports::{AssetUrlResolver, DebugFlagProvider, LocaleProvider, NamespaceMapper};
use rjs_infrastructure::adapters::{
    NamespaceMapping, StaticAssetUrlResolver, StaticDebugFlag, StaticLocaleProvider,
};

#[test]
fn test_static_locale() {
    let provider = StaticLocaleProvider::new("fr_CA");
    assert_eq!(provider.locale().unwrap(), "fr_CA");
}

#[test]
fn test_static_debug_flag() {
    assert_eq!(StaticDebugFlag::new(Some(false)).debug(), Some(false));
    assert!(StaticDebugFlag::new(Some(true)).has_debug());
    assert!(!StaticDebugFlag::default().has_debug());
}

#[test]
fn test_asset_url_joins_root_and_path() {
    let assets = StaticAssetUrlResolver::new("/assets/");

    assert_eq!(assets.url("").unwrap(), "/assets/");
    assert_eq!(assets.url("js/app.js").unwrap(), "/assets/js/app.js");
    assert_eq!(assets.url("/js/app.js").unwrap(), "/assets/js/app.js");
}

#[test]
fn test_asset_url_appends_version() {
    let assets = StaticAssetUrlResolver::new("/assets").with_version("v=3");

    assert_eq!(assets.url("").unwrap(), "/assets/?v=3");
    assert_eq!(assets.url("app.css").unwrap(), "/assets/app.css?v=3");
}

#[test]
fn test_namespace_mapping_resolves_registered_prefix() {
    let mut mapping = NamespaceMapping::new();
    mapping
        .register_namespace("@AcmeBundle", "bundles/acme/js/")
        .unwrap();

    assert_eq!(
        mapping.module_path("@AcmeBundle/app/main.js").unwrap(),
        Some("bundles/acme/js/app/main.js".to_string())
    );
    assert_eq!(
        mapping.module_path("@AcmeBundle").unwrap(),
        Some("bundles/acme/js".to_string())
    );
}

#[test]
fn test_namespace_mapping_unknown_location() {
    let mut mapping = NamespaceMapping::new();
    mapping.register_namespace("@AcmeBundle", "bundles/acme").unwrap();

    assert_eq!(mapping.module_path("vendor/jquery").unwrap(), None);
    // A prefix only matches whole path segments
    assert_eq!(mapping.module_path("@AcmeBundleExtra/app.js").unwrap(), None);
}

#[test]
fn test_namespace_mapping_prefers_longest_prefix() {
    let mut mapping = NamespaceMapping::new();
    mapping.register_namespace("app", "public/app").unwrap();
    mapping.register_namespace("app/admin", "public/admin").unwrap();

    assert_eq!(
        mapping.module_path("app/admin/users.js").unwrap(),
        Some("public/admin/users.js".to_string())
    );
    assert_eq!(
        mapping.module_path("app/main.js").unwrap(),
        Some("public/app/main.js".to_string())
    );
}

#[test]
fn test_namespace_mapping_root_path() {
    let mut mapping = NamespaceMapping::new();
    mapping.register_namespace("@Web", "/").unwrap();

    assert_eq!(
        mapping.module_path("@Web/js/app.js").unwrap(),
        Some("js/app.js".to_string())
    );
}

#[test]
fn test_namespace_mapping_rejects_empty_prefix() {
    let mut mapping = NamespaceMapping::new();
    assert!(mapping.register_namespace("", "bundles").is_err());
    assert!(mapping.register_namespace("/", "bundles").is_err());
    assert!(mapping.is_empty());
}
