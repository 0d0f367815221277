//! Unit tests for the loader configuration value object

use rjs_domain::value_objects::LoaderConfiguration;
use serde_json::{Map, Value, json};

fn sample() -> LoaderConfiguration {
    let mut entries = Map::new();
    entries.insert("baseUrl".to_string(), json!("/assets/js"));
    entries.insert("locale".to_string(), json!("en"));
    entries.insert("waitSeconds".to_string(), json!(15));
    LoaderConfiguration::new(entries)
}

#[test]
fn test_accessors() {
    let configuration = sample();

    assert_eq!(configuration.base_url(), Some("/assets/js"));
    assert_eq!(configuration.locale(), Some("en"));
    assert_eq!(configuration.get("waitSeconds"), Some(&json!(15)));
    assert!(!configuration.contains_key("paths"));
    assert_eq!(configuration.len(), 3);
}

#[test]
fn test_keys_keep_insertion_order() {
    let configuration = sample();
    let keys: Vec<&str> = configuration.keys().collect();
    assert_eq!(keys, vec!["baseUrl", "locale", "waitSeconds"]);
}

#[test]
fn test_json_output() {
    let json = sample()
        .to_json_string()
        .expect("serialization should succeed");
    assert_eq!(
        json,
        r#"{"baseUrl":"/assets/js","locale":"en","waitSeconds":15}"#
    );
}

#[test]
fn test_into_value() {
    let value: Value = sample().into();
    assert_eq!(value["locale"], json!("en"));
}
