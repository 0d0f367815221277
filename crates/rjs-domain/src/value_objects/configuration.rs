//! Final loader configuration value object

use crate::constants::{KEY_BASE_URL, KEY_LOCALE};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Merged configuration handed to the module loader
///
/// Keys keep the order they were generated in: generated keys first, then
/// caller options that did not replace a generated key. The value is
/// read-only; it is produced once by the configuration builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoaderConfiguration {
    entries: Map<String, Value>,
}

impl LoaderConfiguration {
    /// Wrap an assembled key/value map
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in emission order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the configuration has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `baseUrl` value, when it is a string
    pub fn base_url(&self) -> Option<&str> {
        self.get(KEY_BASE_URL).and_then(Value::as_str)
    }

    /// The `locale` value, when it is a string
    pub fn locale(&self) -> Option<&str> {
        self.get(KEY_LOCALE).and_then(Value::as_str)
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Consume into the underlying map
    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }

    /// Compact JSON text
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Indented JSON text
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

impl From<LoaderConfiguration> for Value {
    fn from(configuration: LoaderConfiguration) -> Self {
        Value::Object(configuration.entries)
    }
}
