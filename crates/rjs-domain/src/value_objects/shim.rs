//! Shim value objects
//!
//! A shim tells the loader how to treat a script that does not define a
//! module itself: which scripts must run before it (`deps`) and which global
//! it leaves behind (`exports`). Any other loader-specific field is kept
//! verbatim in [`ShimEntry::extra`].

use crate::constants::{SHIM_FIELD_DEPS, SHIM_FIELD_EXPORTS};
use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shim declarations keyed by module name, in declaration order
pub type ShimMap = IndexMap<String, ShimEntry>;

/// Declared shim metadata for one module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShimEntry {
    /// Scripts that must be loaded first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deps: Option<Vec<String>>,

    /// Global exported by the script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exports: Option<String>,

    /// Any other field, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShimEntry {
    /// Create an empty entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dependency list
    pub fn with_deps<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deps = Some(deps.into_iter().map(Into::into).collect());
        self
    }

    /// Set the exported global
    pub fn with_exports<S: Into<String>>(mut self, exports: S) -> Self {
        self.exports = Some(exports.into());
        self
    }

    /// Set a field by name
    ///
    /// `deps` and `exports` are stored in their typed fields and must have the
    /// matching JSON shape; any other name goes to [`extra`](Self::extra).
    pub fn with_field<S: Into<String>>(mut self, name: S, value: Value) -> Result<Self> {
        let name = name.into();
        match name.as_str() {
            SHIM_FIELD_DEPS => self.deps = Some(serde_json::from_value(value)?),
            SHIM_FIELD_EXPORTS => self.exports = Some(serde_json::from_value(value)?),
            _ => {
                self.extra.insert(name, value);
            }
        }
        Ok(self)
    }

    /// Number of fields present on the entry
    pub fn field_count(&self) -> usize {
        usize::from(self.deps.is_some()) + usize::from(self.exports.is_some()) + self.extra.len()
    }

    /// Whether the entry declares nothing
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }
}

/// Shim metadata in the form emitted to the loader
///
/// The loader accepts a bare dependency list as shorthand for a record that
/// only has `deps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShimDeclaration {
    /// Shorthand: dependency list only
    Deps(Vec<String>),
    /// Full record
    Entry(ShimEntry),
}
