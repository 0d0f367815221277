//! Namespace mapping registry
//!
//! Logical locations are written as `<namespace>/<file>`, for example
//! `@AcmeBundle/js/app.js`. Each registered namespace points at the
//! directory its files are published under, relative to the asset root.

use indexmap::IndexMap;
use rjs_domain::constants::PATH_SEPARATOR;
use rjs_domain::error::{Error, Result};
use rjs_domain::ports::NamespaceMapper;
use tracing::debug;

/// Registry of namespace prefixes and their public directories
#[derive(Debug, Clone, Default)]
pub struct NamespaceMapping {
    namespaces: IndexMap<String, String>,
}

impl NamespaceMapping {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `namespace` as published under `path`
    ///
    /// Registering the same namespace twice replaces the previous path.
    pub fn register_namespace<N, P>(&mut self, namespace: N, path: P) -> Result<()>
    where
        N: Into<String>,
        P: Into<String>,
    {
        let namespace = namespace.into();
        let namespace = namespace.trim_end_matches(PATH_SEPARATOR);
        if namespace.is_empty() {
            return Err(Error::namespace_mapping("Namespace prefix cannot be empty"));
        }

        let path: String = path.into();
        let path = path.trim_matches(PATH_SEPARATOR).to_string();
        debug!(namespace = %namespace, path = %path, "Registered namespace");
        self.namespaces.insert(namespace.to_string(), path);
        Ok(())
    }

    /// Number of registered namespaces
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Whether no namespace is registered
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Longest registered namespace covering `location`, with the remaining path
    fn find<'a>(&'a self, location: &'a str) -> Option<(&'a str, &'a str)> {
        self.namespaces
            .iter()
            .filter_map(|(namespace, path)| {
                let rest = location.strip_prefix(namespace.as_str())?;
                if rest.is_empty() || rest.starts_with(PATH_SEPARATOR) {
                    Some((namespace.len(), path.as_str(), rest))
                } else {
                    None
                }
            })
            .max_by_key(|(len, _, _)| *len)
            .map(|(_, path, rest)| (path, rest.trim_start_matches(PATH_SEPARATOR)))
    }
}

impl NamespaceMapper for NamespaceMapping {
    fn module_path(&self, location: &str) -> Result<Option<String>> {
        let Some((path, rest)) = self.find(location) else {
            return Ok(None);
        };

        let module_path = match (path.is_empty(), rest.is_empty()) {
            (_, true) => path.to_string(),
            (true, false) => rest.to_string(),
            (false, false) => format!("{path}{PATH_SEPARATOR}{rest}"),
        };
        Ok(Some(module_path))
    }
}
