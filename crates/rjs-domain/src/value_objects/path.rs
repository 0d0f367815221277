//! Module path value objects

use serde::{Deserialize, Serialize};

/// Locations a module can be loaded from
///
/// The loader accepts either a single location or an ordered list it tries
/// in turn. Both forms serialize the way the loader expects them: a JSON
/// string or a JSON array.
///
/// # Example
///
/// ```
/// use rjs_domain::value_objects::PathLocations;
///
/// let single = PathLocations::from("lib/jquery");
/// assert_eq!(serde_json::to_string(&single).unwrap(), r#""lib/jquery""#);
///
/// let fallbacks = PathLocations::from(vec!["//cdn.example.com/jquery", "lib/jquery"]);
/// assert_eq!(fallbacks.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathLocations {
    /// A single location
    Single(String),
    /// Ordered fallback locations
    Fallbacks(Vec<String>),
}

impl PathLocations {
    /// Build from resolved locations, collapsing a one-element list to [`PathLocations::Single`]
    pub fn collapse(mut locations: Vec<String>) -> Self {
        if locations.len() == 1 {
            Self::Single(locations.remove(0))
        } else {
            Self::Fallbacks(locations)
        }
    }

    /// Borrow the locations in order
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(location) => std::slice::from_ref(location),
            Self::Fallbacks(locations) => locations,
        }
    }

    /// Consume into an ordered list of locations
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(location) => vec![location],
            Self::Fallbacks(locations) => locations,
        }
    }

    /// Number of locations
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether no location is defined
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<String> for PathLocations {
    fn from(location: String) -> Self {
        Self::Single(location)
    }
}

impl From<&str> for PathLocations {
    fn from(location: &str) -> Self {
        Self::Single(location.to_string())
    }
}

impl From<Vec<String>> for PathLocations {
    fn from(locations: Vec<String>) -> Self {
        Self::Fallbacks(locations)
    }
}

impl From<Vec<&str>> for PathLocations {
    fn from(locations: Vec<&str>) -> Self {
        Self::Fallbacks(locations.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathLocations {
    fn from(locations: [&str; N]) -> Self {
        Self::Fallbacks(locations.into_iter().map(str::to_string).collect())
    }
}
