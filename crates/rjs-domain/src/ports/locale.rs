//! Locale Provider Port

use crate::error::Result;

/// Provides the locale the loader configuration is generated for
pub trait LocaleProvider: Send + Sync {
    /// Current locale identifier (e.g. `en`, `fr_CA`)
    fn locale(&self) -> Result<String>;
}
