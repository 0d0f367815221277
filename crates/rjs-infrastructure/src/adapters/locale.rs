//! Fixed locale provider

use rjs_domain::error::Result;
use rjs_domain::ports::LocaleProvider;

/// Locale provider returning a configured locale
#[derive(Debug, Clone)]
pub struct StaticLocaleProvider {
    locale: String,
}

impl StaticLocaleProvider {
    /// Create a provider for `locale`
    pub fn new<S: Into<String>>(locale: S) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

impl LocaleProvider for StaticLocaleProvider {
    fn locale(&self) -> Result<String> {
        Ok(self.locale.clone())
    }
}
