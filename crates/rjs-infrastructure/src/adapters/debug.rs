//! Fixed debug flag

use rjs_domain::ports::DebugFlagProvider;

/// Debug flag provider with a configured value
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDebugFlag {
    debug: Option<bool>,
}

impl StaticDebugFlag {
    /// Create a provider; `None` models an undefined debug parameter
    pub fn new(debug: Option<bool>) -> Self {
        Self { debug }
    }
}

impl DebugFlagProvider for StaticDebugFlag {
    fn debug(&self) -> Option<bool> {
        self.debug
    }
}
