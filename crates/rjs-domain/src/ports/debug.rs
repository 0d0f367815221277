//! Debug Flag Provider Port

/// Exposes the application debug flag
///
/// Containers are not required to define the flag, so absence is part of the
/// contract: `None` means the parameter does not exist.
pub trait DebugFlagProvider: Send + Sync {
    /// `Some(true)` in debug mode, `Some(false)` in production, `None` when undefined
    fn debug(&self) -> Option<bool>;

    /// Whether the debug parameter is defined at all
    fn has_debug(&self) -> bool {
        self.debug().is_some()
    }
}
