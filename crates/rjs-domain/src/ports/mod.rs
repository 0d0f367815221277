//! Domain Port Interfaces
//!
//! Contracts for the services the configuration builder reads from.
//! Each port is narrow so that it can be faked independently in tests.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`LocaleProvider`] | Current request locale |
//! | [`AssetUrlResolver`] | Public URL of static assets |
//! | [`DebugFlagProvider`] | Debug/production mode flag |
//! | [`NamespaceMapper`] | Logical module location to public file path |

/// Asset URL resolver port
pub mod assets;
/// Debug flag provider port
pub mod debug;
/// Locale provider port
pub mod locale;
/// Namespace mapping port
pub mod mapping;

pub use assets::AssetUrlResolver;
pub use debug::DebugFlagProvider;
pub use locale::LocaleProvider;
pub use mapping::NamespaceMapper;
