//! Service adapters
//!
//! Implementations of the domain ports for applications that do not provide
//! their own services. All of them are plain values configured up front.
//!
//! | Adapter | Port |
//! |---------|------|
//! | [`StaticLocaleProvider`] | `LocaleProvider` |
//! | [`StaticAssetUrlResolver`] | `AssetUrlResolver` |
//! | [`StaticDebugFlag`] | `DebugFlagProvider` |
//! | [`NamespaceMapping`] | `NamespaceMapper` |

pub mod assets;
pub mod debug;
pub mod locale;
pub mod namespace;

pub use assets::StaticAssetUrlResolver;
pub use debug::StaticDebugFlag;
pub use locale::StaticLocaleProvider;
pub use namespace::NamespaceMapping;
