//! Configuration types module

pub mod app;
pub mod environment;
pub mod loader;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use environment::EnvironmentSettings;
pub use loader::LoaderSettings;
pub use logging::LoggingConfig;
