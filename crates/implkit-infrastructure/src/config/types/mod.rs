//! Configuration types module

pub mod app;
pub mod discovery;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use discovery::DiscoveryConfig;
pub use logging::LoggingConfig;
