//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the registry engine.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Context
//! | Module | Description |
//! |--------|-------------|
//! | [`discovery`] | Link-time configuration units as a scanner and loader |
//! | [`context`] | Lazily built default context |

pub mod config;
pub mod constants;
pub mod context;
pub mod discovery;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, DiscoveryConfig, LoggingConfig};
pub use context::ContextHolder;
pub use discovery::LinkedUnits;
pub use error_ext::ErrorContext;
