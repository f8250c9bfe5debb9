//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{DiscoveryConfig, LoggingConfig};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Configuration unit discovery
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}
