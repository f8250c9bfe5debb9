//! Discovery configuration types

use implkit_domain::constants::DEFAULT_CONFIG_PREFIX;
use serde::{Deserialize, Serialize};

/// Configuration unit discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Name prefix a unit must carry to be discovered
    pub prefix: String,

    /// Whether linked units are discovered at all
    pub enabled: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_CONFIG_PREFIX.to_string(),
            enabled: true,
        }
    }
}
