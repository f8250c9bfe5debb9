//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Naming conventions shared with the loader live in `implkit_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "implkit.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "implkit";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "IMPLKIT";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV: &str = "IMPLKIT_LOG";
