//! Domain constants
//!
//! Naming conventions shared between the provider loader and its callers.

// ============================================================================
// PROVIDER CONVENTIONS
// ============================================================================

/// Default name prefix identifying configuration units during discovery
pub const DEFAULT_CONFIG_PREFIX: &str = "implkit_config";

/// Attribute holding a unit's integer priority
pub const PRIORITY_ATTRIBUTE: &str = "priority";

/// Attribute holding a unit's configure procedure
pub const CONFIGURE_ATTRIBUTE: &str = "configure";

/// Parameter names recognized as "the context" for a configure procedure
pub const CONTEXT_PARAMETER_NAMES: &[&str] = &["context", "ctx", "injecty_context"];

// ============================================================================
// CONSTRUCTION CONVENTIONS
// ============================================================================

/// Field naming the implementation in a type-tagged argument object
pub const TYPE_FIELD: &str = "type";
