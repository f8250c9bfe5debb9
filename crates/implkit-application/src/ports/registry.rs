//! Configuration Unit Registry
//!
//! Link-time registration of configuration units. Crates submit entries
//! with `linkme`; the infrastructure layer exposes them to the loader as a
//! [`ModuleScanner`](super::ModuleScanner) and [`UnitLoader`](super::UnitLoader).
//!
//! ```ignore
//! use implkit_application::ports::registry::{CONFIG_UNITS, UnitEntry};
//!
//! #[linkme::distributed_slice(CONFIG_UNITS)]
//! static SHAPES: UnitEntry = UnitEntry {
//!     name: "implkit_config_shapes",
//!     description: "Circle and square shapes",
//!     load: shapes_unit,
//! };
//! ```

use implkit_domain::BoxError;

use crate::loader::Unit;

/// Registry entry for a configuration unit
pub struct UnitEntry {
    /// Unit name, matched against the discovery prefix
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Builds the unit
    pub load: fn() -> Result<Unit, BoxError>,
}

// Auto-collection via linkme distributed slices - crates submit entries at link time
#[linkme::distributed_slice]
pub static CONFIG_UNITS: [UnitEntry] = [..];

/// List all registered configuration units
///
/// Returns (name, description) pairs, useful for CLI help.
pub fn list_config_units() -> Vec<(&'static str, &'static str)> {
    CONFIG_UNITS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
