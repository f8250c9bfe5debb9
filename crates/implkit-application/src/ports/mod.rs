//! Application Ports
//!
//! Collaborators the provider loader depends on but does not implement.
//!
//! - [`discovery`]: enumerate candidate units and load them by name
//! - [`registry`]: link-time slice crates submit configuration units into

pub mod discovery;
pub mod registry;

pub use discovery::{Candidate, ModuleScanner, UnitLoader};
pub use registry::{CONFIG_UNITS, UnitEntry, list_config_units};
