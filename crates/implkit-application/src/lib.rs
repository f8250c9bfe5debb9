//! Application Layer - implkit
//!
//! The registration/resolution engine and the provider loader that
//! populates it.
//!
//! ## Architecture
//!
//! ```text
//! ModuleScanner ──► UnitLoader ──► validate_provider ──► order_providers
//!                                                              │
//!                                                              ▼
//!                              Registry ◄── ConfigProvider::configure
//!                                 │
//!                                 ▼
//!            list_impls / default_impl / instantiate / new_default_instance
//!                                 │
//!                                 ▼
//!                          Resolution Policy
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: the base → implementations table and its query surface
//! - [`loader`]: provider validation, ordering and context building
//! - [`ports`]: discovery collaborators and the link-time unit slice
//!
//! ## Dependencies
//!
//! This crate depends only on `implkit-domain` and pure Rust libraries.

pub mod loader;
pub mod ports;
pub mod registry;

pub use loader::{
    ConfigProvider, ContextBuilder, FnProvider, PrefixMatcher, Procedure, Unit, UnitAttribute,
    UnitProvider, build_context, discover_providers, load_providers, order_providers,
    validate_provider,
};
pub use ports::{CONFIG_UNITS, Candidate, ModuleScanner, UnitEntry, UnitLoader};
pub use registry::{Query, Registry, Resolution, SortKey, Strategy};
