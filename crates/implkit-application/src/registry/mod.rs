//! Registry
//!
//! The in-memory table mapping each base to its set of implementations,
//! plus the query options and resolution policy used to read it back.

/// Base → implementation table
pub mod context;
/// Sort-key derivation
pub mod policy;
/// Query options
pub mod query;

pub use context::Registry;
pub use policy::{Resolution, Strategy, resolve};
pub use query::{Query, SortKey};
