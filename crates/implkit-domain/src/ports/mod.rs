//! Domain Port Interfaces
//!
//! Contracts that types opt into to take part in a registry.
//!
//! - [`Base`] marks an abstract base (usually a trait-object type)
//! - [`Implementation`] marks a concrete, constructible type

/// Base and implementation contracts
pub mod base;

pub use base::{Base, Implementation};
