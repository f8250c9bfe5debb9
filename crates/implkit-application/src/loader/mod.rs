//! Provider Loader
//!
//! Turns externally discovered configuration units into an initialized
//! [`Registry`](crate::registry::Registry):
//!
//! 1. [`discover_providers`] asks the host's scanner for candidates matching
//!    the configured prefix and resolves each through the unit loader;
//! 2. [`validate_provider`] checks each unit's `priority` and `configure`;
//! 3. [`order_providers`] sorts providers by ascending priority;
//! 4. [`ContextBuilder::build`] applies each provider in that order.
//!
//! Providers written in Rust implement [`ConfigProvider`] directly and skip
//! runtime validation.

/// Context building and discovery
pub mod builder;
/// The provider contract
pub mod provider;
/// Dynamically described configuration units
pub mod unit;
/// Runtime validation of units
pub mod validation;

pub use builder::{
    ContextBuilder, PrefixMatcher, build_context, discover_providers, load_providers,
};
pub use provider::{ConfigProvider, FnProvider, order_providers};
pub use unit::{Procedure, Unit, UnitAttribute};
pub use validation::{UnitProvider, validate_provider};
