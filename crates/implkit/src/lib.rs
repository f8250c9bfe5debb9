//! # implkit
//!
//! A runtime registry that maps abstract bases to the concrete types
//! implementing them, populated by prioritized configuration units.
//!
//! ## Example
//!
//! ```
//! use implkit::shapes::{Circle, Shape};
//! use implkit::{ConstructorArgs, Query, Registry, impl_type};
//!
//! let mut registry = Registry::new();
//! registry.register::<dyn Shape>(&impl_type!(Circle: dyn Shape)).unwrap();
//!
//! let query = Query::new().with_args(ConstructorArgs::new().with("radius", 5.0));
//! let circle = registry
//!     .new_default_instance::<dyn Shape>(&query)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(circle.area(), 78.53981633974483);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Base/implementation contracts, descriptors and errors
//! - `application` - Registry, resolution policy and provider loader
//! - `infrastructure` - Configuration, logging, discovery and the default context
//! - [`shapes`] / [`shape_parser`] - A worked example driving the `shape-areas` binary

/// Domain layer - contracts, descriptors and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use implkit_domain::*;
}

/// Application layer - registry and provider loader
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use implkit_application::*;
}

/// Infrastructure layer - config, logging and the default context
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use implkit_infrastructure::*;
}

pub mod shape_parser;
pub mod shapes;

// Re-export commonly used types at the crate root
pub use domain::*;

pub use application::{ConfigProvider, ContextBuilder, FnProvider, Query, Registry, SortKey, Unit};
pub use infrastructure::{AppConfig, ConfigLoader, ContextHolder};
