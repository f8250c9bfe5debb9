//! Value Objects
//!
//! Runtime descriptors for the types a registry stores, and the argument
//! bag handed to constructors.

/// Keyword-style constructor arguments
pub mod args;
/// Base type descriptors
pub mod descriptor;
/// Implementation type descriptors
pub mod impl_type;

pub use args::ConstructorArgs;
pub use descriptor::{BaseDescriptor, PriorityField};
pub use impl_type::{ImplId, ImplType, ImplTypeBuilder};
