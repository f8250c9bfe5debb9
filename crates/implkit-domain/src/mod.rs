//! # implkit Domain Layer
//!
//! Core contracts and types shared by every other implkit crate.
//!
//! ## Organization
//!
//! - [`error`] - Error taxonomy and `Result` alias
//! - [`ports`] - The `Base` and `Implementation` contracts types opt into
//! - [`value_objects`] - Runtime descriptors for bases and implementations
//! - [`constants`] - Naming conventions shared by the loader and the CLI
//!
//! ## Example
//!
//! ```
//! use implkit_domain::{impl_type, Base, BoxError, ConstructorArgs, Implementation};
//!
//! trait Greeter {
//!     fn greet(&self) -> String;
//! }
//!
//! impl Base for dyn Greeter {
//!     const NAME: &'static str = "Greeter";
//! }
//!
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! impl Implementation for English {
//!     const NAME: &'static str = "English";
//!
//!     fn construct(_args: &ConstructorArgs) -> Result<Self, BoxError> {
//!         Ok(English)
//!     }
//! }
//!
//! let english = impl_type!(English: dyn Greeter);
//! let greeter = english
//!     .construct_as::<dyn Greeter>(&ConstructorArgs::new())
//!     .unwrap();
//! assert_eq!(greeter.greet(), "hello");
//! ```

/// Shared constants
pub mod constants;
/// Error taxonomy
pub mod error;
/// Contracts implemented by bases and implementations
pub mod ports;
/// Runtime type descriptors and constructor arguments
pub mod value_objects;

pub use error::{BoxError, Error, Result};
pub use ports::{Base, Implementation};
pub use value_objects::{BaseDescriptor, ConstructorArgs, ImplId, ImplType, PriorityField};
