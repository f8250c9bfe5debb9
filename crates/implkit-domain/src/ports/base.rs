//! Base and implementation contracts
//!
//! A base is any `'static` type, typically `dyn Trait`, that implements [`Base`].
//! An implementation is a sized type that implements [`Implementation`] and is
//! connected to the bases it satisfies through an [`ImplType`] descriptor.
//!
//! [`ImplType`]: crate::value_objects::ImplType

use crate::error::BoxError;
use crate::value_objects::{ConstructorArgs, PriorityField};

/// An abstract base that implementations can be registered against
///
/// Bases opt into priority ordering by declaring an integer priority field:
///
/// ```
/// use implkit_domain::{Base, PriorityField};
///
/// trait Codec {}
///
/// impl Base for dyn Codec {
///     const NAME: &'static str = "Codec";
///     const PRIORITY: PriorityField = PriorityField::Integer;
/// }
/// ```
pub trait Base: 'static {
    /// Display name of the base
    const NAME: &'static str;

    /// Declared kind of the base's `priority` field
    ///
    /// Only [`PriorityField::Integer`] enables descending priority ordering
    /// when a query supplies no explicit sort key.
    const PRIORITY: PriorityField = PriorityField::Undeclared;
}

/// A concrete type that a registry can construct on demand
pub trait Implementation: Sized + 'static {
    /// Display name of the implementation
    const NAME: &'static str;

    /// Declared priority, read by priority-ordered bases
    const PRIORITY: Option<i64> = None;

    /// Build an instance from keyword-style constructor arguments
    fn construct(args: &ConstructorArgs) -> Result<Self, BoxError>;
}
