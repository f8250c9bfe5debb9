//! Base type descriptors

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ports::Base;

/// Declared kind of a base's `priority` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityField {
    /// The base declares no priority field
    #[default]
    Undeclared,
    /// The base declares an integer priority field
    Integer,
    /// The base declares a priority field of some other type (named here)
    Other(&'static str),
}

impl PriorityField {
    /// Whether the declared field is exactly an integer
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer)
    }
}

/// Runtime handle for a base type
///
/// Two descriptors are equal exactly when they describe the same Rust type.
#[derive(Debug, Clone, Copy)]
pub struct BaseDescriptor {
    type_id: TypeId,
    name: &'static str,
    priority: PriorityField,
}

impl BaseDescriptor {
    /// Describe the base `B`
    pub fn of<B: Base + ?Sized>() -> Self {
        Self {
            type_id: TypeId::of::<B>(),
            name: B::NAME,
            priority: B::PRIORITY,
        }
    }

    /// Type identity of the base
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Display name of the base
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared kind of the base's priority field
    pub fn priority_field(&self) -> PriorityField {
        self.priority
    }
}

impl PartialEq for BaseDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for BaseDescriptor {}

impl Hash for BaseDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Display for BaseDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
