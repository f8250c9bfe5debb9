//! Implementation type descriptors
//!
//! An [`ImplType`] is the runtime handle a registry stores for a concrete type.
//! Besides the type's identity it records every base the type declares it
//! implements, together with a type-erased constructor that produces a
//! `Box<B>` for that base. The declared bases drive the registry's subtype
//! check; the constructors drive instantiation.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::{BoxError, Error, Result};
use crate::ports::{Base, Implementation};
use crate::value_objects::{BaseDescriptor, ConstructorArgs};

/// Identity of an implementation type
///
/// Two ids are equal when they name the same Rust type, whatever display
/// name each descriptor carries. [`ImplId::natural_cmp`] orders by display
/// name first, then by type identity.
#[derive(Debug, Clone, Copy)]
pub struct ImplId {
    name: &'static str,
    type_id: TypeId,
}

impl ImplId {
    /// Display name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type identity
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Deterministic natural order, independent of registration order
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(other.name)
            .then_with(|| self.type_id.cmp(&other.type_id))
    }
}

impl PartialEq for ImplId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ImplId {}

impl Hash for ImplId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

struct Upcast<B: ?Sized + 'static> {
    construct: Box<dyn Fn(&ConstructorArgs) -> std::result::Result<Box<B>, BoxError> + Send + Sync>,
}

struct Inner {
    id: ImplId,
    priority: Option<i64>,
    upcasts: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    bases: Vec<&'static str>,
}

/// Runtime handle for an implementation type
///
/// Cheap to clone. Build one with [`ImplType::builder`] or the
/// [`impl_type!`](crate::impl_type) macro.
#[derive(Clone)]
pub struct ImplType {
    inner: Arc<Inner>,
}

impl ImplType {
    /// Start describing the implementation `I`
    pub fn builder<I: Implementation>() -> ImplTypeBuilder<I> {
        ImplTypeBuilder {
            name: I::NAME,
            priority: I::PRIORITY,
            upcasts: HashMap::new(),
            bases: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Identity of the implementation
    pub fn id(&self) -> ImplId {
        self.inner.id
    }

    /// Display name of the implementation
    pub fn name(&self) -> &'static str {
        self.inner.id.name
    }

    /// Type identity of the implementation
    pub fn type_id(&self) -> TypeId {
        self.inner.id.type_id
    }

    /// Declared priority, if any
    pub fn priority(&self) -> Option<i64> {
        self.inner.priority
    }

    /// Names of the bases this implementation declares
    pub fn base_names(&self) -> &[&'static str] {
        &self.inner.bases
    }

    /// Natural order: display name, then type identity
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.inner.id.natural_cmp(&other.inner.id)
    }

    /// Whether this implementation declares the base `B`
    pub fn implements<B: Base + ?Sized>(&self) -> bool {
        self.inner.upcasts.contains_key(&TypeId::of::<B>())
    }

    /// Whether this implementation declares the described base
    pub fn implements_base(&self, base: &BaseDescriptor) -> bool {
        self.inner.upcasts.contains_key(&base.type_id())
    }

    /// Construct an instance and hand it out as the base `B`
    ///
    /// Fails with `TypeMismatch` when `B` is not a declared base, and with
    /// `ConstructionFailure` (carrying the constructor's error) when the
    /// constructor itself fails.
    pub fn construct_as<B: Base + ?Sized>(&self, args: &ConstructorArgs) -> Result<Box<B>> {
        let upcast = self
            .inner
            .upcasts
            .get(&TypeId::of::<B>())
            .and_then(|erased| (**erased).downcast_ref::<Upcast<B>>())
            .ok_or_else(|| Error::type_mismatch(self.name(), B::NAME))?;

        (upcast.construct)(args).map_err(|source| Error::construction(self.name(), source))
    }
}

impl PartialEq for ImplType {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for ImplType {}

impl Hash for ImplType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for ImplType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplType")
            .field("name", &self.name())
            .field("priority", &self.priority())
            .field("bases", &self.base_names())
            .finish()
    }
}

impl fmt::Display for ImplType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builder for [`ImplType`]
pub struct ImplTypeBuilder<I> {
    name: &'static str,
    priority: Option<i64>,
    upcasts: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    bases: Vec<&'static str>,
    _marker: PhantomData<fn() -> I>,
}

impl<I: Implementation> ImplTypeBuilder<I> {
    /// Declare that `I` implements the base `B`
    ///
    /// `upcast` turns a constructed `I` into a `Box<B>`; for trait-object
    /// bases it is simply `|value| -> Box<dyn Trait> { Box::new(value) }`.
    pub fn implements<B: Base + ?Sized>(mut self, upcast: fn(I) -> Box<B>) -> Self {
        let construct = move |args: &ConstructorArgs| I::construct(args).map(upcast);
        let erased: Arc<dyn Any + Send + Sync> = Arc::new(Upcast::<B> {
            construct: Box::new(construct),
        });
        self.upcasts.insert(TypeId::of::<B>(), erased);
        if !self.bases.contains(&B::NAME) {
            self.bases.push(B::NAME);
        }
        self
    }

    /// Override the declared priority
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Override the display name
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Finish the descriptor
    pub fn build(self) -> ImplType {
        ImplType {
            inner: Arc::new(Inner {
                id: ImplId {
                    name: self.name,
                    type_id: TypeId::of::<I>(),
                },
                priority: self.priority,
                upcasts: self.upcasts,
                bases: self.bases,
            }),
        }
    }
}

/// Describe an implementation type and the bases it implements
///
/// ```ignore
/// let circle = impl_type!(Circle: dyn Shape);
/// let plain = impl_type!(Marker);
/// ```
#[macro_export]
macro_rules! impl_type {
    ($implementation:ty $(: $($base:ty),+ $(,)?)?) => {
        $crate::value_objects::ImplType::builder::<$implementation>()
            $($(
                .implements::<$base>(
                    |value: $implementation| -> ::std::boxed::Box<$base> {
                        ::std::boxed::Box::new(value)
                    },
                )
            )+)?
            .build()
    };
}
