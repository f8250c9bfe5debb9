//! Base → implementation table
//!
//! [`Registry`] is the context object configuration providers populate and
//! callers query. Each base owns a set of implementations keyed by Rust type;
//! adding the same type twice leaves one member, whatever its display name.
//! Listings start from the natural order (display name, then type identity),
//! so they are deterministic and independent of registration order; the
//! order callers observe is decided by the [resolution policy](super::policy).

use std::any::TypeId;
use std::collections::HashMap;

use implkit_domain::{Base, BaseDescriptor, Error, ImplId, ImplType, Result};
use tracing::{debug, error, info, warn};

use super::{Query, policy};

#[derive(Debug, Clone)]
struct BaseEntry {
    base: BaseDescriptor,
    impls: HashMap<ImplId, ImplType>,
}

impl BaseEntry {
    fn new(base: BaseDescriptor) -> Self {
        Self {
            base,
            impls: HashMap::new(),
        }
    }
}

/// Registry of implementations per base
///
/// ```
/// use implkit_application::{Query, Registry};
/// use implkit_domain::{impl_type, Base, BoxError, ConstructorArgs, Implementation};
///
/// trait Greeter {
///     fn greet(&self) -> String;
/// }
///
/// impl Base for dyn Greeter {
///     const NAME: &'static str = "Greeter";
/// }
///
/// struct English;
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".to_string()
///     }
/// }
///
/// impl Implementation for English {
///     const NAME: &'static str = "English";
///
///     fn construct(_args: &ConstructorArgs) -> Result<Self, BoxError> {
///         Ok(English)
///     }
/// }
///
/// let mut registry = Registry::new();
/// assert!(registry.register::<dyn Greeter>(&impl_type!(English: dyn Greeter)).unwrap());
///
/// let greeter = registry
///     .new_default_instance::<dyn Greeter>(&Query::new())
///     .unwrap()
///     .unwrap();
/// assert_eq!(greeter.greet(), "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    impls: HashMap<TypeId, BaseEntry>,
}

// Registration
impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `implementation` for the base `B`, checking that it declares `B`
    ///
    /// Returns `true` if newly added, `false` if it was already registered.
    pub fn register<B: Base + ?Sized>(&mut self, implementation: &ImplType) -> Result<bool> {
        self.register_with::<B>(implementation, true)
    }

    /// Register `implementation` for the base `B`
    ///
    /// With `check_type` off the implementation is stored even when it does
    /// not declare `B`; constructing it as `B` later fails with `TypeMismatch`.
    pub fn register_with<B: Base + ?Sized>(
        &mut self,
        implementation: &ImplType,
        check_type: bool,
    ) -> Result<bool> {
        self.insert(BaseDescriptor::of::<B>(), implementation, check_type)
    }

    /// Register every implementation in order
    ///
    /// Returns `true` only if every implementation was newly added. Duplicates
    /// do not stop the batch; a type mismatch does.
    pub fn register_many<B: Base + ?Sized>(
        &mut self,
        impls: &[ImplType],
        check_type: bool,
    ) -> Result<bool> {
        let base = BaseDescriptor::of::<B>();
        debug!(
            count = impls.len(),
            base = base.name(),
            "Registering implementations"
        );

        let mut result = true;
        for implementation in impls {
            result &= self.insert(base, implementation, check_type)?;
        }

        if result {
            info!(
                "Successfully registered all {} implementations for {}",
                impls.len(),
                base
            );
        } else {
            info!("Some implementations for {} were already registered", base);
        }
        Ok(result)
    }

    /// Remove `implementation` from the base `B`
    ///
    /// Returns whether anything was removed.
    pub fn deregister<B: Base + ?Sized>(&mut self, implementation: &ImplType) -> bool {
        let base = BaseDescriptor::of::<B>();
        let Some(entry) = self.impls.get_mut(&base.type_id()) else {
            debug!("No implementations registered for base {}", base);
            return false;
        };

        if entry.impls.remove(&implementation.id()).is_some() {
            info!(
                "Deregistered implementation {} from base {}",
                implementation, base
            );
            true
        } else {
            debug!(
                "Implementation {} not found for base {}",
                implementation, base
            );
            false
        }
    }

    fn insert(
        &mut self,
        base: BaseDescriptor,
        implementation: &ImplType,
        check_type: bool,
    ) -> Result<bool> {
        if check_type && !implementation.implements_base(&base) {
            error!(
                "Type check failed: {} is not an implementation of {}",
                implementation, base
            );
            return Err(Error::type_mismatch(implementation.name(), base.name()));
        }

        let entry = self.impls.entry(base.type_id()).or_insert_with(|| {
            debug!("Created new implementation set for base {}", base);
            BaseEntry::new(base)
        });

        if let Some(stored) = entry.impls.get_mut(&implementation.id()) {
            if !stored.implements_base(&base) && implementation.implements_base(&base) {
                debug!(
                    "Implementation {} already registered for {}, keeping the descriptor that declares it",
                    implementation, base
                );
                *stored = implementation.clone();
            } else {
                debug!(
                    "Implementation {} already registered for {}",
                    implementation, base
                );
            }
            return Ok(false);
        }

        entry
            .impls
            .insert(implementation.id(), implementation.clone());
        info!(
            "Registered implementation {} for base {}",
            implementation, base
        );
        Ok(true)
    }
}

// Inspection
impl Registry {
    /// Whether `implementation` is registered for the base `B`
    pub fn contains<B: Base + ?Sized>(&self, implementation: &ImplType) -> bool {
        self.impls
            .get(&TypeId::of::<B>())
            .is_some_and(|entry| entry.impls.contains_key(&implementation.id()))
    }

    /// Number of implementations registered for the base `B`
    pub fn len_for<B: Base + ?Sized>(&self) -> usize {
        self.impls
            .get(&TypeId::of::<B>())
            .map_or(0, |entry| entry.impls.len())
    }

    /// Bases that currently have at least one implementation
    pub fn bases(&self) -> impl Iterator<Item = BaseDescriptor> + '_ {
        self.impls
            .values()
            .filter(|entry| !entry.impls.is_empty())
            .map(|entry| entry.base)
    }

    /// Whether no base has any implementation
    pub fn is_empty(&self) -> bool {
        self.impls.values().all(|entry| entry.impls.is_empty())
    }
}

// Queries
impl Registry {
    /// All implementations of the base `B`, ordered by the resolution policy
    pub fn list_impls<B: Base + ?Sized>(&self, query: &Query) -> Result<Vec<ImplType>> {
        let base = BaseDescriptor::of::<B>();
        let Some(entry) = self
            .impls
            .get(&base.type_id())
            .filter(|entry| !entry.impls.is_empty())
        else {
            if query.permit_empty() {
                debug!("No implementations found for {} (permitted)", base);
                return Ok(Vec::new());
            }
            warn!("No implementations found for {}", base);
            return Err(Error::no_implementation(base.name()));
        };

        let mut result: Vec<ImplType> = entry.impls.values().cloned().collect();
        result.sort_by(ImplType::natural_cmp);
        debug!("Found {} implementations for {}", result.len(), base);

        policy::resolve(&base, query.sort_key(), query.reverse()).apply(&mut result);
        Ok(result)
    }

    /// The first implementation of [`list_impls`](Self::list_impls)
    pub fn default_impl<B: Base + ?Sized>(&self, query: &Query) -> Result<Option<ImplType>> {
        let default_impl = self.list_impls::<B>(query)?.into_iter().next();
        match &default_impl {
            Some(implementation) => debug!(
                "Selected default implementation {} for {}",
                implementation,
                B::NAME
            ),
            None => debug!("No default implementation available for {}", B::NAME),
        }
        Ok(default_impl)
    }

    /// The implementation of `B` whose display name is `name`
    pub fn find_by_name<B: Base + ?Sized>(&self, name: &str, query: &Query) -> Result<ImplType> {
        self.list_impls::<B>(query)?
            .into_iter()
            .find(|implementation| implementation.name() == name)
            .ok_or_else(|| Error::no_implementation(name))
    }

    /// One instance per listed implementation, in order
    ///
    /// The first constructor failure aborts the batch.
    pub fn instantiate<B: Base + ?Sized>(&self, query: &Query) -> Result<Vec<Box<B>>> {
        let impls = self.list_impls::<B>(query)?;
        debug!(
            "Creating instances for {} implementations of {}",
            impls.len(),
            B::NAME
        );

        impls
            .iter()
            .map(|implementation| Self::construct::<B>(implementation, query))
            .collect()
    }

    /// An instance of the default implementation
    pub fn new_default_instance<B: Base + ?Sized>(&self, query: &Query) -> Result<Option<Box<B>>> {
        match self.list_impls::<B>(query)?.first() {
            Some(implementation) => {
                debug!(
                    "Creating instance of default implementation {} for {}",
                    implementation,
                    B::NAME
                );
                Self::construct::<B>(implementation, query).map(Some)
            }
            None => {
                debug!("No default instance available for {}", B::NAME);
                Ok(None)
            }
        }
    }

    fn construct<B: Base + ?Sized>(implementation: &ImplType, query: &Query) -> Result<Box<B>> {
        implementation
            .construct_as::<B>(query.args())
            .inspect(|_| debug!("Created instance of {}", implementation))
            .inspect_err(|e| error!("Failed to create instance of {}: {}", implementation, e))
    }
}
