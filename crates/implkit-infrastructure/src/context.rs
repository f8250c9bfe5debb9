//! Lazily built default context
//!
//! A [`ContextHolder`] owns a [`ContextBuilder`] and builds the registry it
//! describes the first time it is needed. The cached registry can be dropped
//! with [`ContextHolder::reset`], after which the next access builds afresh.

use std::sync::Arc;

use implkit_application::{ContextBuilder, PrefixMatcher, Query, Registry};
use implkit_domain::{Base, ImplType, Result};
use once_cell::unsync::OnceCell;
use tracing::debug;

use crate::config::DiscoveryConfig;
use crate::discovery::LinkedUnits;

/// Holder of a lazily built registry
///
/// Not `Sync`: callers that share a holder across threads must provide
/// their own synchronization.
///
/// ```ignore
/// let holder = ContextHolder::from_discovery(&DiscoveryConfig::default());
/// let shape = holder.new_default_instance::<dyn Shape>(&Query::new())?;
/// ```
#[derive(Debug)]
pub struct ContextHolder {
    builder: ContextBuilder,
    context: OnceCell<Registry>,
}

impl ContextHolder {
    /// Hold the context described by `builder`
    pub fn new(builder: ContextBuilder) -> Self {
        Self {
            builder,
            context: OnceCell::new(),
        }
    }

    /// Hold a context built from the linked configuration units
    ///
    /// With discovery disabled the context starts out empty.
    pub fn from_discovery(config: &DiscoveryConfig) -> Self {
        let mut builder = ContextBuilder::new().with_matcher(PrefixMatcher::new(&config.prefix));
        if config.enabled {
            let units = Arc::new(LinkedUnits::new());
            builder = builder.with_discovery(units.clone(), units);
        }
        Self::new(builder)
    }

    /// The builder used on first access
    pub fn builder(&self) -> &ContextBuilder {
        &self.builder
    }

    /// Whether the context has been built
    pub fn is_initialized(&self) -> bool {
        self.context.get().is_some()
    }

    /// The context, built on first access
    ///
    /// A failed build is not cached; the next call tries again.
    pub fn context(&self) -> Result<&Registry> {
        self.context.get_or_try_init(|| {
            debug!("Building default context");
            self.builder.build()
        })
    }

    /// Drop the cached context
    pub fn reset(&mut self) {
        if self.context.take().is_some() {
            debug!("Default context reset");
        }
    }

    /// [`Registry::list_impls`] on the default context
    pub fn list_impls<B: Base + ?Sized>(&self, query: &Query) -> Result<Vec<ImplType>> {
        self.context()?.list_impls::<B>(query)
    }

    /// [`Registry::default_impl`] on the default context
    pub fn default_impl<B: Base + ?Sized>(&self, query: &Query) -> Result<Option<ImplType>> {
        self.context()?.default_impl::<B>(query)
    }

    /// [`Registry::instantiate`] on the default context
    pub fn instantiate<B: Base + ?Sized>(&self, query: &Query) -> Result<Vec<Box<B>>> {
        self.context()?.instantiate::<B>(query)
    }

    /// [`Registry::new_default_instance`] on the default context
    pub fn new_default_instance<B: Base + ?Sized>(&self, query: &Query) -> Result<Option<Box<B>>> {
        self.context()?.new_default_instance::<B>(query)
    }
}
