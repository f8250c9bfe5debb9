//! The provider contract

use std::fmt;
use std::sync::Arc;

use implkit_domain::Result;
use tracing::debug;

use crate::registry::Registry;

/// A configuration provider: a priority and a procedure that populates a registry
///
/// Lower priorities are applied first.
pub trait ConfigProvider: Send + Sync {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// Application priority
    fn priority(&self) -> i64;

    /// Register implementations into `context`
    fn configure(&self, context: &mut Registry) -> Result<()>;
}

/// A provider backed by a plain function
///
/// ```
/// use implkit_application::{ConfigProvider, FnProvider, Registry};
///
/// let provider = FnProvider::new("noop", 10, |_context| Ok(()));
/// assert_eq!(provider.priority(), 10);
/// provider.configure(&mut Registry::new()).unwrap();
/// ```
#[derive(Clone, Copy)]
pub struct FnProvider {
    name: &'static str,
    priority: i64,
    configure: fn(&mut Registry) -> Result<()>,
}

impl FnProvider {
    /// Create a provider
    pub fn new(name: &'static str, priority: i64, configure: fn(&mut Registry) -> Result<()>) -> Self {
        Self {
            name,
            priority,
            configure,
        }
    }
}

impl fmt::Debug for FnProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProvider")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl ConfigProvider for FnProvider {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> i64 {
        self.priority
    }

    fn configure(&self, context: &mut Registry) -> Result<()> {
        (self.configure)(context)
    }
}

/// Sort providers by ascending priority, keeping discovery order for ties
pub fn order_providers(mut providers: Vec<Arc<dyn ConfigProvider>>) -> Vec<Arc<dyn ConfigProvider>> {
    providers.sort_by_key(|provider| provider.priority());
    debug!("Sorted {} configuration providers by priority", providers.len());
    providers
}
