//! Context building and discovery

use std::fmt;
use std::sync::Arc;

use implkit_domain::constants::DEFAULT_CONFIG_PREFIX;
use implkit_domain::{Error, Result};
use tracing::{debug, error, info};

use super::{ConfigProvider, Unit, order_providers, validate_provider};
use crate::ports::{ModuleScanner, UnitLoader};
use crate::registry::Registry;

/// Candidate name filter used during discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatcher {
    prefix: String,
}

impl PrefixMatcher {
    /// Match candidates whose name starts with `prefix`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether `name` is a configuration unit name
    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.prefix)
    }
}

impl Default for PrefixMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_PREFIX)
    }
}

/// Enumerate matching candidates and load each into a unit
///
/// A candidate the loader cannot resolve fails the whole discovery with
/// `LoadFailure`.
pub fn discover_providers(
    scanner: &dyn ModuleScanner,
    loader: &dyn UnitLoader,
    matcher: &PrefixMatcher,
) -> Result<Vec<Unit>> {
    debug!(
        "Discovering configuration units with prefix '{}'",
        matcher.prefix()
    );

    let mut units = Vec::new();
    for candidate in scanner
        .enumerate()?
        .into_iter()
        .filter(|candidate| matcher.matches(candidate.name()))
    {
        debug!("Loading configuration unit '{}'", candidate.name());
        let unit = loader.load(&candidate).map_err(|source| {
            error!("Failed to load unit '{}': {}", candidate.name(), source);
            Error::load_failure(candidate.name(), source)
        })?;
        units.push(unit);
    }

    info!("Discovered {} configuration units", units.len());
    Ok(units)
}

/// Discover, validate and order providers
pub fn load_providers(
    scanner: &dyn ModuleScanner,
    loader: &dyn UnitLoader,
    matcher: &PrefixMatcher,
) -> Result<Vec<Arc<dyn ConfigProvider>>> {
    let providers = discover_providers(scanner, loader, matcher)?
        .iter()
        .map(|unit| {
            validate_provider(unit).map(|provider| Arc::new(provider) as Arc<dyn ConfigProvider>)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(order_providers(providers))
}

/// Build a context from discovered providers only
pub fn build_context(
    scanner: Arc<dyn ModuleScanner>,
    loader: Arc<dyn UnitLoader>,
    matcher: PrefixMatcher,
) -> Result<Registry> {
    ContextBuilder::new()
        .with_discovery(scanner, loader)
        .with_matcher(matcher)
        .build()
}

#[derive(Clone)]
struct Discovery {
    scanner: Arc<dyn ModuleScanner>,
    loader: Arc<dyn UnitLoader>,
}

/// Assembles a [`Registry`] from explicit and discovered providers
///
/// ```
/// use implkit_application::{ContextBuilder, FnProvider};
///
/// let context = ContextBuilder::new()
///     .with_provider(FnProvider::new("empty", 0, |_context| Ok(())))
///     .build()
///     .unwrap();
/// assert!(context.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct ContextBuilder {
    providers: Vec<Arc<dyn ConfigProvider>>,
    discovery: Option<Discovery>,
    matcher: PrefixMatcher,
}

impl ContextBuilder {
    /// Create a builder with no providers and no discovery
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an explicit provider
    pub fn with_provider<P: ConfigProvider + 'static>(self, provider: P) -> Self {
        self.with_shared_provider(Arc::new(provider))
    }

    /// Add an explicit shared provider
    pub fn with_shared_provider(mut self, provider: Arc<dyn ConfigProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Discover units through `scanner` and `loader`
    pub fn with_discovery(
        mut self,
        scanner: Arc<dyn ModuleScanner>,
        loader: Arc<dyn UnitLoader>,
    ) -> Self {
        self.discovery = Some(Discovery { scanner, loader });
        self
    }

    /// Set the candidate name filter
    pub fn with_matcher(mut self, matcher: PrefixMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// The candidate name filter
    pub fn matcher(&self) -> &PrefixMatcher {
        &self.matcher
    }

    /// All providers in application order
    ///
    /// Explicit providers precede discovered ones among equal priorities.
    pub fn providers(&self) -> Result<Vec<Arc<dyn ConfigProvider>>> {
        let mut providers = self.providers.clone();
        if let Some(discovery) = &self.discovery {
            providers.extend(load_providers(
                &*discovery.scanner,
                &*discovery.loader,
                &self.matcher,
            )?);
        }
        Ok(order_providers(providers))
    }

    /// Create a registry and apply every provider to it
    ///
    /// The first provider failure aborts the build.
    pub fn build(&self) -> Result<Registry> {
        info!(
            "Creating new context with prefix '{}'",
            self.matcher.prefix()
        );
        let mut context = Registry::new();

        let providers = self.providers()?;
        debug!("Configuring context with {} providers", providers.len());

        for provider in &providers {
            debug!(
                "Configuring context with provider '{}' (priority: {})",
                provider.name(),
                provider.priority()
            );
            provider.configure(&mut context).inspect_err(|e| {
                error!(
                    "Error configuring context with provider '{}': {}",
                    provider.name(),
                    e
                );
            })?;
        }

        info!(
            "Successfully initialized context with {} providers",
            providers.len()
        );
        Ok(context)
    }
}

impl fmt::Debug for ContextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextBuilder")
            .field(
                "providers",
                &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("discovery", &self.discovery.is_some())
            .field("matcher", &self.matcher)
            .finish()
    }
}
