//! Query options
//!
//! Every read operation on a [`Registry`](super::Registry) takes a [`Query`]:
//! an optional explicit sort key, a reverse flag, an empty-result opt-in and
//! the constructor arguments used by the instantiating operations.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use implkit_domain::{ConstructorArgs, ImplType};

/// Explicit ordering over implementations
#[derive(Clone)]
pub struct SortKey {
    compare: Arc<dyn Fn(&ImplType, &ImplType) -> Ordering + Send + Sync>,
}

impl SortKey {
    /// Order by a key extracted from each implementation
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&ImplType) -> K + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(move |a: &ImplType, b: &ImplType| key(a).cmp(&key(b))),
        }
    }

    /// Order with a full comparator
    pub fn by<F>(compare: F) -> Self
    where
        F: Fn(&ImplType, &ImplType) -> Ordering + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(compare),
        }
    }

    /// Order by declared priority, ascending; undeclared priorities first
    pub fn priority() -> Self {
        Self::by_key(ImplType::priority)
    }

    /// Order by display name, ascending
    pub fn name() -> Self {
        Self::by_key(ImplType::name)
    }

    /// Compare two implementations
    pub fn compare(&self, a: &ImplType, b: &ImplType) -> Ordering {
        (self.compare)(a, b)
    }
}

impl fmt::Debug for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SortKey(..)")
    }
}

/// Options shared by all registry queries
///
/// ```
/// use implkit_application::{Query, SortKey};
/// use implkit_domain::ConstructorArgs;
///
/// let query = Query::new()
///     .with_sort_key(SortKey::priority())
///     .with_permit_empty(true)
///     .with_args(ConstructorArgs::new().with("radius", 5.0));
/// assert!(query.permit_empty());
/// assert!(!query.reverse());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    sort_key: Option<SortKey>,
    reverse: bool,
    permit_empty: bool,
    args: ConstructorArgs,
}

impl Query {
    /// Default query: no explicit key, not reversed, empty results rejected
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit sort key
    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = Some(sort_key);
        self
    }

    /// Set the reverse flag
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Allow empty results instead of failing with `NoImplementation`
    pub fn with_permit_empty(mut self, permit_empty: bool) -> Self {
        self.permit_empty = permit_empty;
        self
    }

    /// Set the constructor arguments
    pub fn with_args(mut self, args: ConstructorArgs) -> Self {
        self.args = args;
        self
    }

    /// Explicit sort key, if any
    pub fn sort_key(&self) -> Option<&SortKey> {
        self.sort_key.as_ref()
    }

    /// Reverse flag as requested by the caller
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Whether empty results are permitted
    pub fn permit_empty(&self) -> bool {
        self.permit_empty
    }

    /// Constructor arguments
    pub fn args(&self) -> &ConstructorArgs {
        &self.args
    }
}
