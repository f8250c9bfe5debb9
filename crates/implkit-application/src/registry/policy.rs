//! Resolution Policy
//!
//! Derives the effective ordering for a query from the base's declarations
//! and the caller's options:
//!
//! 1. an explicit [`SortKey`] wins, and the reverse flag applies as given;
//! 2. otherwise a base declaring an integer priority field is ordered by
//!    implementation priority, highest first (reverse is forced);
//! 3. otherwise the registry's natural order is kept untouched.
//!
//! Sorting is stable, so implementations with equal keys keep their natural
//! relative order in both directions.

use implkit_domain::{BaseDescriptor, ImplType};
use tracing::debug;

use super::SortKey;

/// Which rule produced a [`Resolution`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Caller-supplied sort key
    Explicit,
    /// Declared integer priority, descending
    Priority,
    /// Natural registry order
    Natural,
}

/// Effective ordering for one query
#[derive(Debug, Clone)]
pub struct Resolution {
    strategy: Strategy,
    sort_key: Option<SortKey>,
    reverse: bool,
}

/// Derive the ordering for `base`
pub fn resolve(base: &BaseDescriptor, sort_key: Option<&SortKey>, reverse: bool) -> Resolution {
    if let Some(sort_key) = sort_key {
        return Resolution {
            strategy: Strategy::Explicit,
            sort_key: Some(sort_key.clone()),
            reverse,
        };
    }

    if base.priority_field().is_integer() {
        debug!(base = base.name(), "Using priority-based sorting");
        return Resolution {
            strategy: Strategy::Priority,
            sort_key: Some(SortKey::priority()),
            reverse: true,
        };
    }

    Resolution {
        strategy: Strategy::Natural,
        sort_key: None,
        reverse,
    }
}

impl Resolution {
    /// Rule that produced this resolution
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Effective reverse flag (forced on for priority ordering)
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Order `impls` in place
    pub fn apply(&self, impls: &mut [ImplType]) {
        let Some(sort_key) = &self.sort_key else {
            return;
        };
        if self.reverse {
            impls.sort_by(|a, b| sort_key.compare(b, a));
        } else {
            impls.sort_by(|a, b| sort_key.compare(a, b));
        }
        debug!(count = impls.len(), "Sorted implementations");
    }
}
