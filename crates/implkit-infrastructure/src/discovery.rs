//! Link-time unit discovery
//!
//! Exposes the entries collected in [`CONFIG_UNITS`] through the loader's
//! discovery ports, so a context can be built from whatever configuration
//! units were linked into the binary.

use implkit_application::{CONFIG_UNITS, Candidate, ModuleScanner, Unit, UnitEntry, UnitLoader};
use implkit_domain::{BoxError, Result};
use tracing::debug;

/// Scanner and loader over a static set of unit entries
#[derive(Clone, Copy)]
pub struct LinkedUnits {
    entries: &'static [UnitEntry],
}

impl LinkedUnits {
    /// Discover every unit linked into the binary
    pub fn new() -> Self {
        Self::with_entries(&CONFIG_UNITS)
    }

    /// Discover units from an explicit entry table
    pub fn with_entries(entries: &'static [UnitEntry]) -> Self {
        Self { entries }
    }

    /// Number of available entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are available
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LinkedUnits {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LinkedUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| entry.name))
            .finish()
    }
}

impl ModuleScanner for LinkedUnits {
    fn enumerate(&self) -> Result<Vec<Candidate>> {
        // Enumerated in name order; link order is unspecified
        let mut names: Vec<&str> = self.entries.iter().map(|entry| entry.name).collect();
        names.sort_unstable();
        names.dedup();
        debug!("Enumerated {} linked configuration units", names.len());
        Ok(names.into_iter().map(Candidate::new).collect())
    }
}

impl UnitLoader for LinkedUnits {
    fn load(&self, candidate: &Candidate) -> std::result::Result<Unit, BoxError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.name == candidate.name())
            .ok_or_else(|| format!("No configuration unit named '{}'", candidate.name()))?;
        (entry.load)()
    }
}
