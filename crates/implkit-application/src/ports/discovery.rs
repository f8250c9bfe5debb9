//! Discovery ports
//!
//! The host application decides where configuration units come from. The
//! loader only needs something that can list candidate names and something
//! that can turn one candidate into a [`Unit`].

use implkit_domain::{BoxError, Result};

use crate::loader::Unit;

/// A discoverable unit name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    name: String,
}

impl Candidate {
    /// Create a candidate
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Candidate name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Enumerates candidate units
pub trait ModuleScanner: Send + Sync {
    /// List every candidate the host knows about
    fn enumerate(&self) -> Result<Vec<Candidate>>;
}

/// Resolves a candidate into a live unit
pub trait UnitLoader: Send + Sync {
    /// Load the unit named by `candidate`
    fn load(&self, candidate: &Candidate) -> std::result::Result<Unit, BoxError>;
}
