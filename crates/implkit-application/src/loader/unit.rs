//! Dynamically described configuration units
//!
//! A [`Unit`] is what a unit loader hands back for a discovered candidate:
//! a name and a bag of attributes whose shape is only known at runtime.
//! Nothing about a unit is trusted until
//! [`validate_provider`](super::validate_provider) has checked it.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use implkit_domain::Result;
use serde_json::Value;

use crate::registry::Registry;

type ProcedureBody = dyn Fn(&mut Registry) -> Result<Option<Value>> + Send + Sync;

/// A callable attribute with a declared parameter list
#[derive(Clone)]
pub struct Procedure {
    parameters: Vec<String>,
    body: Arc<ProcedureBody>,
}

impl Procedure {
    /// Create a procedure from its parameter names and body
    pub fn new<F>(parameters: &[&str], body: F) -> Self
    where
        F: Fn(&mut Registry) -> Result<Option<Value>> + Send + Sync + 'static,
    {
        Self {
            parameters: parameters.iter().map(|p| (*p).to_string()).collect(),
            body: Arc::new(body),
        }
    }

    /// Declared parameter names
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Invoke the procedure with a context
    pub fn call(&self, context: &mut Registry) -> Result<Option<Value>> {
        (self.body)(context)
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Procedure")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Value of a unit attribute
#[derive(Debug, Clone)]
pub enum UnitAttribute {
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Callable value
    Procedure(Procedure),
}

impl UnitAttribute {
    /// Short name of the attribute's kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "str",
            Self::Bool(_) => "bool",
            Self::Procedure(_) => "procedure",
        }
    }
}

/// A loaded but unvalidated configuration unit
///
/// ```
/// use implkit_application::Unit;
///
/// let unit = Unit::new("implkit_config_demo")
///     .with_priority(100)
///     .with_configure(&["context"], |_context| Ok(None));
/// assert_eq!(unit.name(), "implkit_config_demo");
/// ```
#[derive(Debug, Clone)]
pub struct Unit {
    name: String,
    attributes: BTreeMap<String, UnitAttribute>,
}

impl Unit {
    /// Create a unit with no attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: UnitAttribute) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Set an integer `priority` attribute
    pub fn with_priority(self, priority: i64) -> Self {
        self.with_attribute(
            implkit_domain::constants::PRIORITY_ATTRIBUTE,
            UnitAttribute::Integer(priority),
        )
    }

    /// Set the `configure` procedure
    pub fn with_configure<F>(self, parameters: &[&str], body: F) -> Self
    where
        F: Fn(&mut Registry) -> Result<Option<Value>> + Send + Sync + 'static,
    {
        self.with_attribute(
            implkit_domain::constants::CONFIGURE_ATTRIBUTE,
            UnitAttribute::Procedure(Procedure::new(parameters, body)),
        )
    }

    /// Unit name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute
    pub fn attribute(&self, name: &str) -> Option<&UnitAttribute> {
        self.attributes.get(name)
    }
}
