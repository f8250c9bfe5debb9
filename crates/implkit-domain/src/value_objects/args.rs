//! Keyword-style constructor arguments

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Named arguments passed to every constructor of a query
///
/// Implementations usually build themselves with [`ConstructorArgs::deserialize`]:
///
/// ```
/// use implkit_domain::ConstructorArgs;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Circle {
///     radius: f64,
/// }
///
/// let args = ConstructorArgs::new().with("radius", 5.0);
/// let circle: Circle = args.deserialize().unwrap();
/// assert_eq!(circle.radius, 5.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstructorArgs(Map<String, Value>);

impl ConstructorArgs {
    /// Create an empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Set an argument, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Look up an argument
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Remove and return an argument
    pub fn pop(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no arguments are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Deserialize the arguments into a constructor's parameter struct
    pub fn deserialize<T: DeserializeOwned>(&self) -> std::result::Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0.clone()))
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ConstructorArgs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for ConstructorArgs {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(Error::invalid_argument(format!(
                "constructor arguments must be a JSON object, got {other}"
            ))),
        }
    }
}
