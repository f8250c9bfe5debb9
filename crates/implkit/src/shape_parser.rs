//! Turning JSON shape descriptions into shapes
//!
//! A shape description is a JSON object whose `type` field names a
//! registered `dyn Shape` implementation; the remaining fields are the
//! constructor arguments.

use std::path::Path;

use implkit_application::{Query, Registry};
use implkit_domain::constants::TYPE_FIELD;
use implkit_domain::{ConstructorArgs, Error, Result};
use implkit_infrastructure::ErrorContext;
use serde_json::Value;
use tracing::debug;

use crate::shapes::Shape;

/// Build the shape a description names
///
/// Fails with `NoImplementation` when no registered shape carries the
/// requested name, and with `ConstructionFailure` when the remaining fields
/// do not fit its constructor.
pub fn parse_shape(context: &Registry, description: Value) -> Result<Box<dyn Shape>> {
    let mut args = ConstructorArgs::try_from(description)?;
    let shape_type = match args.pop(TYPE_FIELD) {
        Some(Value::String(shape_type)) => shape_type,
        Some(other) => {
            return Err(Error::invalid_argument(format!(
                "shape '{}' must be a string, got {}",
                TYPE_FIELD, other
            )));
        }
        None => {
            return Err(Error::invalid_argument(format!(
                "shape description has no '{}' field",
                TYPE_FIELD
            )));
        }
    };

    debug!("Parsing shape of type '{}'", shape_type);
    let implementation = context.find_by_name::<dyn Shape>(&shape_type, &Query::new())?;
    implementation.construct_as::<dyn Shape>(&args)
}

/// Area of every shape in a JSON array of descriptions, in input order
pub fn shape_areas(context: &Registry, descriptions: Value) -> Result<Vec<f64>> {
    let Value::Array(descriptions) = descriptions else {
        return Err(Error::invalid_argument(
            "shape input must be a JSON array of shape objects",
        ));
    };

    descriptions
        .into_iter()
        .map(|description| parse_shape(context, description).map(|shape| shape.area()))
        .collect()
}

/// Read a JSON array of shape descriptions from a file
pub fn read_shapes(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .io_context(format!("Failed to read shape input: {}", path.display()))?;
    Ok(serde_json::from_str(&content)?)
}
