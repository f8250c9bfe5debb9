//! Example shapes
//!
//! A `Shape` base with three implementations, registered by two
//! configuration units linked into every binary that uses this crate.

use std::f64::consts::PI;

use implkit_application::ports::registry::{CONFIG_UNITS, UnitEntry};
use implkit_application::Unit;
use implkit_domain::{Base, BoxError, ConstructorArgs, Implementation, impl_type};
use serde::Deserialize;

/// A two dimensional shape
pub trait Shape {
    /// Area of the shape
    fn area(&self) -> f64;
}

impl Base for dyn Shape {
    const NAME: &'static str = "Shape";
}

/// A circle
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Circle {
    /// Radius
    pub radius: f64,
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}

impl Implementation for Circle {
    const NAME: &'static str = "Circle";

    fn construct(args: &ConstructorArgs) -> Result<Self, BoxError> {
        Ok(args.deserialize()?)
    }
}

/// A square
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Square {
    /// Side length
    pub length: f64,
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.length.powi(2)
    }
}

impl Implementation for Square {
    const NAME: &'static str = "Square";

    fn construct(args: &ConstructorArgs) -> Result<Self, BoxError> {
        Ok(args.deserialize()?)
    }
}

/// A rectangle
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rectangle {
    /// Length
    pub length: f64,
    /// Height
    pub height: f64,
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.length * self.height
    }
}

impl Implementation for Rectangle {
    const NAME: &'static str = "Rectangle";

    fn construct(args: &ConstructorArgs) -> Result<Self, BoxError> {
        Ok(args.deserialize()?)
    }
}

fn shapes_unit() -> Result<Unit, BoxError> {
    Ok(Unit::new(SHAPES_UNIT.name)
        .with_priority(100)
        .with_configure(&["context"], |context| {
            context.register_many::<dyn Shape>(
                &[impl_type!(Circle: dyn Shape), impl_type!(Square: dyn Shape)],
                true,
            )?;
            Ok(None)
        }))
}

fn rectangle_unit() -> Result<Unit, BoxError> {
    Ok(Unit::new(RECTANGLE_UNIT.name)
        .with_priority(100)
        .with_configure(&["context"], |context| {
            context.register::<dyn Shape>(&impl_type!(Rectangle: dyn Shape))?;
            Ok(None)
        }))
}

#[linkme::distributed_slice(CONFIG_UNITS)]
static SHAPES_UNIT: UnitEntry = UnitEntry {
    name: "implkit_config_shapes",
    description: "Circle and square shapes",
    load: shapes_unit,
};

#[linkme::distributed_slice(CONFIG_UNITS)]
static RECTANGLE_UNIT: UnitEntry = UnitEntry {
    name: "implkit_config_rectangle",
    description: "Rectangle shape",
    load: rectangle_unit,
};

/// Names of the configuration units this module links in
pub fn unit_names() -> [&'static str; 2] {
    [SHAPES_UNIT.name, RECTANGLE_UNIT.name]
}
