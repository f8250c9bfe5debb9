//! Shape model and linked unit tests

use implkit::application::ports::list_config_units;
use implkit::infrastructure::{ContextHolder, DiscoveryConfig};
use implkit::shapes::{self, Circle, Rectangle, Shape, Square};
use implkit::{ConstructorArgs, Error, Query, Registry, impl_type};

fn discovered() -> ContextHolder {
    assert_eq!(
        shapes::unit_names(),
        ["implkit_config_shapes", "implkit_config_rectangle"]
    );
    ContextHolder::from_discovery(&DiscoveryConfig::default())
}

#[test]
fn test_areas() {
    assert_eq!(Circle { radius: 5.0 }.area(), 78.53981633974483);
    assert_eq!(Square { length: 3.0 }.area(), 9.0);
    assert_eq!(
        Rectangle {
            length: 2.0,
            height: 4.5
        }
        .area(),
        9.0
    );
}

#[test]
fn test_linked_units_register_every_shape() {
    let holder = discovered();

    let impls = holder.list_impls::<dyn Shape>(&Query::new()).unwrap();
    let names: Vec<&str> = impls.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["Circle", "Rectangle", "Square"]);
}

#[test]
fn test_units_are_listed_with_descriptions() {
    let listed = list_config_units();

    for name in shapes::unit_names() {
        assert!(listed.iter().any(|(unit, _)| *unit == name));
    }
    assert!(listed.contains(&("implkit_config_rectangle", "Rectangle shape")));
}

#[test]
fn test_default_shape_needs_arguments() {
    let holder = discovered();

    let default_impl = holder
        .default_impl::<dyn Shape>(&Query::new())
        .unwrap()
        .expect("a default shape");
    assert_eq!(default_impl.name(), "Circle");

    match holder.new_default_instance::<dyn Shape>(&Query::new()) {
        Err(Error::ConstructionFailure {
            implementation,
            source,
        }) => {
            assert_eq!(implementation, "Circle");
            assert!(source.to_string().contains("radius"));
        }
        Err(other) => panic!("Expected ConstructionFailure, got {other:?}"),
        Ok(_) => panic!("Expected ConstructionFailure, got an instance"),
    }
}

#[test]
fn test_default_shape_with_arguments() {
    let holder = discovered();

    let query = Query::new().with_args(ConstructorArgs::new().with("radius", 5.0));
    let circle = holder
        .new_default_instance::<dyn Shape>(&query)
        .unwrap()
        .expect("a default shape");
    assert_eq!(circle.area(), 78.53981633974483);
}

#[test]
fn test_instantiate_without_arguments_fails() {
    let mut registry = Registry::new();
    registry
        .register_many::<dyn Shape>(
            &[impl_type!(Circle: dyn Shape), impl_type!(Square: dyn Shape)],
            true,
        )
        .unwrap();

    let result = registry.instantiate::<dyn Shape>(&Query::new());
    assert!(matches!(result, Err(Error::ConstructionFailure { .. })));

    let circle = impl_type!(Circle: dyn Shape)
        .construct_as::<dyn Shape>(&ConstructorArgs::new().with("radius", 5.0))
        .unwrap();
    assert_eq!(circle.area(), 78.53981633974483);
}

#[test]
fn test_unknown_fields_are_rejected() {
    let mut registry = Registry::new();
    registry
        .register::<dyn Shape>(&impl_type!(Square: dyn Shape))
        .unwrap();

    let args = ConstructorArgs::new().with("length", 2.0).with("height", 3.0);
    let result = registry.instantiate::<dyn Shape>(&Query::new().with_args(args));
    assert!(matches!(result, Err(Error::ConstructionFailure { .. })));
}
