//! Shared test types
//!
//! `Foo` declares an integer priority; `Bar`, `Zap` and `Bang` implement it
//! with priorities 100, 90 and 110. `Plain` declares no priority.

#![allow(dead_code)]

use implkit_domain::{
    Base, BoxError, ConstructorArgs, ImplType, Implementation, PriorityField, impl_type,
};
use serde::Deserialize;

pub trait Foo {
    fn label(&self) -> String;
}

impl Base for dyn Foo {
    const NAME: &'static str = "Foo";
    const PRIORITY: PriorityField = PriorityField::Integer;
}

pub trait Plain {
    fn value(&self) -> i64;
}

impl Base for dyn Plain {
    const NAME: &'static str = "Plain";
}

pub trait Floaty {}

impl Base for dyn Floaty {
    const NAME: &'static str = "Floaty";
    const PRIORITY: PriorityField = PriorityField::Other("float");
}

macro_rules! foo_impl {
    ($name:ident, $priority:expr) => {
        pub struct $name;

        impl Foo for $name {
            fn label(&self) -> String {
                stringify!($name).to_string()
            }
        }

        impl Floaty for $name {}

        impl Implementation for $name {
            const NAME: &'static str = stringify!($name);
            const PRIORITY: Option<i64> = Some($priority);

            fn construct(_args: &ConstructorArgs) -> Result<Self, BoxError> {
                Ok($name)
            }
        }
    };
}

foo_impl!(Bar, 100);
foo_impl!(Zap, 90);
foo_impl!(Bang, 110);

pub fn bar() -> ImplType {
    impl_type!(Bar: dyn Foo, dyn Floaty)
}

pub fn zap() -> ImplType {
    impl_type!(Zap: dyn Foo, dyn Floaty)
}

pub fn bang() -> ImplType {
    impl_type!(Bang: dyn Foo, dyn Floaty)
}

/// Needs a `value` argument
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Valued {
    pub value: i64,
}

impl Plain for Valued {
    fn value(&self) -> i64 {
        self.value
    }
}

impl Implementation for Valued {
    const NAME: &'static str = "Valued";

    fn construct(args: &ConstructorArgs) -> Result<Self, BoxError> {
        Ok(args.deserialize()?)
    }
}

pub fn valued() -> ImplType {
    impl_type!(Valued: dyn Plain)
}

/// Always fails to construct
pub struct Broken;

impl Plain for Broken {
    fn value(&self) -> i64 {
        0
    }
}

impl Implementation for Broken {
    const NAME: &'static str = "Broken";

    fn construct(_args: &ConstructorArgs) -> Result<Self, BoxError> {
        Err("Test error".into())
    }
}

pub fn broken() -> ImplType {
    impl_type!(Broken: dyn Plain)
}

/// Implements no base at all
pub struct Stray;

impl Implementation for Stray {
    const NAME: &'static str = "Stray";

    fn construct(_args: &ConstructorArgs) -> Result<Self, BoxError> {
        Ok(Stray)
    }
}

pub fn stray() -> ImplType {
    impl_type!(Stray)
}

pub fn names(impls: &[ImplType]) -> Vec<&'static str> {
    impls.iter().map(ImplType::name).collect()
}
