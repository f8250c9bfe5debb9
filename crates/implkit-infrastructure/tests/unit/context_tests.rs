//! Default context holder tests

use std::sync::atomic::{AtomicUsize, Ordering};

use implkit_application::{ContextBuilder, FnProvider, Query, Registry};
use implkit_domain::{
    Base, BoxError, ConstructorArgs, Error, Implementation, PriorityField, impl_type,
};
use implkit_infrastructure::{ContextHolder, DiscoveryConfig};

trait Greeter {
    fn greet(&self) -> String;
}

impl Base for dyn Greeter {
    const NAME: &'static str = "Greeter";
    const PRIORITY: PriorityField = PriorityField::Integer;
}

struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

impl Implementation for English {
    const NAME: &'static str = "English";
    const PRIORITY: Option<i64> = Some(10);

    fn construct(_args: &ConstructorArgs) -> Result<Self, BoxError> {
        Ok(English)
    }
}

struct French;

impl Greeter for French {
    fn greet(&self) -> String {
        "bonjour".to_string()
    }
}

impl Implementation for French {
    const NAME: &'static str = "French";
    const PRIORITY: Option<i64> = Some(20);

    fn construct(_args: &ConstructorArgs) -> Result<Self, BoxError> {
        Ok(French)
    }
}

fn register_greeters(context: &mut Registry) -> implkit_domain::Result<()> {
    context.register_many::<dyn Greeter>(
        &[impl_type!(English: dyn Greeter), impl_type!(French: dyn Greeter)],
        true,
    )?;
    Ok(())
}

fn greeter_holder() -> ContextHolder {
    ContextHolder::new(
        ContextBuilder::new().with_provider(FnProvider::new("greeters", 0, register_greeters)),
    )
}

#[test]
fn test_context_is_built_lazily() {
    let holder = greeter_holder();
    assert!(!holder.is_initialized());

    holder.context().unwrap();
    assert!(holder.is_initialized());
}

#[test]
fn test_context_is_cached() {
    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    fn counting(context: &mut Registry) -> implkit_domain::Result<()> {
        BUILDS.fetch_add(1, Ordering::SeqCst);
        register_greeters(context)
    }

    let mut holder = ContextHolder::new(
        ContextBuilder::new().with_provider(FnProvider::new("counting", 0, counting)),
    );

    let first = holder.context().unwrap() as *const Registry;
    let second = holder.context().unwrap() as *const Registry;
    assert_eq!(first, second);
    assert_eq!(BUILDS.load(Ordering::SeqCst), 1);

    holder.reset();
    assert!(!holder.is_initialized());
    holder.context().unwrap();
    assert_eq!(BUILDS.load(Ordering::SeqCst), 2);
}

#[test]
fn test_failed_build_is_not_cached() {
    static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

    fn flaky(context: &mut Registry) -> implkit_domain::Result<()> {
        if ATTEMPTS.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(Error::generic("first build fails"));
        }
        register_greeters(context)
    }

    let holder =
        ContextHolder::new(ContextBuilder::new().with_provider(FnProvider::new("flaky", 0, flaky)));

    assert!(holder.context().is_err());
    assert!(!holder.is_initialized());

    assert!(holder.context().is_ok());
    assert_eq!(ATTEMPTS.load(Ordering::SeqCst), 2);
}

#[test]
fn test_queries_delegate_to_context() {
    let holder = greeter_holder();
    let query = Query::new();

    let impls = holder.list_impls::<dyn Greeter>(&query).unwrap();
    let names: Vec<&str> = impls.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["French", "English"]);

    let default_impl = holder.default_impl::<dyn Greeter>(&query).unwrap();
    assert_eq!(default_impl.map(|i| i.name()), Some("French"));

    let greetings: Vec<String> = holder
        .instantiate::<dyn Greeter>(&query)
        .unwrap()
        .iter()
        .map(|g| g.greet())
        .collect();
    assert_eq!(greetings, vec!["bonjour", "hello"]);

    let greeter = holder
        .new_default_instance::<dyn Greeter>(&query)
        .unwrap()
        .expect("a default greeter");
    assert_eq!(greeter.greet(), "bonjour");
}

#[test]
fn test_disabled_discovery_starts_empty() {
    let config = DiscoveryConfig {
        enabled: false,
        ..DiscoveryConfig::default()
    };
    let holder = ContextHolder::from_discovery(&config);

    assert!(holder.context().unwrap().is_empty());
    assert!(matches!(
        holder.list_impls::<dyn Greeter>(&Query::new()),
        Err(Error::NoImplementation { .. })
    ));
    assert_eq!(holder.builder().matcher().prefix(), config.prefix);
}
