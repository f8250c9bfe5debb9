//! Runtime validation of configuration units
//!
//! Checks, in order:
//! 1. `priority` is present (`MissingAttribute`) and an integer (`InvalidType`)
//! 2. `configure` is present (`MissingAttribute`) and a procedure (`InvalidType`)
//! 3. `configure` takes at least one parameter (`InvalidSignature`)
//!
//! A first parameter whose name is not a recognized context name only logs
//! a warning.

use implkit_domain::constants::{CONFIGURE_ATTRIBUTE, CONTEXT_PARAMETER_NAMES, PRIORITY_ATTRIBUTE};
use implkit_domain::{Error, Result};
use tracing::{debug, error, warn};

use super::{ConfigProvider, Procedure, Unit, UnitAttribute};
use crate::registry::Registry;

/// A unit that passed validation
#[derive(Debug, Clone)]
pub struct UnitProvider {
    name: String,
    priority: i64,
    configure: Procedure,
}

impl ConfigProvider for UnitProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i64 {
        self.priority
    }

    fn configure(&self, context: &mut Registry) -> Result<()> {
        if let Some(value) = self.configure.call(context)? {
            warn!(
                "Unit '{}' 'configure' procedure returned a value ({}) when none was expected",
                self.name, value
            );
        }
        Ok(())
    }
}

/// Validate a unit and turn it into a provider
pub fn validate_provider(unit: &Unit) -> Result<UnitProvider> {
    let name = unit.name();
    debug!("Validating configuration unit '{}'", name);

    let priority = match unit.attribute(PRIORITY_ATTRIBUTE) {
        Some(UnitAttribute::Integer(priority)) => *priority,
        Some(other) => {
            error!(
                "Unit '{}' has invalid 'priority' attribute: expected int, got {}",
                name,
                other.kind()
            );
            return Err(Error::invalid_type(
                name,
                PRIORITY_ATTRIBUTE,
                "int",
                other.kind(),
            ));
        }
        None => {
            error!("Unit '{}' missing required 'priority' attribute", name);
            return Err(Error::missing_attribute(name, PRIORITY_ATTRIBUTE));
        }
    };

    let configure = match unit.attribute(CONFIGURE_ATTRIBUTE) {
        Some(UnitAttribute::Procedure(procedure)) => procedure.clone(),
        Some(other) => {
            error!(
                "Unit '{}' has invalid 'configure' attribute: expected procedure, got {}",
                name,
                other.kind()
            );
            return Err(Error::invalid_type(
                name,
                CONFIGURE_ATTRIBUTE,
                "procedure",
                other.kind(),
            ));
        }
        None => {
            error!("Unit '{}' missing required 'configure' procedure", name);
            return Err(Error::missing_attribute(name, CONFIGURE_ATTRIBUTE));
        }
    };

    let Some(first) = configure.parameters().first() else {
        error!(
            "Unit '{}' has invalid 'configure' procedure: expected at least 1 parameter, got 0",
            name
        );
        return Err(Error::invalid_signature(
            name,
            "expected at least 1 parameter, got 0",
        ));
    };

    if !CONTEXT_PARAMETER_NAMES.contains(&first.as_str()) {
        warn!(
            "Unit '{}' 'configure' procedure's first parameter name '{}' doesn't suggest it's a context",
            name, first
        );
    }

    Ok(UnitProvider {
        name: name.to_string(),
        priority,
        configure,
    })
}
