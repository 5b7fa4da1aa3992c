//! The synthetic `CosmologyWithKwargs` class and its suite-scoped lifecycle.
//!
//! The synthetic class declares a single kelvin parameter, `Tcmb0`, and
//! accepts (and ignores) keywords it does not declare. It exists to check
//! that converters cope with classes whose constructors take extra keywords.
//!
//! [`SyntheticClassGuard`] registers the class when a suite starts and
//! removes it when the guard is dropped. Removal only touches the guard's own
//! qualified name and tolerates the entry already being gone, so teardown is
//! safe to repeat and never disturbs another suite's registration.

use std::sync::Arc;

use cosmology_io::{ClassRegistry, CosmologyClass, Parameter, Result, Unit};
use log::debug;

use crate::cases::CosmoCase;

/// Unqualified name of the synthetic class.
pub const SYNTHETIC_CLASS_NAME: &str = "CosmologyWithKwargs";
/// Name given to synthetic instances.
pub const SYNTHETIC_DEFAULT_NAME: &str = "cosmology with kwargs";
/// `Tcmb0` (kelvin) used when a case instantiates the synthetic class.
pub const SYNTHETIC_TCMB0: f64 = 3.0;

/// Qualified name of the synthetic class installed for `suite`.
#[must_use]
pub fn synthetic_qualname(suite: &str) -> String {
    format!("{suite}::setup::{SYNTHETIC_CLASS_NAME}")
}

/// Declare the synthetic class under `qualname`.
#[must_use]
pub fn cosmology_with_kwargs(qualname: impl Into<String>) -> Arc<CosmologyClass> {
    CosmologyClass::builder(qualname)
        .parameter(Parameter::new("Tcmb0").with_unit(Unit::Kelvin).with_default(0.0))
        .default_name(SYNTHETIC_DEFAULT_NAME)
        .accept_extra_keywords()
        .build()
}

/// Suite-scoped registration of the synthetic class.
#[derive(Debug)]
pub struct SyntheticClassGuard {
    registry: ClassRegistry,
    qualname: String,
}

impl SyntheticClassGuard {
    /// Declare and register the synthetic class for `suite`.
    ///
    /// # Errors
    ///
    /// Returns the registry's error if a different class already holds the
    /// suite's qualified name.
    pub fn install(registry: &ClassRegistry, suite: &str) -> Result<Self> {
        let qualname = synthetic_qualname(suite);
        registry.register(cosmology_with_kwargs(qualname.as_str()))?;
        Ok(Self {
            registry: registry.clone(),
            qualname,
        })
    }

    /// Qualified name the synthetic class is registered under.
    #[must_use]
    pub fn qualname(&self) -> &str { &self.qualname }

    /// Registry the class was installed into.
    #[must_use]
    pub fn registry(&self) -> &ClassRegistry { &self.registry }

    /// Parametrized case naming the synthetic class.
    #[must_use]
    pub fn case(&self) -> CosmoCase { CosmoCase::SyntheticNamed(self.qualname.clone()) }

    /// Remove the synthetic class from the registry.
    ///
    /// Returns true if an entry was removed. Calling this again, or after the
    /// entry was removed elsewhere, is a no-op.
    pub fn teardown(&self) -> bool {
        let removed = self.registry.unregister(&self.qualname).is_some();
        if !removed {
            debug!("synthetic class {} already removed", self.qualname);
        }
        removed
    }
}

impl Drop for SyntheticClassGuard {
    fn drop(&mut self) { self.teardown(); }
}
