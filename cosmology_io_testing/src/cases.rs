//! Parametrized cosmology instances.

use cosmology_io::{ClassRegistry, Cosmology, Kwargs, Quantity, Result, Unit, realizations};

use crate::synthetic::SYNTHETIC_TCMB0;

/// One parametrized `cosmo` value.
#[derive(Clone, Debug)]
pub enum CosmoCase {
    /// A ready-made instance, returned unchanged.
    Existing(Cosmology),
    /// The qualified name of a registered synthetic class, instantiated on
    /// demand with `Tcmb0 = 3 K`.
    SyntheticNamed(String),
}

impl CosmoCase {
    /// Produce the instance for this case.
    ///
    /// # Errors
    ///
    /// Returns [`cosmology_io::CosmologyError::UnknownClass`] if the synthetic
    /// class is not registered, and propagates constructor errors.
    pub fn resolve(&self, registry: &ClassRegistry) -> Result<Cosmology> {
        match self {
            CosmoCase::Existing(cosmo) => Ok(cosmo.clone()),
            CosmoCase::SyntheticNamed(qualname) => registry.lookup(qualname)?.instantiate(
                Kwargs::new().with("Tcmb0", Quantity::scalar(SYNTHETIC_TCMB0, Unit::Kelvin)),
            ),
        }
    }

    /// Short label for reports: the realization name or the synthetic
    /// qualified name.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CosmoCase::Existing(cosmo) => cosmo.name().unwrap_or_else(|| cosmo.qualname()),
            CosmoCase::SyntheticNamed(qualname) => qualname,
        }
    }
}

impl From<Cosmology> for CosmoCase {
    fn from(cosmo: Cosmology) -> Self { Self::Existing(cosmo) }
}

/// Every published realization, in `realizations::AVAILABLE` order.
///
/// # Errors
///
/// Propagates construction errors from the realizations table.
pub fn available_cases() -> Result<Vec<CosmoCase>> {
    Ok(realizations::all()?.into_iter().map(CosmoCase::Existing).collect())
}

/// Every published realization followed by the synthetic class registered
/// under `synthetic_qualname`.
///
/// # Errors
///
/// Propagates construction errors from the realizations table.
pub fn cosmo_cases(synthetic_qualname: &str) -> Result<Vec<CosmoCase>> {
    let mut cases = available_cases()?;
    cases.push(CosmoCase::SyntheticNamed(synthetic_qualname.to_owned()));
    Ok(cases)
}
