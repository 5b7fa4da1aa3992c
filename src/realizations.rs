//! Built-in cosmology classes and published realizations.
//!
//! [`AVAILABLE`] lists the named realizations in a fixed order; callers that
//! parametrize over realizations rely on that order being stable.

use std::sync::{Arc, OnceLock};

use serde_json::{Value, json};

use crate::{
    class::CosmologyClass,
    cosmology::Cosmology,
    error::{CosmologyError, Result},
    kwargs::Kwargs,
    parameter::Parameter,
    units::Unit,
};

/// Qualified name of the flat ΛCDM class.
pub const FLAT_LAMBDA_CDM: &str = "FlatLambdaCDM";
/// Qualified name of the ΛCDM class with free dark-energy density.
pub const LAMBDA_CDM: &str = "LambdaCDM";
/// Qualified name of the flat wCDM class.
pub const FLAT_W_CDM: &str = "FlatwCDM";

/// Names of the published realizations, in parametrization order.
pub const AVAILABLE: [&str; 8] = [
    "WMAP1", "WMAP3", "WMAP5", "WMAP7", "WMAP9", "Planck13", "Planck15", "Planck18",
];

struct Realization {
    name: &'static str,
    h0: f64,
    om0: f64,
    ob0: f64,
    tcmb0: f64,
    neff: f64,
    m_nu: &'static [f64],
    n: f64,
    sigma8: f64,
    reference: &'static str,
}

const REALIZATIONS: [Realization; 8] = [
    Realization {
        name: "WMAP1",
        h0: 72.0,
        om0: 0.257,
        ob0: 0.0436,
        tcmb0: 2.725,
        neff: 3.04,
        m_nu: &[],
        n: 0.96,
        sigma8: 0.75,
        reference: "Spergel et al. 2003, ApJS, 148, 175, Table 7 (WMAP + CBI + ACBAR + 2dFGRS + Lya)",
    },
    Realization {
        name: "WMAP3",
        h0: 70.1,
        om0: 0.276,
        ob0: 0.0454,
        tcmb0: 2.725,
        neff: 3.04,
        m_nu: &[],
        n: 0.946,
        sigma8: 0.784,
        reference: "Spergel et al. 2007, ApJS, 170, 377, Table 6 (WMAP + SNGold)",
    },
    Realization {
        name: "WMAP5",
        h0: 70.2,
        om0: 0.277,
        ob0: 0.0459,
        tcmb0: 2.725,
        neff: 3.04,
        m_nu: &[],
        n: 0.962,
        sigma8: 0.817,
        reference: "Komatsu et al. 2009, ApJS, 180, 330, Table 1 (WMAP + BAO + SN ML)",
    },
    Realization {
        name: "WMAP7",
        h0: 70.4,
        om0: 0.272,
        ob0: 0.0455,
        tcmb0: 2.725,
        neff: 3.04,
        m_nu: &[],
        n: 0.967,
        sigma8: 0.810,
        reference: "Komatsu et al. 2011, ApJS, 192, 18, Table 1 (WMAP + BAO + H0 ML)",
    },
    Realization {
        name: "WMAP9",
        h0: 69.32,
        om0: 0.2865,
        ob0: 0.04628,
        tcmb0: 2.725,
        neff: 3.04,
        m_nu: &[],
        n: 0.9608,
        sigma8: 0.820,
        reference: "Hinshaw et al. 2013, ApJS, 208, 19, Table 4 (WMAP9 + eCMB + BAO + H0)",
    },
    Realization {
        name: "Planck13",
        h0: 67.77,
        om0: 0.30712,
        ob0: 0.048_252,
        tcmb0: 2.7255,
        neff: 3.046,
        m_nu: &[0.0, 0.0, 0.06],
        n: 0.9611,
        sigma8: 0.8288,
        reference: "Planck Collaboration 2014, A&A, 571, A16, Table 5 (Planck + WP + highL + BAO)",
    },
    Realization {
        name: "Planck15",
        h0: 67.74,
        om0: 0.3075,
        ob0: 0.0486,
        tcmb0: 2.7255,
        neff: 3.046,
        m_nu: &[0.0, 0.0, 0.06],
        n: 0.9667,
        sigma8: 0.8159,
        reference: "Planck Collaboration 2016, A&A, 594, A13, Table 4 (TT, TE, EE + lowP + lensing + ext)",
    },
    Realization {
        name: "Planck18",
        h0: 67.66,
        om0: 0.30966,
        ob0: 0.04897,
        tcmb0: 2.7255,
        neff: 3.046,
        m_nu: &[0.0, 0.0, 0.06],
        n: 0.9665,
        sigma8: 0.8102,
        reference: "Planck Collaboration 2020, A&A, 641, A6, Table 2 (TT, TE, EE + lowE + lensing + BAO)",
    },
];

fn common_tail(builder: crate::class::CosmologyClassBuilder) -> Arc<CosmologyClass> {
    builder
        .parameter(
            Parameter::new("Tcmb0")
                .with_unit(Unit::Kelvin)
                .with_default(0.0)
                .with_doc("Temperature of the CMB at z=0."),
        )
        .parameter(
            Parameter::new("Neff")
                .with_default(3.04)
                .with_doc("Number of effective neutrino species."),
        )
        .parameter(
            Parameter::new("m_nu")
                .with_unit(Unit::ElectronVolt)
                .with_default(0.0)
                .with_doc("Mass of neutrino species."),
        )
        .parameter(
            Parameter::new("Ob0")
                .with_default(0.0)
                .with_doc("Omega baryon; baryonic matter density/critical density at z=0."),
        )
        .build()
}

fn head(qualname: &str) -> crate::class::CosmologyClassBuilder {
    CosmologyClass::builder(qualname)
        .parameter(
            Parameter::new("H0")
                .with_unit(Unit::KmPerSecPerMpc)
                .with_doc("Hubble constant at z=0."),
        )
        .parameter(
            Parameter::new("Om0").with_doc("Omega matter; matter density/critical density at z=0."),
        )
}

/// The built-in classes, created once per process.
pub fn builtin_classes() -> &'static [Arc<CosmologyClass>] {
    static CLASSES: OnceLock<Vec<Arc<CosmologyClass>>> = OnceLock::new();
    CLASSES.get_or_init(|| {
        vec![
            common_tail(head(FLAT_LAMBDA_CDM)),
            common_tail(head(LAMBDA_CDM).parameter(
                Parameter::new("Ode0").with_doc("Omega dark energy at z=0."),
            )),
            common_tail(head(FLAT_W_CDM).parameter(
                Parameter::new("w0")
                    .with_default(-1.0)
                    .with_doc("Dark energy equation of state."),
            )),
        ]
    })
}

/// Look up a built-in class by qualified name.
///
/// # Errors
///
/// Returns [`CosmologyError::UnknownClass`] for names that are not built in.
pub fn builtin_class(qualname: &str) -> Result<Arc<CosmologyClass>> {
    builtin_classes()
        .iter()
        .find(|class| class.qualname() == qualname)
        .cloned()
        .ok_or_else(|| CosmologyError::UnknownClass(qualname.to_owned()))
}

fn m_nu_value(m_nu: &[f64]) -> Value {
    if m_nu.is_empty() {
        Value::from(0.0)
    } else {
        Value::from(m_nu.to_vec())
    }
}

/// Construct the named realization.
///
/// # Errors
///
/// Returns [`CosmologyError::UnknownClass`] if `name` is not in
/// [`AVAILABLE`].
pub fn get(name: &str) -> Result<Cosmology> {
    let entry = REALIZATIONS
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| CosmologyError::UnknownClass(name.to_owned()))?;
    let kwargs = Kwargs::new()
        .with("name", entry.name)
        .with("H0", entry.h0)
        .with("Om0", entry.om0)
        .with("Tcmb0", entry.tcmb0)
        .with("Neff", entry.neff)
        .with("m_nu", m_nu_value(entry.m_nu))
        .with("Ob0", entry.ob0)
        .with(
            "meta",
            json!({
                "n": entry.n,
                "sigma8": entry.sigma8,
                "flat": true,
                "reference": entry.reference,
            }),
        );
    builtin_class(FLAT_LAMBDA_CDM)?.instantiate(kwargs)
}

/// Construct every realization in [`AVAILABLE`] order.
///
/// # Errors
///
/// Propagates construction errors from [`get`].
pub fn all() -> Result<Vec<Cosmology>> { AVAILABLE.iter().map(|name| get(name)).collect() }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Quantity;

    #[test]
    fn available_matches_table_order() {
        let names: Vec<_> = REALIZATIONS.iter().map(|r| r.name).collect();
        assert_eq!(names, AVAILABLE);
    }

    #[test]
    fn planck18_carries_published_values() {
        let cosmo = get("Planck18").expect("Planck18");
        assert_eq!(cosmo.qualname(), FLAT_LAMBDA_CDM);
        assert_eq!(cosmo.name(), Some("Planck18"));
        assert_eq!(
            cosmo.parameter("H0"),
            Some(&Quantity::scalar(67.66, Unit::KmPerSecPerMpc))
        );
        assert_eq!(
            cosmo.parameter("m_nu"),
            Some(&Quantity::array(vec![0.0, 0.0, 0.06], Unit::ElectronVolt))
        );
        assert_eq!(cosmo.meta().get("flat"), Some(&Value::Bool(true)));
    }

    #[test]
    fn builtin_parameters_are_documented() {
        let class = builtin_class(FLAT_LAMBDA_CDM).expect("class");
        for name in ["H0", "Om0", "Tcmb0", "Neff", "m_nu", "Ob0"] {
            let doc = class.parameter(name).and_then(Parameter::doc);
            assert!(doc.is_some_and(|doc| !doc.is_empty()), "{name} has no doc");
        }
        assert_eq!(
            class.parameter("Tcmb0").and_then(Parameter::doc),
            Some("Temperature of the CMB at z=0.")
        );
    }

    #[test]
    fn wmap_neutrinos_are_massless_scalars() {
        let cosmo = get("WMAP9").expect("WMAP9");
        assert_eq!(
            cosmo.parameter("m_nu"),
            Some(&Quantity::scalar(0.0, Unit::ElectronVolt))
        );
    }

    #[test]
    fn unknown_realization_is_an_error() {
        assert!(get("Planck99").is_err());
    }

    #[test]
    fn non_flat_class_requires_dark_energy_density() {
        let err = builtin_class(LAMBDA_CDM)
            .expect("class")
            .instantiate(Kwargs::new().with("H0", 70.0).with("Om0", 0.3))
            .expect_err("Ode0 missing");
        assert!(matches!(err, CosmologyError::MissingParameter { .. }));
    }
}
