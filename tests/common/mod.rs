//! Shared test bodies for the per-format round-trip suites.
//!
//! Each body is generic over [`Convention`], so a format's suite runs the
//! same checks through the dispatch entry points and through its direct
//! `to_<format>`/`from_<format>` pair.
//!
//! Every test takes its own guard over a fresh registry, so `#[values]` cases
//! never share a synthetic registration; `RoundTripSuite` covers one
//! registration shared across all cases.

// Items in this shared module may not be used by all test binaries that import it.
#![allow(
    dead_code,
    reason = "shared test utilities are not used by all test binaries"
)]

use cosmology_io::{ClassRegistry, Cosmology, CosmologyError, Kwargs, realizations};
use cosmology_io_testing::{
    CosmoCase,
    DirectCallFixtures,
    DispatchFixtures,
    IoFixtures,
    SyntheticClassGuard,
    TestResult,
};

/// Case name standing in for the suite's synthetic class.
pub const SYNTHETIC: &str = "synthetic";

/// How a fixture set expects the encoder's keywords to be spelled.
///
/// The dispatch encoder needs the `format` keyword to pick a converter; a
/// direct encoder has no use for it and rejects it.
pub trait Convention: IoFixtures {
    fn encode_kwargs(&self, format: &str) -> Kwargs;
}

impl Convention for DispatchFixtures {
    fn encode_kwargs(&self, format: &str) -> Kwargs { Kwargs::format(format) }
}

impl<P: 'static> Convention for DirectCallFixtures<P> {
    fn encode_kwargs(&self, _format: &str) -> Kwargs { Kwargs::new() }
}

/// Install the synthetic class for `suite` into a fresh registry.
#[expect(
    clippy::expect_used,
    reason = "a suite without its synthetic class cannot run"
)]
pub fn install_synthetic(suite: &str) -> SyntheticClassGuard {
    SyntheticClassGuard::install(&ClassRegistry::with_builtins(), suite)
        .expect("install synthetic class")
}

/// Resolve a case name: a realization, or [`SYNTHETIC`].
pub fn resolve(setup: &SyntheticClassGuard, name: &str) -> TestResult<Cosmology> {
    let case = if name == SYNTHETIC {
        setup.case()
    } else {
        CosmoCase::Existing(realizations::get(name)?)
    };
    Ok(case.resolve(setup.registry())?)
}

/// Encode and decode `cosmo`, checking equality, class, and metadata.
pub fn round_trip<F: Convention>(fixtures: &F, cosmo: &Cosmology, format: &str) -> TestResult {
    let payload = fixtures.to_format(cosmo)(fixtures.encode_kwargs(format))?;
    let decoded = fixtures.from_format()(payload, Kwargs::format(format))?;
    assert_eq!(&decoded, cosmo);
    assert_eq!(decoded.qualname(), cosmo.qualname());
    assert_eq!(decoded.meta(), cosmo.meta());
    Ok(())
}

/// Decoding with the payload's own class name as `cosmology` succeeds.
pub fn decode_with_matching_class<F: Convention>(
    fixtures: &F,
    cosmo: &Cosmology,
    format: &str,
) -> TestResult {
    let payload = fixtures.to_format(cosmo)(fixtures.encode_kwargs(format))?;
    let decoded = fixtures.from_format()(
        payload,
        Kwargs::format(format).with("cosmology", cosmo.qualname()),
    )?;
    assert_eq!(&decoded, cosmo);
    Ok(())
}

/// Decoding with another class name as `cosmology` is a class mismatch.
pub fn decode_with_other_class_fails<F: Convention>(
    fixtures: &F,
    cosmo: &Cosmology,
    format: &str,
) -> TestResult {
    let other = if cosmo.qualname() == realizations::LAMBDA_CDM {
        realizations::FLAT_W_CDM
    } else {
        realizations::LAMBDA_CDM
    };
    let payload = fixtures.to_format(cosmo)(fixtures.encode_kwargs(format))?;
    let Err(err) = fixtures.from_format()(payload, Kwargs::format(format).with("cosmology", other))
    else {
        return Err(format!("decoding {} as {other} should fail", cosmo.qualname()).into());
    };
    assert!(
        matches!(&err, CosmologyError::ClassMismatch { expected, found }
            if expected == other && found == cosmo.qualname()),
        "unexpected error: {err}"
    );
    Ok(())
}

/// Decoders reject keywords they do not understand.
pub fn decode_rejects_unknown_keyword<F: Convention>(
    fixtures: &F,
    cosmo: &Cosmology,
    format: &str,
) -> TestResult {
    let payload = fixtures.to_format(cosmo)(fixtures.encode_kwargs(format))?;
    let Err(err) = fixtures.from_format()(payload, Kwargs::format(format).with("bogus", true))
    else {
        return Err("unknown keyword accepted".into());
    };
    assert!(err.is_unexpected_keyword("bogus"), "unexpected error: {err}");
    Ok(())
}

/// Encoders reject keywords they do not understand.
pub fn encode_rejects_unknown_keyword<F: Convention>(
    fixtures: &F,
    cosmo: &Cosmology,
    format: &str,
) -> TestResult {
    let Err(err) = fixtures.to_format(cosmo)(fixtures.encode_kwargs(format).with("bogus", 1))
    else {
        return Err("unknown keyword accepted".into());
    };
    assert!(err.is_unexpected_keyword("bogus"), "unexpected error: {err}");
    Ok(())
}
