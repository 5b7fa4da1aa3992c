//! Table-driven round-trip checks.
//!
//! [`RoundTripSuite`] combines an [`IoFixtures`] implementation (encoder,
//! decoder, and keyword normalization) with a list of [`CosmoCase`]s and
//! checks `from_format(to_format(cosmo)) == cosmo` for each case in order.

use cosmology_io::{Cosmology, Kwargs};

use crate::{TestResult, cases::CosmoCase, fixtures::IoFixtures};

/// Encode `cosmo` with `to_kwargs`, decode with `from_kwargs`, and compare.
///
/// # Errors
///
/// Returns conversion errors unchanged, or a description of the mismatch
/// when the decoded instance differs from `cosmo`.
pub fn assert_round_trip<F: IoFixtures>(
    fixtures: &F,
    cosmo: &Cosmology,
    to_kwargs: Kwargs,
    from_kwargs: Kwargs,
) -> TestResult<Cosmology> {
    let payload = fixtures.to_format(cosmo)(to_kwargs)?;
    let decoded = fixtures.from_format()(payload, from_kwargs)?;
    if decoded != *cosmo {
        return Err(format!("round trip produced {decoded}, expected {cosmo}").into());
    }
    Ok(decoded)
}

/// Labels of the cases a suite checked, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundTripReport {
    /// One entry per case, as given by [`CosmoCase::label`].
    pub checked: Vec<String>,
}

/// A round-trip property over a table of cases.
#[derive(Debug)]
pub struct RoundTripSuite<F> {
    fixtures: F,
    cases: Vec<CosmoCase>,
    to_kwargs: Kwargs,
    from_kwargs: Kwargs,
}

impl<F: IoFixtures> RoundTripSuite<F> {
    /// Create a suite checking every case in `cases` through `fixtures`.
    #[must_use]
    pub fn new(fixtures: F, cases: Vec<CosmoCase>) -> Self {
        Self {
            fixtures,
            cases,
            to_kwargs: Kwargs::new(),
            from_kwargs: Kwargs::new(),
        }
    }

    /// Keywords passed to every `to_format` call.
    #[must_use]
    pub fn encode_with(mut self, kwargs: Kwargs) -> Self {
        self.to_kwargs = kwargs;
        self
    }

    /// Keywords passed to every `from_format` call.
    #[must_use]
    pub fn decode_with(mut self, kwargs: Kwargs) -> Self {
        self.from_kwargs = kwargs;
        self
    }

    /// The fixtures the suite runs against.
    #[must_use]
    pub fn fixtures(&self) -> &F { &self.fixtures }

    /// Check every case, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first resolution, conversion, or comparison failure,
    /// prefixed with the failing case's label.
    pub fn run(&self) -> TestResult<RoundTripReport> {
        let mut report = RoundTripReport::default();
        for case in &self.cases {
            let label = case.label();
            let cosmo = case
                .resolve(self.fixtures.registry())
                .map_err(|error| format!("{label}: {error}"))?;
            assert_round_trip(
                &self.fixtures,
                &cosmo,
                self.to_kwargs.clone(),
                self.from_kwargs.clone(),
            )
            .map_err(|error| format!("{label}: {error}"))?;
            report.checked.push(label.to_owned());
        }
        Ok(report)
    }
}
