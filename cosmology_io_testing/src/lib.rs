//! Round-trip fixtures for cosmology format converters.
//!
//! Two fixture sets implement [`IoFixtures`], so a single test body can run
//! against either calling convention:
//!
//! - [`DispatchFixtures`] goes through `Cosmology::to_format` and `Cosmology::from_format`,
//!   selecting the format by the `format` keyword.
//! - [`DirectCallFixtures`] calls a format's `to_<format>`/`from_<format>` pair directly and
//!   strips the `format` keyword before decoding, since the direct functions reject it.
//!
//! Parametrized instances come from [`cosmo_cases`], which lists every
//! published realization followed by a synthetic class installed for the
//! duration of a suite by [`SyntheticClassGuard`].
//!
//! ```rust
//! use cosmology_io::{ClassRegistry, Kwargs, io::{from_yaml, to_yaml}};
//! use cosmology_io_testing::{
//!     ConverterFunctions,
//!     DirectCallFixtures,
//!     RoundTripSuite,
//!     SyntheticClassGuard,
//!     cosmo_cases,
//! };
//!
//! let registry = ClassRegistry::with_builtins();
//! let setup = SyntheticClassGuard::install(&registry, "TestToFromYaml").unwrap();
//! let fixtures = DirectCallFixtures::new(ConverterFunctions::new(to_yaml, from_yaml), &registry);
//! let report = RoundTripSuite::new(fixtures, cosmo_cases(setup.qualname()).unwrap())
//!     .decode_with(Kwargs::format("yaml"))
//!     .run()
//!     .unwrap();
//! assert_eq!(report.checked.len(), 9);
//! ```

pub mod cases;
pub mod fixtures;
pub mod logging;
pub mod roundtrip;
pub mod synthetic;

pub use cases::{CosmoCase, available_cases, cosmo_cases};
use cosmology_io::ClassRegistry;
pub use fixtures::{
    ArgNormalizer,
    BoundToFormat,
    ConverterFunctions,
    DirectCallFixtures,
    DispatchFixtures,
    IoFixtures,
    UnboundFromFormat,
    strip_format_keyword,
};
pub use logging::{LoggerHandle, logger};
pub use roundtrip::{RoundTripReport, RoundTripSuite, assert_round_trip};
use rstest::fixture;
pub use synthetic::{
    SYNTHETIC_CLASS_NAME,
    SYNTHETIC_DEFAULT_NAME,
    SYNTHETIC_TCMB0,
    SyntheticClassGuard,
    cosmology_with_kwargs,
    synthetic_qualname,
};

/// Shared result type for round-trip tests.
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Fresh class registry holding the built-in classes.
///
/// Each test gets its own table, so synthetic registrations never leak
/// between tests.
#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn registry() -> ClassRegistry { ClassRegistry::with_builtins() }
