#![doc(html_root_url = "https://docs.rs/cosmology_io/latest")]
//! Public API for the `cosmology_io` library.
//!
//! This crate provides a cosmological model value type with unit-carrying
//! parameters, an explicit registry of cosmology classes, the published
//! realizations, and lossless conversion to and from several serialization
//! formats through either direct `to_<format>`/`from_<format>` functions or
//! the generic [`Cosmology::to_format`]/[`Cosmology::from_format`] dispatch.
//!
//! ```rust
//! use cosmology_io::{ClassRegistry, Cosmology, Kwargs, realizations};
//!
//! let planck = realizations::get("Planck18").unwrap();
//! let payload = planck.to_format(Kwargs::format("yaml")).unwrap();
//! let back =
//!     Cosmology::from_format(ClassRegistry::global(), payload, Kwargs::format("yaml")).unwrap();
//! assert_eq!(back, planck);
//! ```

pub mod class;
pub mod config;
pub mod cosmology;
pub mod error;
pub mod io;
pub mod kwargs;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod parameter;
pub mod realizations;
pub mod registry;
pub mod units;

pub use class::{CosmologyClass, CosmologyClassBuilder};
pub use config::Format;
pub use cosmology::Cosmology;
pub use error::{CosmologyError, Result};
pub use io::{ConverterPair, FormatRegistry, Payload};
pub use kwargs::{FORMAT_KEYWORD, Kwargs};
pub use parameter::Parameter;
pub use registry::ClassRegistry;
pub use units::{Magnitude, Quantity, Unit};
