//! Format dispatch.
//!
//! [`FormatRegistry`] maps a format identifier to a [`ConverterPair`] and
//! routes [`Cosmology::to_format`] and [`Cosmology::from_format`] calls by
//! the `format` keyword. The keyword is consumed here and never reaches the
//! direct converter functions.

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::{
    config::Format,
    cosmology::Cosmology,
    error::{CosmologyError, Result},
    io::{binary, json, mapping, payload::Payload, row, yaml},
    kwargs::{FORMAT_KEYWORD, Kwargs},
    registry::ClassRegistry,
};

/// Encoder half of a [`ConverterPair`].
pub type ToFn = fn(&Cosmology, Kwargs) -> Result<Payload>;

/// Decoder half of a [`ConverterPair`].
pub type FromFn = fn(&ClassRegistry, Payload, Kwargs) -> Result<Cosmology>;

/// The encoder and decoder registered for one format.
#[derive(Clone, Copy, Debug)]
pub struct ConverterPair {
    /// Cosmology to payload.
    pub to: ToFn,
    /// Payload to cosmology.
    pub from: FromFn,
}

macro_rules! builtin_pair {
    ($format:expr, $variant:ident, $to:path, $from:path) => {
        ConverterPair {
            to: |cosmo, kwargs| $to(cosmo, kwargs).map(Payload::$variant),
            from: |registry, payload, kwargs| match payload {
                Payload::$variant(inner) => $from(registry, inner, kwargs),
                other => Err(CosmologyError::FormatMismatch {
                    requested: $format.as_str().to_owned(),
                    actual: other.format().as_str().to_owned(),
                }),
            },
        }
    };
}

fn builtin_pair(format: Format) -> ConverterPair {
    match format {
        Format::Mapping => builtin_pair!(
            Format::Mapping,
            Mapping,
            mapping::to_mapping,
            mapping::from_mapping
        ),
        Format::Yaml => builtin_pair!(Format::Yaml, Yaml, yaml::to_yaml, yaml::from_yaml),
        Format::Json => builtin_pair!(Format::Json, Json, json::to_json, json::from_json),
        Format::Row => builtin_pair!(Format::Row, Row, row::to_row, row::from_row),
        Format::Bincode => builtin_pair!(
            Format::Bincode,
            Bincode,
            binary::to_bincode,
            binary::from_bincode
        ),
    }
}

/// Table of converter pairs keyed by format identifier.
#[derive(Clone, Debug, Default)]
pub struct FormatRegistry(Arc<DashMap<String, ConverterPair>>);

impl FormatRegistry {
    /// Create a registry with no formats.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Create a registry holding every built-in format.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for format in Format::ALL {
            registry
                .0
                .insert(format.as_str().to_owned(), builtin_pair(format));
        }
        registry
    }

    /// Process-wide registry used by [`Cosmology::to_format`] and
    /// [`Cosmology::from_format`].
    pub fn global() -> &'static FormatRegistry {
        static GLOBAL: OnceLock<FormatRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::with_builtins)
    }

    /// Register converters for a new format identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::DuplicateFormat`] if the identifier is taken.
    pub fn register(&self, format: impl Into<String>, pair: ConverterPair) -> Result<()> {
        match self.0.entry(format.into()) {
            dashmap::mapref::entry::Entry::Occupied(existing) => {
                Err(CosmologyError::DuplicateFormat(existing.key().clone()))
            }
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                log::debug!("registered converters for format {}", slot.key());
                slot.insert(pair);
                Ok(())
            }
        }
    }

    /// Look up the converters for a format identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::UnknownFormat`] if nothing is registered.
    pub fn get(&self, format: &str) -> Result<ConverterPair> {
        self.0
            .get(format)
            .map(|entry| *entry.value())
            .ok_or_else(|| CosmologyError::UnknownFormat(format.to_owned()))
    }

    /// Registered format identifiers, sorted.
    #[must_use]
    pub fn formats(&self) -> Vec<String> {
        let mut formats: Vec<String> = self.0.iter().map(|e| e.key().clone()).collect();
        formats.sort();
        formats
    }

    /// Encode `cosmo` with the converter named by the `format` keyword.
    ///
    /// Remaining keywords are forwarded to the encoder.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::MissingFormat`] without a `format` keyword,
    /// [`CosmologyError::UnknownFormat`] for unregistered identifiers, and
    /// propagates encoder errors.
    pub fn to_format(&self, cosmo: &Cosmology, mut kwargs: Kwargs) -> Result<Payload> {
        let format = kwargs
            .take_str(FORMAT_KEYWORD)?
            .ok_or(CosmologyError::MissingFormat {
                function: "to_format",
            })?;
        let pair = self.get(&format)?;
        tracing::debug!(format = %format, cosmology = cosmo.qualname(), "encoding cosmology");
        let result = (pair.to)(cosmo, kwargs);
        record(Direction::Encode, &format, result.as_ref().err());
        result
    }

    /// Decode `payload` with the converter named by the `format` keyword, or
    /// the payload's own format when the keyword is absent.
    ///
    /// Remaining keywords are forwarded to the decoder.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::UnknownFormat`] for unregistered
    /// identifiers, [`CosmologyError::FormatMismatch`] when a built-in
    /// decoder receives another format's payload, and propagates decoder
    /// errors.
    pub fn from_format(
        &self,
        classes: &ClassRegistry,
        payload: Payload,
        mut kwargs: Kwargs,
    ) -> Result<Cosmology> {
        let format = match kwargs.take_str(FORMAT_KEYWORD)? {
            Some(format) => format,
            None => payload.format().as_str().to_owned(),
        };
        let pair = self.get(&format)?;
        tracing::debug!(format = %format, "decoding cosmology");
        let result = (pair.from)(classes, payload, kwargs);
        record(Direction::Decode, &format, result.as_ref().err());
        result
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Encode,
    Decode,
}

#[cfg_attr(not(feature = "metrics"), allow(unused_variables))]
fn record(direction: Direction, format: &str, error: Option<&CosmologyError>) {
    if let Some(error) = error {
        tracing::debug!(format, %error, "conversion failed");
    }
    #[cfg(feature = "metrics")]
    {
        let direction = match direction {
            Direction::Encode => crate::metrics::Direction::Encode,
            Direction::Decode => crate::metrics::Direction::Decode,
        };
        if error.is_some() {
            crate::metrics::inc_errors(direction);
        } else {
            crate::metrics::inc_conversions(direction, format);
        }
    }
}

impl Cosmology {
    /// Convert this cosmology with the process-wide [`FormatRegistry`].
    ///
    /// The `format` keyword selects the converter; other keywords are
    /// passed through to it.
    ///
    /// # Errors
    ///
    /// See [`FormatRegistry::to_format`].
    pub fn to_format(&self, kwargs: Kwargs) -> Result<Payload> {
        FormatRegistry::global().to_format(self, kwargs)
    }

    /// Build a cosmology from `payload` with the process-wide
    /// [`FormatRegistry`], resolving classes in `classes`.
    ///
    /// # Errors
    ///
    /// See [`FormatRegistry::from_format`].
    pub fn from_format(classes: &ClassRegistry, payload: Payload, kwargs: Kwargs) -> Result<Self> {
        FormatRegistry::global().from_format(classes, payload, kwargs)
    }
}
