//! Format configuration.
//!
//! This module names the serialization formats built into `cosmology_io`
//! and the identifiers the dispatch layer selects them by.
use std::{fmt, str::FromStr};

use crate::error::CosmologyError;

/// Serialization formats built into `cosmology_io`.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Ordered mapping of field name to value.
    Mapping,
    /// YAML document of the mapping.
    Yaml,
    /// JSON document of the mapping.
    Json,
    /// Single table row with unit-tagged columns.
    Row,
    /// Compact `bincode` record.
    Bincode,
}

impl Format {
    /// The library default (currently [`Mapping`](Format::Mapping)).
    pub const DEFAULT: Format = Format::Mapping;

    /// Every built-in format in registration order.
    pub const ALL: [Format; 5] = [
        Format::Mapping,
        Format::Yaml,
        Format::Json,
        Format::Row,
        Format::Bincode,
    ];

    /// Identifier used in the `format` keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Mapping => "mapping",
            Format::Yaml => "yaml",
            Format::Json => "json",
            Format::Row => "astropy.row",
            Format::Bincode => "bincode",
        }
    }
}

impl Default for Format {
    fn default() -> Self { Format::DEFAULT }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Format {
    type Err = CosmologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mapping" => Ok(Format::Mapping),
            "yaml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            "astropy.row" | "row" => Ok(Format::Row),
            "bincode" => Ok(Format::Bincode),
            other => Err(CosmologyError::UnknownFormat(other.to_owned())),
        }
    }
}
