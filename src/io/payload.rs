//! Serialized representations handled by the dispatch layer.

use crate::{
    config::Format,
    io::{mapping::Mapping, row::Row},
};

/// A serialized cosmology in one of the built-in representations.
///
/// Each variant identifies its format, so the dispatch layer can decode a
/// payload without an explicit `format` keyword.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// Ordered field mapping.
    Mapping(Mapping),
    /// YAML text.
    Yaml(String),
    /// JSON text.
    Json(String),
    /// Table row.
    Row(Row),
    /// `bincode` bytes.
    Bincode(Vec<u8>),
}

impl Payload {
    /// The built-in format this payload belongs to.
    #[must_use]
    pub fn format(&self) -> Format {
        match self {
            Payload::Mapping(_) => Format::Mapping,
            Payload::Yaml(_) => Format::Yaml,
            Payload::Json(_) => Format::Json,
            Payload::Row(_) => Format::Row,
            Payload::Bincode(_) => Format::Bincode,
        }
    }

    /// Borrow the text of a YAML or JSON payload.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Yaml(text) | Payload::Json(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Mapping> for Payload {
    fn from(mapping: Mapping) -> Self { Self::Mapping(mapping) }
}

impl From<Row> for Payload {
    fn from(row: Row) -> Self { Self::Row(row) }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self { Self::Bincode(bytes) }
}
