//! Conversion of cosmologies to and from serialization formats.
//!
//! Every format exposes a direct function pair, `to_<format>` and
//! `from_<format>`, in its own submodule. The [`dispatch`] layer wraps each
//! pair in a [`ConverterPair`] and selects one by the `format` keyword, which
//! is what [`Cosmology::to_format`](crate::Cosmology::to_format) and
//! [`Cosmology::from_format`](crate::Cosmology::from_format) use.
//!
//! The direct functions reject keywords they do not understand, `format`
//! included; only the dispatch layer consumes it.

pub mod binary;
pub mod dispatch;
pub mod json;
pub mod mapping;
pub mod payload;
pub mod row;
pub mod yaml;

pub use binary::{from_bincode, to_bincode};
pub use dispatch::{ConverterPair, FormatRegistry, FromFn, ToFn};
pub use json::{from_json, to_json};
pub use mapping::{Mapping, from_mapping, to_mapping};
pub use payload::Payload;
pub use row::{Column, Row, from_row, to_row};
pub use yaml::{from_yaml, to_yaml};
