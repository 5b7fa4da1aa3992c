//! Canonical error and result types for the crate.
//!
//! [`CosmologyError`] covers class registration, instance construction, and
//! format conversion. Every failure in those paths is propagated to the
//! caller unchanged; nothing in this crate retries or falls back to another
//! format.

use thiserror::Error;

use crate::units::Unit;

/// Top-level error type exposed by `cosmology_io`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CosmologyError {
    /// No class is registered under the qualified name.
    #[error("no cosmology class registered as {0:?}")]
    UnknownClass(String),

    /// A different class is already registered under the qualified name.
    #[error("a different cosmology class is already registered as {0:?}")]
    DuplicateClass(String),

    /// No converter pair is registered for the format identifier.
    #[error("no converters registered for format {0:?}")]
    UnknownFormat(String),

    /// A converter pair is already registered for the format identifier.
    #[error("converters for format {0:?} are already registered")]
    DuplicateFormat(String),

    /// A dispatch call needed a `format` keyword and none was supplied.
    #[error("{function}() requires a `format` keyword")]
    MissingFormat {
        /// Dispatch entry point that was called.
        function: &'static str,
    },

    /// The `format` keyword disagrees with the payload handed to the decoder.
    #[error("format {requested:?} cannot read a {actual:?} payload")]
    FormatMismatch {
        /// Format named by the caller.
        requested: String,
        /// Format identified from the payload.
        actual: String,
    },

    /// A declared parameter has neither a supplied value nor a default.
    #[error("{class} requires parameter {parameter:?}")]
    MissingParameter {
        /// Qualified name of the class being constructed.
        class: String,
        /// Parameter without a value.
        parameter: String,
    },

    /// A function received a keyword argument it does not accept.
    #[error("{function}() got an unexpected keyword argument {keyword:?}")]
    UnexpectedKeyword {
        /// Function or constructor that rejected the keyword.
        function: String,
        /// Offending keyword.
        keyword: String,
    },

    /// A keyword argument was present but had the wrong shape.
    #[error("keyword {keyword:?} must be {expected}")]
    InvalidKeyword {
        /// Offending keyword.
        keyword: String,
        /// Human readable description of the accepted values.
        expected: &'static str,
    },

    /// A quantity carried a unit incompatible with the parameter.
    #[error("parameter {parameter:?} expects unit {expected} but got {actual}")]
    UnitMismatch {
        /// Parameter being assigned.
        parameter: String,
        /// Unit declared by the parameter.
        expected: Unit,
        /// Unit supplied by the caller.
        actual: Unit,
    },

    /// A unit symbol could not be parsed.
    #[error("unrecognised unit {0:?}")]
    InvalidUnit(String),

    /// A payload named a class other than the one the caller asked for.
    #[error("payload describes {found:?} but {expected:?} was requested")]
    ClassMismatch {
        /// Class requested through the `cosmology` keyword.
        expected: String,
        /// Class recorded in the payload.
        found: String,
    },

    /// A payload field was missing or malformed.
    #[error("invalid field {field:?}: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: String,
        /// Description of the problem.
        reason: String,
    },

    /// YAML encoding or decoding failed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON encoding or decoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding failed.
    #[error("bincode encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// Binary decoding failed.
    #[error("bincode decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

impl CosmologyError {
    /// Build an [`InvalidField`](Self::InvalidField) error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the error names an unexpected keyword argument.
    #[must_use]
    pub fn is_unexpected_keyword(&self, keyword: &str) -> bool {
        matches!(self, Self::UnexpectedKeyword { keyword: k, .. } if k == keyword)
    }
}

/// Canonical result alias used by `cosmology_io` public APIs.
pub type Result<T> = std::result::Result<T, CosmologyError>;
