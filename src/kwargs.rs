//! Ordered keyword arguments for constructors and converters.
//!
//! Converters and class constructors accept open-ended options. [`Kwargs`]
//! carries them as an ordered map from keyword to JSON value; each consumer
//! takes the keywords it understands and then calls
//! [`Kwargs::ensure_empty`] so that leftovers are reported rather than
//! silently dropped.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{CosmologyError, Result};

/// Keyword name used by the dispatch layer to select a format.
pub const FORMAT_KEYWORD: &str = "format";

/// Ordered keyword arguments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Kwargs(IndexMap<String, Value>);

impl Kwargs {
    /// Create an empty argument set.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Shorthand for a set holding only `format = id`.
    #[must_use]
    pub fn format(id: &str) -> Self { Self::new().with(FORMAT_KEYWORD, id) }

    /// Add or replace a keyword, returning the updated set.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a keyword in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a keyword, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Value> { self.0.shift_remove(key) }

    /// Look up a keyword without consuming it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> { self.0.get(key) }

    /// Returns true if the keyword is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool { self.0.contains_key(key) }

    /// Number of keywords.
    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns true when no keywords remain.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Iterate over keyword names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> { self.0.keys().map(String::as_str) }

    /// Remove a boolean keyword, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::InvalidKeyword`] if the value is not a bool.
    pub fn take_bool(&mut self, key: &str, default: bool) -> Result<bool> {
        match self.remove(key) {
            None => Ok(default),
            Some(Value::Bool(flag)) => Ok(flag),
            Some(_) => Err(CosmologyError::InvalidKeyword {
                keyword: key.to_owned(),
                expected: "a boolean",
            }),
        }
    }

    /// Remove an optional string keyword. `null` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::InvalidKeyword`] if the value is not a string.
    pub fn take_str(&mut self, key: &str) -> Result<Option<String>> {
        match self.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(CosmologyError::InvalidKeyword {
                keyword: key.to_owned(),
                expected: "a string",
            }),
        }
    }

    /// Fail if any keyword was left unconsumed by `function`.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::UnexpectedKeyword`] naming the first
    /// leftover keyword.
    pub fn ensure_empty(&self, function: &str) -> Result<()> {
        match self.0.keys().next() {
            None => Ok(()),
            Some(keyword) => Err(CosmologyError::UnexpectedKeyword {
                function: function.to_owned(),
                keyword: keyword.clone(),
            }),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Kwargs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Kwargs {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}
