//! The cosmology value type.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    class::{CosmologyClass, META_KEYWORD, NAME_KEYWORD},
    error::Result,
    kwargs::Kwargs,
    units::Quantity,
};

/// An immutable cosmological model.
///
/// Two instances are equal when they share a class qualified name, a name,
/// and parameter values. Metadata does not take part in equality.
#[derive(Clone, Debug)]
pub struct Cosmology {
    class: Arc<CosmologyClass>,
    name: Option<String>,
    parameters: IndexMap<String, Quantity>,
    meta: IndexMap<String, Value>,
}

impl Cosmology {
    pub(crate) fn from_parts(
        class: Arc<CosmologyClass>,
        name: Option<String>,
        parameters: IndexMap<String, Quantity>,
        meta: IndexMap<String, Value>,
    ) -> Self {
        Self {
            class,
            name,
            parameters,
            meta,
        }
    }

    /// Class this instance was constructed from.
    #[must_use]
    pub fn class(&self) -> &Arc<CosmologyClass> { &self.class }

    /// Qualified name of the instance's class.
    #[must_use]
    pub fn qualname(&self) -> &str { self.class.qualname() }

    #[must_use]
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }

    /// Value of a declared parameter.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Quantity> { self.parameters.get(name) }

    /// Parameter values in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &Quantity)> {
        self.parameters.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Free-form metadata.
    #[must_use]
    pub fn meta(&self) -> &IndexMap<String, Value> { &self.meta }

    /// Reconstruct the keyword arguments that rebuild this instance.
    #[must_use]
    pub fn to_kwargs(&self) -> Kwargs {
        let mut kwargs = Kwargs::new();
        if let Some(name) = &self.name {
            kwargs.insert(NAME_KEYWORD, name.as_str());
        }
        for (key, quantity) in &self.parameters {
            kwargs.insert(key.as_str(), quantity.clone());
        }
        if !self.meta.is_empty() {
            let meta: serde_json::Map<String, Value> =
                self.meta.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            kwargs.insert(META_KEYWORD, Value::Object(meta));
        }
        kwargs
    }

    /// Copy this instance, overriding the keywords in `changes`.
    ///
    /// # Errors
    ///
    /// Returns whatever the class constructor returns for the merged keywords.
    pub fn clone_with(&self, changes: Kwargs) -> Result<Self> {
        let mut kwargs = self.to_kwargs();
        for (key, value) in changes {
            kwargs.insert(key, value);
        }
        self.class.instantiate(kwargs)
    }

    /// Returns true if `other` has the same class and parameters, ignoring
    /// the name.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.qualname() == other.qualname() && self.parameters == other.parameters
    }
}

impl PartialEq for Cosmology {
    fn eq(&self, other: &Self) -> bool { self.is_equivalent(other) && self.name == other.name }
}

impl fmt::Display for Cosmology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.qualname())?;
        match &self.name {
            Some(name) => write!(f, "name={name:?}")?,
            None => f.write_str("name=None")?,
        }
        for (key, quantity) in &self.parameters {
            write!(f, ", {key}={quantity}")?;
        }
        f.write_str(")")
    }
}
