//! Declarative parameter descriptors for cosmology classes.

use serde_json::Value;

use crate::{
    error::Result,
    units::{Quantity, Unit},
};

/// A named, unit-carrying field declared by a [`CosmologyClass`](crate::class::CosmologyClass).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    name: String,
    unit: Unit,
    default: Option<Quantity>,
    doc: Option<String>,
}

impl Parameter {
    /// Declare a dimensionless parameter with no default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: Unit::Dimensionless,
            default: None,
            doc: None,
        }
    }

    /// Set the unit values are stored in.
    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the default magnitude, expressed in the parameter's unit.
    ///
    /// Call after [`with_unit`](Self::with_unit).
    #[must_use]
    pub fn with_default(mut self, value: impl Into<crate::units::Magnitude>) -> Self {
        self.default = Some(Quantity::new(value, self.unit));
        self
    }

    /// Attach a one-line description.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    #[must_use]
    pub fn unit(&self) -> Unit { self.unit }

    #[must_use]
    pub fn default(&self) -> Option<&Quantity> { self.default.as_ref() }

    #[must_use]
    pub fn doc(&self) -> Option<&str> { self.doc.as_deref() }

    /// Convert a raw keyword value into a quantity in this parameter's unit.
    ///
    /// # Errors
    ///
    /// Propagates unit mismatches and malformed values from
    /// [`Quantity::attach_unit`].
    pub fn coerce(&self, value: Value) -> Result<Quantity> {
        Quantity::attach_unit(&self.name, value, self.unit)
    }
}
