//! Physical units and unit-carrying quantities.
//!
//! Only the handful of units the built-in cosmologies need are modelled.
//! Units never convert into one another: a parameter declared in kelvin only
//! accepts bare numbers or quantities already in kelvin.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CosmologyError;

/// Units understood by cosmology parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Dimensionless quantity.
    #[default]
    #[serde(rename = "")]
    Dimensionless,
    /// Temperature in kelvin.
    #[serde(rename = "K")]
    Kelvin,
    /// Hubble-parameter unit.
    #[serde(rename = "km / (Mpc s)")]
    KmPerSecPerMpc,
    /// Energy in electronvolts, used for neutrino masses.
    #[serde(rename = "eV")]
    ElectronVolt,
}

impl Unit {
    /// Canonical symbol of the unit.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Dimensionless => "",
            Unit::Kelvin => "K",
            Unit::KmPerSecPerMpc => "km / (Mpc s)",
            Unit::ElectronVolt => "eV",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Dimensionless => f.write_str("dimensionless"),
            other => f.write_str(other.symbol()),
        }
    }
}

impl FromStr for Unit {
    type Err = CosmologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "dimensionless" => Ok(Unit::Dimensionless),
            "K" => Ok(Unit::Kelvin),
            "km / (Mpc s)" | "km/(Mpc s)" | "km / s / Mpc" | "km/s/Mpc" => {
                Ok(Unit::KmPerSecPerMpc)
            }
            "eV" => Ok(Unit::ElectronVolt),
            other => Err(CosmologyError::InvalidUnit(other.to_owned())),
        }
    }
}

/// Numeric part of a [`Quantity`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Magnitude {
    /// A single value.
    Scalar(f64),
    /// A fixed-length array of values, e.g. one mass per neutrino species.
    Array(Vec<f64>),
}

impl From<f64> for Magnitude {
    fn from(value: f64) -> Self { Self::Scalar(value) }
}

impl From<Vec<f64>> for Magnitude {
    fn from(values: Vec<f64>) -> Self { Self::Array(values) }
}

/// A value tagged with a [`Unit`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Scalar or array magnitude.
    pub value: Magnitude,
    /// Unit of `value`.
    pub unit: Unit,
}

impl Quantity {
    /// Create a quantity from any magnitude.
    #[must_use]
    pub fn new(value: impl Into<Magnitude>, unit: Unit) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }

    /// Create a scalar quantity.
    #[must_use]
    pub fn scalar(value: f64, unit: Unit) -> Self { Self::new(value, unit) }

    /// Create an array quantity.
    #[must_use]
    pub fn array(values: Vec<f64>, unit: Unit) -> Self { Self::new(values, unit) }

    /// Create a dimensionless scalar.
    #[must_use]
    pub fn dimensionless(value: f64) -> Self { Self::scalar(value, Unit::Dimensionless) }

    /// Returns true if the magnitude is a single value.
    #[must_use]
    pub fn is_scalar(&self) -> bool { matches!(self.value, Magnitude::Scalar(_)) }

    /// The scalar magnitude, if this is not an array.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self.value {
            Magnitude::Scalar(v) => Some(v),
            Magnitude::Array(_) => None,
        }
    }

    /// The magnitude flattened into a vector.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        match &self.value {
            Magnitude::Scalar(v) => vec![*v],
            Magnitude::Array(vs) => vs.clone(),
        }
    }

    /// Interpret a keyword or payload value as a quantity in `unit`.
    ///
    /// Bare numbers and arrays of numbers take `unit`. Objects of the form
    /// `{"value": .., "unit": ..}` must already carry `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::UnitMismatch`] when an explicit unit differs
    /// from `unit`, and [`CosmologyError::InvalidField`] when `value` has no
    /// numeric interpretation.
    pub fn attach_unit(parameter: &str, value: Value, unit: Unit) -> Result<Self, CosmologyError> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(|v| Self::scalar(v, unit))
                .ok_or_else(|| CosmologyError::invalid_field(parameter, "number out of range")),
            Value::Array(items) => {
                let values = items
                    .into_iter()
                    .map(|item| {
                        item.as_f64().ok_or_else(|| {
                            CosmologyError::invalid_field(parameter, "array items must be numbers")
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::array(values, unit))
            }
            Value::Object(_) => {
                let quantity: Quantity = serde_json::from_value(value).map_err(|error| {
                    CosmologyError::invalid_field(parameter, error.to_string())
                })?;
                if quantity.unit != unit {
                    return Err(CosmologyError::UnitMismatch {
                        parameter: parameter.to_owned(),
                        expected: unit,
                        actual: quantity.unit,
                    });
                }
                Ok(quantity)
            }
            other => Err(CosmologyError::invalid_field(
                parameter,
                format!("expected a number, array, or quantity, got {other}"),
            )),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Magnitude::Scalar(v) => write!(f, "{v}")?,
            Magnitude::Array(vs) => write!(f, "{vs:?}")?,
        }
        if self.unit != Unit::Dimensionless {
            write!(f, " {}", self.unit.symbol())?;
        }
        Ok(())
    }
}

impl From<Quantity> for Value {
    fn from(quantity: Quantity) -> Self {
        let value = match quantity.value {
            Magnitude::Scalar(v) => Value::from(v),
            Magnitude::Array(vs) => Value::from(vs),
        };
        let mut map = Map::new();
        map.insert("value".to_owned(), value);
        map.insert("unit".to_owned(), Value::from(quantity.unit.symbol()));
        Value::Object(map)
    }
}
