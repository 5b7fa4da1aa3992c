//! Compact binary records encoded with `bincode`.
//!
//! `bincode` cannot carry self-describing values, so the record stores each
//! parameter as a flat list of magnitudes with its unit and shape, and keeps
//! the metadata as JSON text.

use bincode::{
    config,
    serde::{decode_from_slice, encode_to_vec},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    class::{META_KEYWORD, NAME_KEYWORD},
    cosmology::Cosmology,
    error::{CosmologyError, Result},
    io::mapping::{COSMOLOGY_KEY, Mapping, from_mapping},
    kwargs::Kwargs,
    registry::ClassRegistry,
    units::{Quantity, Unit},
};

#[derive(Debug, Serialize, Deserialize)]
struct EncodedParameter {
    name: String,
    unit: Unit,
    scalar: bool,
    values: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Record {
    cosmology: String,
    name: Option<String>,
    parameters: Vec<EncodedParameter>,
    meta: String,
}

/// Encode a cosmology as a `bincode` record.
///
/// # Errors
///
/// Rejects any keyword and propagates encoding failures.
pub fn to_bincode(cosmo: &Cosmology, kwargs: Kwargs) -> Result<Vec<u8>> {
    kwargs.ensure_empty("to_bincode")?;
    let record = Record {
        cosmology: cosmo.qualname().to_owned(),
        name: cosmo.name().map(str::to_owned),
        parameters: cosmo
            .parameters()
            .map(|(name, quantity)| EncodedParameter {
                name: name.to_owned(),
                unit: quantity.unit,
                scalar: quantity.is_scalar(),
                values: quantity.values(),
            })
            .collect(),
        meta: serde_json::to_string(cosmo.meta())?,
    };
    Ok(encode_to_vec(&record, config::standard())?)
}

/// Decode a cosmology from a `bincode` record.
///
/// Accepts the `cosmology` keyword with the same meaning as in
/// [`from_mapping`].
///
/// # Errors
///
/// Rejects other keywords and trailing bytes, and propagates decoding,
/// lookup, and constructor errors.
pub fn from_bincode(
    registry: &ClassRegistry,
    bytes: Vec<u8>,
    mut kwargs: Kwargs,
) -> Result<Cosmology> {
    let requested = kwargs.take_str(COSMOLOGY_KEY)?;
    kwargs.ensure_empty("from_bincode")?;

    let (record, consumed): (Record, usize) = decode_from_slice(&bytes, config::standard())?;
    if consumed != bytes.len() {
        return Err(CosmologyError::invalid_field(
            "payload",
            format!("{} trailing bytes after record", bytes.len() - consumed),
        ));
    }

    let mut mapping = Mapping::new();
    mapping.insert(COSMOLOGY_KEY.to_owned(), Value::from(record.cosmology));
    mapping.insert(
        NAME_KEYWORD.to_owned(),
        record.name.map_or(Value::Null, Value::from),
    );
    for parameter in record.parameters {
        let quantity = if !parameter.scalar {
            Quantity::array(parameter.values, parameter.unit)
        } else if let [value] = parameter.values[..] {
            Quantity::scalar(value, parameter.unit)
        } else {
            return Err(CosmologyError::invalid_field(
                parameter.name,
                "scalar parameter must hold exactly one value",
            ));
        };
        mapping.insert(parameter.name, quantity.into());
    }
    let meta: Value = serde_json::from_str(&record.meta)?;
    mapping.insert(META_KEYWORD.to_owned(), meta);

    let forwarded = match requested {
        Some(class) => Kwargs::new().with(COSMOLOGY_KEY, class),
        None => Kwargs::new(),
    };
    from_mapping(registry, mapping, forwarded)
}
