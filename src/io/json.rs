//! JSON documents built on the mapping representation.

use crate::{
    cosmology::Cosmology,
    error::Result,
    io::mapping::{COSMOLOGY_KEY, Mapping, from_mapping, to_mapping},
    kwargs::Kwargs,
    registry::ClassRegistry,
};

/// Serialize a cosmology as JSON.
///
/// Keywords:
/// - `pretty` (bool, default `false`): indent the output.
///
/// # Errors
///
/// Rejects other keywords and propagates `serde_json` failures.
pub fn to_json(cosmo: &Cosmology, mut kwargs: Kwargs) -> Result<String> {
    let pretty = kwargs.take_bool("pretty", false)?;
    kwargs.ensure_empty("to_json")?;
    let mapping = to_mapping(cosmo, Kwargs::new())?;
    let text = if pretty {
        serde_json::to_string_pretty(&mapping)?
    } else {
        serde_json::to_string(&mapping)?
    };
    Ok(text)
}

/// Parse a cosmology from JSON.
///
/// Accepts the `cosmology` keyword with the same meaning as in
/// [`from_mapping`].
///
/// # Errors
///
/// Rejects other keywords, and propagates parse, lookup, and constructor
/// errors.
pub fn from_json(registry: &ClassRegistry, json: String, mut kwargs: Kwargs) -> Result<Cosmology> {
    let requested = kwargs.take_str(COSMOLOGY_KEY)?;
    kwargs.ensure_empty("from_json")?;
    let mapping: Mapping = serde_json::from_str(&json)?;
    let forwarded = match requested {
        Some(class) => Kwargs::new().with(COSMOLOGY_KEY, class),
        None => Kwargs::new(),
    };
    from_mapping(registry, mapping, forwarded)
}
