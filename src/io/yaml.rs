//! YAML documents built on the mapping representation.

use crate::{
    cosmology::Cosmology,
    error::Result,
    io::mapping::{COSMOLOGY_KEY, Mapping, from_mapping, to_mapping},
    kwargs::Kwargs,
    registry::ClassRegistry,
};

/// Serialize a cosmology as a YAML document.
///
/// # Errors
///
/// Rejects any keyword and propagates `serde_yaml` failures.
pub fn to_yaml(cosmo: &Cosmology, kwargs: Kwargs) -> Result<String> {
    kwargs.ensure_empty("to_yaml")?;
    let mapping = to_mapping(cosmo, Kwargs::new())?;
    Ok(serde_yaml::to_string(&mapping)?)
}

/// Parse a cosmology from a YAML document.
///
/// Accepts the `cosmology` keyword with the same meaning as in
/// [`from_mapping`].
///
/// # Errors
///
/// Rejects other keywords, and propagates parse, lookup, and constructor
/// errors.
pub fn from_yaml(registry: &ClassRegistry, yaml: String, mut kwargs: Kwargs) -> Result<Cosmology> {
    let requested = kwargs.take_str(COSMOLOGY_KEY)?;
    kwargs.ensure_empty("from_yaml")?;
    let mapping: Mapping = serde_yaml::from_str(&yaml)?;
    let mut forwarded = Kwargs::new();
    if let Some(class) = requested {
        forwarded.insert(COSMOLOGY_KEY, class);
    }
    from_mapping(registry, mapping, forwarded)
}
