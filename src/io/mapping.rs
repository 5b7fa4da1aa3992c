//! Conversion between cosmologies and ordered field mappings.
//!
//! A mapping holds the class under `cosmology`, the instance name under
//! `name`, one entry per declared parameter (a `{"value", "unit"}` object),
//! and the metadata under `meta`. Every other format in this crate is built
//! on top of it.

use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    class::{META_KEYWORD, NAME_KEYWORD},
    cosmology::Cosmology,
    error::{CosmologyError, Result},
    kwargs::Kwargs,
    registry::ClassRegistry,
};

/// Key holding the qualified class name.
pub const COSMOLOGY_KEY: &str = "cosmology";

/// Ordered field mapping.
pub type Mapping = IndexMap<String, Value>;

/// Convert a cosmology into a mapping.
///
/// Keywords:
/// - `move_from_meta` (bool, default `false`): place metadata entries at the top level instead of
///   under `meta`.
///
/// # Errors
///
/// Returns [`CosmologyError::UnexpectedKeyword`] for unknown keywords and
/// [`CosmologyError::InvalidField`] if a metadata key collides with a field
/// when `move_from_meta` is set.
pub fn to_mapping(cosmo: &Cosmology, mut kwargs: Kwargs) -> Result<Mapping> {
    let move_from_meta = kwargs.take_bool("move_from_meta", false)?;
    kwargs.ensure_empty("to_mapping")?;

    let mut mapping = Mapping::new();
    mapping.insert(COSMOLOGY_KEY.to_owned(), Value::from(cosmo.qualname()));
    mapping.insert(
        NAME_KEYWORD.to_owned(),
        cosmo.name().map_or(Value::Null, Value::from),
    );
    for (key, quantity) in cosmo.parameters() {
        mapping.insert(key.to_owned(), quantity.clone().into());
    }

    if move_from_meta {
        for (key, value) in cosmo.meta() {
            if mapping.contains_key(key) {
                return Err(CosmologyError::invalid_field(
                    key.as_str(),
                    "metadata key collides with a cosmology field",
                ));
            }
            mapping.insert(key.clone(), value.clone());
        }
    } else {
        let meta: serde_json::Map<String, Value> = cosmo
            .meta()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        mapping.insert(META_KEYWORD.to_owned(), Value::Object(meta));
    }
    Ok(mapping)
}

/// Remove the class name from `mapping`, reconciling it with the
/// `cosmology` keyword when both are given.
pub(crate) fn resolve_class_name(
    mapping: &mut Mapping,
    requested: Option<String>,
) -> Result<String> {
    let found = match mapping.shift_remove(COSMOLOGY_KEY) {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => Some(name),
        Some(_) => {
            return Err(CosmologyError::invalid_field(
                COSMOLOGY_KEY,
                "class name must be a string",
            ));
        }
    };
    match (found, requested) {
        (Some(found), Some(expected)) if found != expected => {
            Err(CosmologyError::ClassMismatch { expected, found })
        }
        (Some(name), _) | (None, Some(name)) => Ok(name),
        (None, None) => Err(CosmologyError::invalid_field(
            COSMOLOGY_KEY,
            "no class recorded in payload and none requested",
        )),
    }
}

/// Build a cosmology from a mapping.
///
/// Keywords:
/// - `cosmology` (string): expected class; must agree with the mapping's `cosmology` entry if
///   both are present.
/// - `move_to_meta` (bool, default `false`): put entries that are not declared parameters into
///   the metadata instead of passing them to the constructor. Ignored for classes that accept
///   extra keywords. Existing metadata wins on collision.
///
/// # Errors
///
/// Propagates class lookup and constructor errors, and rejects unknown
/// keywords.
pub fn from_mapping(
    registry: &ClassRegistry,
    mapping: Mapping,
    mut kwargs: Kwargs,
) -> Result<Cosmology> {
    let move_to_meta = kwargs.take_bool("move_to_meta", false)?;
    let requested = kwargs.take_str(COSMOLOGY_KEY)?;
    kwargs.ensure_empty("from_mapping")?;

    let mut mapping = mapping;
    let class = registry.lookup(&resolve_class_name(&mut mapping, requested)?)?;

    let mut meta = match mapping.shift_remove(META_KEYWORD) {
        None | Some(Value::Null) => serde_json::Map::new(),
        Some(Value::Object(map)) => map,
        Some(_) => return Err(CosmologyError::invalid_field(META_KEYWORD, "must be a mapping")),
    };

    let divert = move_to_meta && !class.accepts_extra_keywords();
    let mut args = Kwargs::new();
    for (key, value) in mapping {
        let declared = key == NAME_KEYWORD || class.parameter(&key).is_some();
        if divert && !declared {
            meta.entry(key).or_insert(value);
        } else {
            args.insert(key, value);
        }
    }
    if !meta.is_empty() {
        args.insert(META_KEYWORD, Value::Object(meta));
    }
    class.instantiate(args)
}
