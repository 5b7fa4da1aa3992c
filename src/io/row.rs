//! Single table rows with unit-tagged columns.
//!
//! A [`Row`] mirrors one row of a table: an ordered list of named columns,
//! each optionally carrying a unit, plus table-level metadata. Parameter
//! columns carry the parameter's unit and the bare magnitude; the class name
//! lives either in a `cosmology` column or in the metadata.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    class::{META_KEYWORD, NAME_KEYWORD},
    cosmology::Cosmology,
    error::{CosmologyError, Result},
    io::mapping::{COSMOLOGY_KEY, Mapping, from_mapping},
    kwargs::Kwargs,
    registry::ClassRegistry,
    units::{Magnitude, Unit},
};

/// One named cell of a [`Row`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Unit of the column, if it holds a physical quantity.
    pub unit: Option<Unit>,
    /// Cell value.
    pub value: Value,
}

/// A table row with table-level metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Columns in table order.
    pub columns: Vec<Column>,
    /// Table metadata.
    pub meta: IndexMap<String, Value>,
}

impl Row {
    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

/// Convert a cosmology into a table row.
///
/// Keywords:
/// - `cosmology_in_meta` (bool, default `false`): store the class name in the row metadata
///   instead of a leading `cosmology` column.
///
/// # Errors
///
/// Rejects unknown keywords, and returns
/// [`CosmologyError::InvalidField`] when `cosmology_in_meta` is set but the
/// metadata already has a `cosmology` entry.
pub fn to_row(cosmo: &Cosmology, mut kwargs: Kwargs) -> Result<Row> {
    let cosmology_in_meta = kwargs.take_bool("cosmology_in_meta", false)?;
    kwargs.ensure_empty("to_row")?;

    let mut row = Row {
        columns: Vec::new(),
        meta: cosmo.meta().clone(),
    };
    if cosmology_in_meta {
        if row.meta.contains_key(COSMOLOGY_KEY) {
            return Err(CosmologyError::invalid_field(
                COSMOLOGY_KEY,
                "metadata key collides with the class name entry",
            ));
        }
        row.meta
            .insert(COSMOLOGY_KEY.to_owned(), Value::from(cosmo.qualname()));
    } else {
        row.columns.push(Column {
            name: COSMOLOGY_KEY.to_owned(),
            unit: None,
            value: Value::from(cosmo.qualname()),
        });
    }
    row.columns.push(Column {
        name: NAME_KEYWORD.to_owned(),
        unit: None,
        value: cosmo.name().map_or(Value::Null, Value::from),
    });
    for (key, quantity) in cosmo.parameters() {
        let value = match &quantity.value {
            Magnitude::Scalar(v) => Value::from(*v),
            Magnitude::Array(vs) => Value::from(vs.clone()),
        };
        row.columns.push(Column {
            name: key.to_owned(),
            unit: Some(quantity.unit),
            value,
        });
    }
    Ok(row)
}

/// Build a cosmology from a table row.
///
/// Accepts the `cosmology` keyword with the same meaning as in
/// [`from_mapping`]. The class name comes from a `cosmology` column when
/// there is one, and a `cosmology` metadata entry is then left as metadata.
/// Without the column, that metadata entry names the class.
///
/// # Errors
///
/// Rejects other keywords and duplicate column names, and propagates
/// lookup and constructor errors.
pub fn from_row(registry: &ClassRegistry, row: Row, mut kwargs: Kwargs) -> Result<Cosmology> {
    let requested = kwargs.take_str(COSMOLOGY_KEY)?;
    kwargs.ensure_empty("from_row")?;

    let Row { columns, mut meta } = row;
    let mut mapping = Mapping::new();
    if !columns.iter().any(|column| column.name == COSMOLOGY_KEY) {
        if let Some(class) = meta.shift_remove(COSMOLOGY_KEY) {
            mapping.insert(COSMOLOGY_KEY.to_owned(), class);
        }
    }
    for column in columns {
        let value = match column.unit {
            Some(unit) => {
                let mut quantity = serde_json::Map::new();
                quantity.insert("value".to_owned(), column.value);
                quantity.insert("unit".to_owned(), Value::from(unit.symbol()));
                Value::Object(quantity)
            }
            None => column.value,
        };
        if mapping.insert(column.name.clone(), value).is_some() {
            return Err(CosmologyError::invalid_field(column.name, "duplicate column"));
        }
    }
    let meta: serde_json::Map<String, Value> = meta.into_iter().collect();
    mapping.insert(META_KEYWORD.to_owned(), Value::Object(meta));

    let forwarded = match requested {
        Some(class) => Kwargs::new().with(COSMOLOGY_KEY, class),
        None => Kwargs::new(),
    };
    from_mapping(registry, mapping, forwarded)
}
