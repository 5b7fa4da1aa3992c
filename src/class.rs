//! Cosmology class descriptors.
//!
//! A [`CosmologyClass`] is the runtime description of a cosmology type: its
//! qualified name, its declared [`Parameter`]s, and how its constructor
//! treats keywords it does not declare. Instances are created with
//! [`CosmologyClass::instantiate`].

use std::sync::Arc;

use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

use crate::{
    cosmology::Cosmology,
    error::{CosmologyError, Result},
    kwargs::Kwargs,
    parameter::Parameter,
};

/// Keyword carrying the instance name.
pub const NAME_KEYWORD: &str = "name";
/// Keyword carrying the instance metadata.
pub const META_KEYWORD: &str = "meta";

/// Runtime description of a cosmology type.
#[derive(Clone, Debug, PartialEq)]
pub struct CosmologyClass {
    qualname: String,
    parameters: Vec<Parameter>,
    default_name: Option<String>,
    accepts_extra: bool,
}

impl CosmologyClass {
    /// Start declaring a class registered under `qualname`.
    #[must_use]
    pub fn builder(qualname: impl Into<String>) -> CosmologyClassBuilder {
        CosmologyClassBuilder {
            class: CosmologyClass {
                qualname: qualname.into(),
                parameters: Vec::new(),
                default_name: None,
                accepts_extra: false,
            },
        }
    }

    /// Qualified name used as the registry key.
    #[must_use]
    pub fn qualname(&self) -> &str { &self.qualname }

    /// Declared parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] { &self.parameters }

    /// Look up a declared parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Name given to instances constructed without a `name` keyword.
    #[must_use]
    pub fn default_name(&self) -> Option<&str> { self.default_name.as_deref() }

    /// Whether the constructor ignores undeclared keywords.
    #[must_use]
    pub fn accepts_extra_keywords(&self) -> bool { self.accepts_extra }

    /// Construct an instance from keyword arguments.
    ///
    /// `name` and `meta` are consumed first, then every declared parameter,
    /// falling back to its default. Any keyword left over is rejected unless
    /// the class accepts extra keywords, in which case it is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::MissingParameter`] for a parameter with
    /// neither a value nor a default, [`CosmologyError::UnexpectedKeyword`]
    /// for leftovers, and propagates unit and value errors from
    /// [`Parameter::coerce`].
    pub fn instantiate(self: &Arc<Self>, mut kwargs: Kwargs) -> Result<Cosmology> {
        let name = kwargs
            .take_str(NAME_KEYWORD)?
            .or_else(|| self.default_name.clone());
        let meta = take_meta(&mut kwargs)?;

        let mut values = IndexMap::with_capacity(self.parameters.len());
        for parameter in &self.parameters {
            let quantity = match kwargs.remove(parameter.name()) {
                Some(raw) => parameter.coerce(raw)?,
                None => parameter.default().cloned().ok_or_else(|| {
                    CosmologyError::MissingParameter {
                        class: self.qualname.clone(),
                        parameter: parameter.name().to_owned(),
                    }
                })?,
            };
            values.insert(parameter.name().to_owned(), quantity);
        }

        if self.accepts_extra {
            if !kwargs.is_empty() {
                debug!(
                    "{}: ignoring extra keywords {:?}",
                    self.qualname,
                    kwargs.keys().collect::<Vec<_>>()
                );
            }
        } else {
            kwargs.ensure_empty(&self.qualname)?;
        }

        Ok(Cosmology::from_parts(Arc::clone(self), name, values, meta))
    }
}

fn take_meta(kwargs: &mut Kwargs) -> Result<IndexMap<String, Value>> {
    match kwargs.remove(META_KEYWORD) {
        None | Some(Value::Null) => Ok(IndexMap::new()),
        Some(Value::Object(map)) => Ok(map.into_iter().collect()),
        Some(_) => Err(CosmologyError::InvalidKeyword {
            keyword: META_KEYWORD.to_owned(),
            expected: "a mapping",
        }),
    }
}

/// Builder returned by [`CosmologyClass::builder`].
#[derive(Debug)]
pub struct CosmologyClassBuilder {
    class: CosmologyClass,
}

impl CosmologyClassBuilder {
    /// Declare a parameter. Declaration order is preserved by every format.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.class.parameters.push(parameter);
        self
    }

    /// Name given to instances constructed without a `name` keyword.
    #[must_use]
    pub fn default_name(mut self, name: impl Into<String>) -> Self {
        self.class.default_name = Some(name.into());
        self
    }

    /// Ignore undeclared keywords instead of rejecting them.
    #[must_use]
    pub fn accept_extra_keywords(mut self) -> Self {
        self.class.accepts_extra = true;
        self
    }

    /// Finish the declaration.
    #[must_use]
    pub fn build(self) -> Arc<CosmologyClass> { Arc::new(self.class) }
}
