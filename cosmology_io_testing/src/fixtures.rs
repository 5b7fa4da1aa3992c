//! The two fixture sets shared by round-trip tests.
//!
//! Both hand out callables rather than results: a test decides which
//! keywords to pass (the format id, encoder options) while the fixture owns
//! the instance and the registry.

use cosmology_io::{ClassRegistry, Cosmology, FORMAT_KEYWORD, Kwargs, Payload, Result};

/// Encoder bound to the instance under test.
pub type BoundToFormat<'a, P> = Box<dyn Fn(Kwargs) -> Result<P> + 'a>;

/// Decoder producing a new instance from a payload.
pub type UnboundFromFormat<'a, P> = Box<dyn Fn(P, Kwargs) -> Result<Cosmology> + 'a>;

/// Rewrites keyword arguments before they reach a direct decoder.
pub type ArgNormalizer = fn(&mut Kwargs);

/// Remove a `format` keyword, if present.
///
/// Direct decoders do not take `format`; stripping it lets the same test
/// body drive both [`DispatchFixtures`] and [`DirectCallFixtures`].
pub fn strip_format_keyword(kwargs: &mut Kwargs) { kwargs.remove(FORMAT_KEYWORD); }

/// The `to_format`/`from_format` fixture contract.
pub trait IoFixtures {
    /// Serialized representation produced by `to_format`.
    type Payload;

    /// Registry decoders resolve classes in.
    fn registry(&self) -> &ClassRegistry;

    /// Encoder bound to `cosmo`; callers supply every keyword.
    fn to_format<'a>(&'a self, cosmo: &'a Cosmology) -> BoundToFormat<'a, Self::Payload>;

    /// Decoder taking a payload and keywords.
    fn from_format(&self) -> UnboundFromFormat<'_, Self::Payload>;
}

/// Fixtures that go through the generic dispatch entry points.
#[derive(Clone, Debug)]
pub struct DispatchFixtures {
    registry: ClassRegistry,
}

impl DispatchFixtures {
    /// Create fixtures resolving classes in `registry`.
    #[must_use]
    pub fn new(registry: &ClassRegistry) -> Self {
        Self {
            registry: registry.clone(),
        }
    }
}

impl IoFixtures for DispatchFixtures {
    type Payload = Payload;

    fn registry(&self) -> &ClassRegistry { &self.registry }

    fn to_format<'a>(&'a self, cosmo: &'a Cosmology) -> BoundToFormat<'a, Payload> {
        Box::new(move |kwargs: Kwargs| cosmo.to_format(kwargs))
    }

    fn from_format(&self) -> UnboundFromFormat<'_, Payload> {
        Box::new(move |payload: Payload, kwargs: Kwargs| {
            Cosmology::from_format(&self.registry, payload, kwargs)
        })
    }
}

/// A format's direct encoder and decoder.
pub struct ConverterFunctions<P> {
    /// `to_<format>`.
    pub to: fn(&Cosmology, Kwargs) -> Result<P>,
    /// `from_<format>`.
    pub from: fn(&ClassRegistry, P, Kwargs) -> Result<Cosmology>,
}

impl<P> ConverterFunctions<P> {
    /// Pair an encoder with its decoder.
    #[must_use]
    pub fn new(
        to: fn(&Cosmology, Kwargs) -> Result<P>,
        from: fn(&ClassRegistry, P, Kwargs) -> Result<Cosmology>,
    ) -> Self {
        Self { to, from }
    }
}

impl<P> Clone for ConverterFunctions<P> {
    fn clone(&self) -> Self { *self }
}

impl<P> Copy for ConverterFunctions<P> {}

impl<P> std::fmt::Debug for ConverterFunctions<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterFunctions").finish_non_exhaustive()
    }
}

/// Fixtures that call a format's direct functions.
///
/// The decoder applies an [`ArgNormalizer`] first;
/// [`strip_format_keyword`] by default.
#[derive(Debug)]
pub struct DirectCallFixtures<P> {
    functions: ConverterFunctions<P>,
    registry: ClassRegistry,
    normalize: ArgNormalizer,
}

impl<P> DirectCallFixtures<P> {
    /// Create fixtures for `functions`, resolving classes in `registry`.
    #[must_use]
    pub fn new(functions: ConverterFunctions<P>, registry: &ClassRegistry) -> Self {
        Self {
            functions,
            registry: registry.clone(),
            normalize: strip_format_keyword,
        }
    }

    /// Replace the keyword normalizer applied before decoding.
    #[must_use]
    pub fn with_normalizer(mut self, normalize: ArgNormalizer) -> Self {
        self.normalize = normalize;
        self
    }

    /// The converter pair under test.
    #[must_use]
    pub fn functions(&self) -> ConverterFunctions<P> { self.functions }
}

impl<P: 'static> IoFixtures for DirectCallFixtures<P> {
    type Payload = P;

    fn registry(&self) -> &ClassRegistry { &self.registry }

    fn to_format<'a>(&'a self, cosmo: &'a Cosmology) -> BoundToFormat<'a, P> {
        let to = self.functions.to;
        Box::new(move |kwargs: Kwargs| to(cosmo, kwargs))
    }

    fn from_format(&self) -> UnboundFromFormat<'_, P> {
        let from = self.functions.from;
        let normalize = self.normalize;
        Box::new(move |payload: P, mut kwargs: Kwargs| {
            normalize(&mut kwargs);
            from(&self.registry, payload, kwargs)
        })
    }
}
