//! Registry of cosmology classes keyed by qualified name.
//!
//! `ClassRegistry` is an explicit, shareable table: classes are added with
//! [`ClassRegistry::register`] and removed with
//! [`ClassRegistry::unregister`], which is a no-op for names that are not
//! present. Clones share the underlying table, so a registry can be handed
//! to fixtures and decoders by value. A process-wide instance holding the
//! built-in classes is available from [`ClassRegistry::global`].
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use log::debug;

use crate::{
    class::CosmologyClass,
    error::{CosmologyError, Result},
    realizations,
};

/// Concurrent table of cosmology classes keyed by qualified name.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry(Arc<DashMap<String, Arc<CosmologyClass>>>);

impl ClassRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Create a registry holding the built-in classes.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for class in realizations::builtin_classes() {
            registry
                .0
                .insert(class.qualname().to_owned(), Arc::clone(class));
        }
        registry
    }

    /// Process-wide registry, created with the built-in classes on first use.
    pub fn global() -> &'static ClassRegistry {
        static GLOBAL: OnceLock<ClassRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::with_builtins)
    }

    /// Register `class` under its qualified name.
    ///
    /// Registering an identical class again is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::DuplicateClass`] if a different class is
    /// already registered under the same name.
    pub fn register(&self, class: Arc<CosmologyClass>) -> Result<()> {
        let key = class.qualname().to_owned();
        match self.0.entry(key) {
            dashmap::mapref::entry::Entry::Occupied(existing) => {
                if Arc::ptr_eq(existing.get(), &class) || **existing.get() == *class {
                    Ok(())
                } else {
                    Err(CosmologyError::DuplicateClass(existing.key().clone()))
                }
            }
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                debug!("registered cosmology class {}", slot.key());
                slot.insert(class);
                Ok(())
            }
        }
    }

    /// Remove the class registered under `qualname`, if any.
    ///
    /// A missing entry is not an error; the removed class is returned when
    /// there was one.
    pub fn unregister(&self, qualname: &str) -> Option<Arc<CosmologyClass>> {
        let removed = self.0.remove(qualname).map(|(_, class)| class);
        match removed {
            Some(_) => debug!("unregistered cosmology class {qualname}"),
            None => debug!("cosmology class {qualname} was not registered; nothing to remove"),
        }
        removed
    }

    /// Look up a class by qualified name.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyError::UnknownClass`] if nothing is registered
    /// under `qualname`.
    pub fn lookup(&self, qualname: &str) -> Result<Arc<CosmologyClass>> {
        self.0
            .get(qualname)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| CosmologyError::UnknownClass(qualname.to_owned()))
    }

    /// Returns true if a class is registered under `qualname`.
    #[must_use]
    pub fn contains(&self, qualname: &str) -> bool { self.0.contains_key(qualname) }

    /// Registered qualified names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of registered classes.
    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns true if no class is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}
