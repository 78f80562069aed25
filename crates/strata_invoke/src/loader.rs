//! Compiler module loading.
//!
//! Discovering and installing compiler modules on disk is outside this
//! crate's scope; the orchestration core only needs "give me a callable
//! module for exactly this release". [`CompilerLoader`] is that seam, with
//! [`ModuleRegistry`] as the in-process implementation and [`CachingLoader`]
//! as an instance-scoped cache, so callers control invalidation by dropping
//! the loader.

use crate::module::CompilerModule;
use semver::Version;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Errors produced while loading a compiler module.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No module is resolvable for the requested release.
    #[error("no compiler module available for version {0}")]
    NotFound(Version),
}

/// The module-loading collaborator contract.
///
/// Given an exact release, returns a callable module implementing that
/// release's calling convention. Versions are exact by construction here:
/// selection strategies only ever produce concrete releases, and the
/// string-facing seam rejects operator-qualified expressions before a
/// loader is consulted.
pub trait CompilerLoader {
    /// Loads the module for the exact release, or fails if none resolves.
    fn load(&self, version: &Version) -> Result<Arc<dyn CompilerModule>, LoadError>;
}

/// A static registry of pre-constructed modules keyed by release.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: BTreeMap<Version, Arc<dyn CompilerModule>>,
}

impl ModuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module for a release, replacing any previous entry.
    pub fn register(&mut self, version: Version, module: Arc<dyn CompilerModule>) {
        self.modules.insert(version, module);
    }

    /// The releases this registry can load, in ascending order.
    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.modules.keys()
    }
}

impl CompilerLoader for ModuleRegistry {
    fn load(&self, version: &Version) -> Result<Arc<dyn CompilerModule>, LoadError> {
        self.modules
            .get(version)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(version.clone()))
    }
}

/// A loader wrapper that memoizes successful loads per instance.
///
/// Useful over loaders with expensive resolution. Failed loads are not
/// cached; a module installed between attempts becomes visible on the next
/// call.
pub struct CachingLoader<L> {
    inner: L,
    cache: Mutex<HashMap<Version, Arc<dyn CompilerModule>>>,
}

impl<L: CompilerLoader> CachingLoader<L> {
    /// Wraps a loader with a fresh, empty cache.
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of modules currently cached.
    pub fn cached_count(&self) -> usize {
        self.cache.lock().unwrap().len()
    }
}

impl<L: CompilerLoader> CompilerLoader for CachingLoader<L> {
    fn load(&self, version: &Version) -> Result<Arc<dyn CompilerModule>, LoadError> {
        let mut cache = self.cache.lock().unwrap();

        if let Some(module) = cache.get(version) {
            return Ok(module.clone());
        }

        let module = self.inner.load(version)?;
        cache.insert(version.clone(), module.clone());

        Ok(module)
    }
}
