//! Import finder callbacks handed to compiler modules.
//!
//! A finder maps an import path to either the file's contents or an error
//! message, and never panics or propagates: the compiler invocation contract
//! requires a well-formed result for every lookup, with unresolved imports
//! surfacing as compiler diagnostics rather than orchestration failures.

use crate::registry::FileRegistry;
use crate::remapping::Remapping;
use crate::resolver::{
    FileSystemResolver, ImportResolver, LocalPackageResolver, RemappingResolver,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The result of one import lookup, in the wire shape compiler modules
/// expect: `{"contents": ...}` on success, `{"error": ...}` otherwise.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FinderResult {
    /// The import resolved; carries the file's full contents.
    Contents {
        /// Source text of the resolved file.
        contents: String,
    },
    /// The import could not be resolved; carries a diagnostic message.
    Error {
        /// Why resolution failed.
        error: String,
    },
}

impl FinderResult {
    /// Builds a success result.
    pub fn contents(contents: impl Into<String>) -> Self {
        FinderResult::Contents {
            contents: contents.into(),
        }
    }

    /// Builds an error result.
    pub fn error(message: impl Into<String>) -> Self {
        FinderResult::Error {
            error: message.into(),
        }
    }

    /// Returns `true` for the success variant.
    pub fn is_contents(&self) -> bool {
        matches!(self, FinderResult::Contents { .. })
    }
}

/// The import lookup callback contract.
pub trait ImportFinder {
    /// Resolves one import path to contents or an error message.
    fn find(&self, import_path: &str) -> FinderResult;
}

/// A finder backed by the filesystem resolver chain.
///
/// Resolution order: importer-relative filesystem lookup, then remapping
/// rewrite, then ancestor package directories; the first match wins. Every
/// successful lookup is recorded into the attempt's [`FileRegistry`] under
/// the original import path.
pub struct FileSystemFinder<'a> {
    resolvers: Vec<Box<dyn ImportResolver>>,
    registry: &'a FileRegistry,
}

impl<'a> FileSystemFinder<'a> {
    /// Builds the resolver chain for an entry file.
    ///
    /// `remappings` is non-empty only for compiler generations without
    /// native remapping support; later generations receive remappings as a
    /// settings field and the finder performs no rewriting.
    pub fn new(entry_file: &Path, remappings: Vec<Remapping>, registry: &'a FileRegistry) -> Self {
        let base = entry_file.parent().unwrap_or_else(|| Path::new("."));
        let location = base.to_string_lossy().into_owned();

        let resolvers: Vec<Box<dyn ImportResolver>> = vec![
            Box::new(FileSystemResolver::new(base)),
            Box::new(RemappingResolver::new(remappings, location)),
            Box::new(LocalPackageResolver::new(base)),
        ];

        Self {
            resolvers,
            registry,
        }
    }
}

impl ImportFinder for FileSystemFinder<'_> {
    fn find(&self, import_path: &str) -> FinderResult {
        for resolver in &self.resolvers {
            let Some(resolved) = resolver.resolve(import_path) else {
                continue;
            };

            // I/O failures convert to finder errors, never propagate.
            return match fs::read_to_string(&resolved) {
                Ok(contents) => {
                    self.registry.record(import_path, &contents);
                    FinderResult::contents(contents)
                }
                Err(err) => FinderResult::error(err.to_string()),
            };
        }

        FinderResult::error(format!("Unable to find import path \"{import_path}\""))
    }
}

/// One entry of an in-memory import store.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StorageEntry {
    /// The entry's source text; a missing value is a storage error, not a
    /// "not found".
    #[serde(default)]
    pub source: Option<String>,
}

/// An in-memory import store keyed by import path.
pub type MemoryStorage = BTreeMap<String, StorageEntry>;

/// A finder serving imports from a [`MemoryStorage`], with no filesystem
/// access. Used when recompiling a structured document whose sources are
/// already in hand.
pub struct MemoryFinder<'a> {
    storage: &'a MemoryStorage,
    registry: &'a FileRegistry,
}

impl<'a> MemoryFinder<'a> {
    /// Creates a finder over the given storage.
    pub fn new(storage: &'a MemoryStorage, registry: &'a FileRegistry) -> Self {
        Self { storage, registry }
    }
}

impl ImportFinder for MemoryFinder<'_> {
    fn find(&self, import_path: &str) -> FinderResult {
        let Some(entry) = self.storage.get(import_path) else {
            return FinderResult::error(format!(
                "Import path \"{import_path}\" not found in storage"
            ));
        };

        let Some(contents) = &entry.source else {
            return FinderResult::error(format!(
                "Entry at \"{import_path}\" contains no \"source\" property"
            ));
        };

        self.registry.record(import_path, contents);

        FinderResult::contents(contents.clone())
    }
}
