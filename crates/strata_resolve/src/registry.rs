//! Per-attempt accumulator of resolved files.

use crate::files::FileMap;
use std::sync::Mutex;

/// Accumulates every file read during a single compilation attempt.
///
/// Import finders record through a shared reference while the orchestrator
/// retains ownership, so the registry uses interior mutability. Each
/// candidate version gets its own registry; results are never shared across
/// retries of different versions.
#[derive(Default, Debug)]
pub struct FileRegistry {
    files: Mutex<FileMap>,
}

impl FileRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a resolved file under its original import path.
    pub fn record(&self, path: &str, contents: &str) {
        let mut files = self.files.lock().unwrap();
        files.insert(path, contents);
    }

    /// Returns a snapshot of the recorded files without draining.
    pub fn snapshot(&self) -> FileMap {
        self.files.lock().unwrap().clone()
    }

    /// Consumes the registry, returning the recorded files.
    pub fn into_files(self) -> FileMap {
        self.files.into_inner().unwrap()
    }
}
