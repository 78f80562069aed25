//! The successful compilation result.

use semver::Version;
use serde_json::Value;
use strata_common::{Generation, Schema};
use strata_resolve::FileMap;

/// The outcome of a successful compilation attempt.
#[derive(Clone, Debug)]
pub struct CompileResult {
    /// The compiler's raw output, in the emitting generation's native
    /// schema; handed untouched to the downstream AST consumer.
    pub data: Value,
    /// The release that produced `data`, or `None` when the data came from
    /// a pre-compiled document and no compiler ran.
    pub compiler_version: Option<Version>,
    /// Every file read during the producing attempt, keyed by import path
    /// as referenced. Immutable once returned.
    pub files: FileMap,
}

impl CompileResult {
    /// The schema generation of `data`, for the downstream AST consumer.
    ///
    /// `None` when no compiler ran and the document's own generation is
    /// whatever it was originally produced with.
    pub fn schema(&self) -> Option<Schema> {
        self.compiler_version
            .as_ref()
            .map(|version| Generation::of(version).schema())
    }
}
