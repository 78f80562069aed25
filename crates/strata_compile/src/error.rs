//! The orchestration error taxonomy.
//!
//! Configuration-class errors (bad remappings, bad version specifiers,
//! malformed documents) abort before any compiler runs. Per-version compile
//! failures are recovered locally and accumulated; only when every
//! candidate is exhausted do they surface together as
//! [`CompileFailedError`], with full per-version detail preserved.

use semver::Version;
use std::fmt;
use strata_resolve::RemappingError;
use strata_version::SelectionError;

/// One attempted, failed candidate version with its fatal diagnostics.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CompileFailure {
    /// The attempted release, when the attempt got far enough to pin one.
    pub compiler_version: Option<Version>,
    /// The fatal diagnostics (or the load/invoke error) of this attempt.
    pub errors: Vec<String>,
}

impl fmt::Display for CompileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.compiler_version {
            Some(version) => writeln!(f, "version {version}:")?,
            None => writeln!(f, "unversioned:")?,
        }

        for error in &self.errors {
            writeln!(f, "  {error}")?;
        }

        Ok(())
    }
}

/// Every candidate version was attempted and every attempt failed.
///
/// Carries the full `(version, diagnostics)` history in attempt order;
/// callers inspect `failures` rather than a collapsed message.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CompileFailedError {
    /// The failed attempts, in attempt order.
    pub failures: Vec<CompileFailure>,
}

impl CompileFailedError {
    /// Creates an aggregated failure from per-attempt records.
    pub fn new(failures: Vec<CompileFailure>) -> Self {
        Self { failures }
    }
}

impl fmt::Display for CompileFailedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "compilation failed for all {} attempted version(s):",
            self.failures.len()
        )?;

        for failure in &self.failures {
            write!(f, "{failure}")?;
        }

        Ok(())
    }
}

impl std::error::Error for CompileFailedError {}

/// Errors surfaced by the orchestration entry points.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// A malformed remapping entry; raised before any compiler runs.
    #[error(transparent)]
    Remapping(#[from] RemappingError),

    /// Version selection failed; raised before any compiler runs.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// A structured document has neither a consistent AST shape nor a
    /// consistent source shape, or no main file can be determined.
    #[error("structural error: {0}")]
    Structural(String),

    /// An I/O error reading an input file.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// An input document is not valid JSON.
    #[error("failed to parse input document: {0}")]
    Json(#[from] serde_json::Error),

    /// Every candidate version failed; carries full per-version detail.
    #[error(transparent)]
    Failed(#[from] CompileFailedError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregated_display_lists_every_attempt() {
        let err = CompileFailedError::new(vec![
            CompileFailure {
                compiler_version: Some(Version::new(0, 5, 17)),
                errors: vec!["a.str:1: boom".to_string()],
            },
            CompileFailure {
                compiler_version: Some(Version::new(0, 6, 12)),
                errors: vec!["a.str:1: still boom".to_string()],
            },
        ]);

        let rendered = format!("{err}");
        assert!(rendered.contains("all 2 attempted"));
        assert!(rendered.contains("version 0.5.17:"));
        assert!(rendered.contains("a.str:1: boom"));
        assert!(rendered.contains("version 0.6.12:"));
    }

    #[test]
    fn unversioned_failure_display() {
        let failure = CompileFailure {
            compiler_version: None,
            errors: vec!["bad document".to_string()],
        };
        let rendered = format!("{failure}");
        assert!(rendered.starts_with("unversioned:"));
        assert!(rendered.contains("bad document"));
    }

    #[test]
    fn structural_error_display() {
        let err = CompileError::Structural("mixed source shapes".to_string());
        assert_eq!(format!("{err}"), "structural error: mixed source shapes");
    }

    #[test]
    fn remapping_error_converts() {
        let err: CompileError = strata_resolve::remapping::parse_remapping("nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, CompileError::Remapping(_)));
    }
}
