//! Version selection strategies.

use crate::releases::ReleaseIndex;
use semver::{Version, VersionReq};
use strata_common::{parse_exact, VersionError};

/// Errors produced while selecting candidate versions.
///
/// These are configuration-class failures: they abort the orchestration
/// call before any compiler is invoked.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// A version specifier is neither an exact version nor a constraint.
    #[error("invalid version specifier \"{0}\"")]
    InvalidSpec(String),

    /// A version directive in the source could not be parsed.
    #[error("invalid version directive \"{0}\"")]
    InvalidDirective(String),

    /// No available release satisfies the given constraints.
    #[error("no available compiler release satisfies \"{0}\"")]
    Unsatisfiable(String),

    /// A version string failed exactness validation.
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Produces the ordered sequence of candidate versions for a retry loop.
///
/// The sequence is finite and produced once per orchestration call; callers
/// attempt candidates strictly in the returned order.
pub trait VersionStrategy {
    /// Selects the candidate versions to attempt, in order.
    fn select(&self) -> Result<Vec<Version>, SelectionError>;
}

/// Expands an explicit list of version specifiers, preserving list order.
///
/// Each entry resolves to exactly one release: an exact version stands for
/// itself, while a constraint resolves to the highest release in the index
/// satisfying it. A constraint no release satisfies is an error.
pub struct RangeStrategy {
    specs: Vec<String>,
    index: ReleaseIndex,
}

impl RangeStrategy {
    /// Creates a strategy over the given specifiers and release index.
    pub fn new(specs: Vec<String>, index: ReleaseIndex) -> Self {
        Self { specs, index }
    }

    /// Convenience constructor for a single pinned specifier.
    pub fn pinned(spec: impl Into<String>, index: ReleaseIndex) -> Self {
        Self::new(vec![spec.into()], index)
    }

    fn expand(&self, spec: &str) -> Result<Version, SelectionError> {
        if let Ok(version) = parse_exact(spec) {
            return Ok(version);
        }

        let req = normalized_req(spec)
            .map_err(|_| SelectionError::InvalidSpec(spec.to_string()))?;

        self.index
            .latest_matching(|v| req.matches(v))
            .ok_or_else(|| SelectionError::Unsatisfiable(spec.to_string()))
    }
}

impl VersionStrategy for RangeStrategy {
    fn select(&self) -> Result<Vec<Version>, SelectionError> {
        self.specs.iter().map(|spec| self.expand(spec)).collect()
    }
}

/// Parses a constraint, accepting space-separated comparator lists
/// (`>=0.4.24 <0.6.0`) by normalizing them to comma-separated form.
pub(crate) fn normalized_req(spec: &str) -> Result<VersionReq, semver::Error> {
    match VersionReq::parse(spec) {
        Ok(req) => Ok(req),
        Err(err) => {
            let joined = spec.split_whitespace().collect::<Vec<_>>().join(", ");
            if joined == spec {
                Err(err)
            } else {
                VersionReq::parse(&joined)
            }
        }
    }
}
