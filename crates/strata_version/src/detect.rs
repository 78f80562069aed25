//! Auto-detection of compatible compiler versions from source text.

use crate::releases::ReleaseIndex;
use crate::strategy::{normalized_req, SelectionError, VersionStrategy};
use semver::{Version, VersionReq};

/// Extracts `pragma version <constraint>;` directives from source text.
///
/// Directives are `;`-terminated statements at the top level of a source
/// file. All directives in a file apply simultaneously: a release is
/// compatible only if it satisfies every extracted constraint. A directive
/// whose constraint cannot be parsed is a configuration error.
pub fn extract_version_directives(source: &str) -> Result<Vec<VersionReq>, SelectionError> {
    let mut directives = Vec::new();

    for statement in source.split(';') {
        let statement = statement.trim_start();

        let Some(rest) = statement.strip_prefix("pragma") else {
            continue;
        };
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }

        let rest = rest.trim_start();
        let Some(constraint) = rest.strip_prefix("version") else {
            continue;
        };
        if !constraint.starts_with(char::is_whitespace) {
            continue;
        }

        let constraint = constraint.trim();
        let req = normalized_req(constraint)
            .map_err(|_| SelectionError::InvalidDirective(constraint.to_string()))?;

        directives.push(req);
    }

    Ok(directives)
}

/// Scans source text for version directives, then picks the latest patch of
/// every compatible series.
///
/// The retry loop validates the source against the newest patch of each
/// compatible major.minor series rather than every patch ever released,
/// bounding retry cost while still catching series-specific behavior
/// differences. Candidates come back in ascending series order, oldest
/// first. A source with no directive is unconstrained and yields every
/// series' latest patch.
pub struct DetectionStrategy {
    source: String,
    index: ReleaseIndex,
}

impl DetectionStrategy {
    /// Creates a detection strategy over the given source and release index.
    pub fn new(source: impl Into<String>, index: ReleaseIndex) -> Self {
        Self {
            source: source.into(),
            index,
        }
    }
}

impl VersionStrategy for DetectionStrategy {
    fn select(&self) -> Result<Vec<Version>, SelectionError> {
        let directives = extract_version_directives(&self.source)?;

        let candidates = self
            .index
            .latest_in_each_series(|v| directives.iter().all(|req| req.matches(v)));

        if candidates.is_empty() {
            return Err(SelectionError::Unsatisfiable(
                directives
                    .iter()
                    .map(|req| req.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ));
        }

        Ok(candidates)
    }
}
