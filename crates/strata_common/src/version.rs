//! Exact-version parsing and release series grouping.

use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors produced when parsing version strings.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// The string is not a valid semantic version.
    #[error("invalid version \"{0}\"")]
    Invalid(String),

    /// The string contains range operators where an exact version is required.
    #[error("version string \"{0}\" must be an exact version without operators")]
    Inexact(String),
}

/// Characters that mark a version string as a range expression rather than
/// an exact release.
const RANGE_OPERATORS: &[char] = &['^', '~', '>', '<', '=', '*', '|', ',', ' '];

/// Returns `true` if the string names exactly one release, with no range
/// operators or wildcards.
pub fn is_exact(spec: &str) -> bool {
    !spec.contains(RANGE_OPERATORS) && Version::parse(spec).is_ok()
}

/// Parses a string that must name exactly one release.
///
/// A compiler module can only be loaded for a pinned release, so strings
/// carrying range operators (`^0.5`, `>=0.4.24`, ...) are rejected with
/// [`VersionError::Inexact`] rather than silently resolved.
pub fn parse_exact(spec: &str) -> Result<Version, VersionError> {
    if spec.contains(RANGE_OPERATORS) {
        return Err(VersionError::Inexact(spec.to_string()));
    }

    Version::parse(spec).map_err(|_| VersionError::Invalid(spec.to_string()))
}

/// A major.minor release series (e.g. all patch releases of `0.5`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Series {
    /// Major version number.
    pub major: u64,
    /// Minor version number.
    pub minor: u64,
}

impl Series {
    /// Creates a series from explicit major/minor numbers.
    pub fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    /// Returns `true` if the version belongs to this series.
    pub fn contains(&self, version: &Version) -> bool {
        version.major == self.major && version.minor == self.minor
    }
}

impl From<&Version> for Series {
    fn from(version: &Version) -> Self {
        Self {
            major: version.major,
            minor: version.minor,
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_version_parses() {
        let version = parse_exact("0.5.17").unwrap();
        assert_eq!(version, Version::new(0, 5, 17));
    }

    #[test]
    fn caret_is_rejected_as_inexact() {
        let err = parse_exact("^0.5.17").unwrap_err();
        assert!(matches!(err, VersionError::Inexact(_)));
    }

    #[test]
    fn comparator_is_rejected_as_inexact() {
        assert!(matches!(
            parse_exact(">=0.4.24").unwrap_err(),
            VersionError::Inexact(_)
        ));
        assert!(matches!(
            parse_exact("0.4.*").unwrap_err(),
            VersionError::Inexact(_)
        ));
    }

    #[test]
    fn garbage_is_invalid() {
        let err = parse_exact("banana").unwrap_err();
        assert!(matches!(err, VersionError::Invalid(_)));
    }

    #[test]
    fn is_exact_matches_parse_exact() {
        assert!(is_exact("0.8.21"));
        assert!(!is_exact("~0.8"));
        assert!(!is_exact("latest"));
    }

    #[test]
    fn series_from_version() {
        let series = Series::from(&Version::new(0, 6, 12));
        assert_eq!(series, Series::new(0, 6));
        assert!(series.contains(&Version::new(0, 6, 0)));
        assert!(!series.contains(&Version::new(0, 7, 0)));
    }

    #[test]
    fn series_ordering_is_ascending() {
        assert!(Series::new(0, 4) < Series::new(0, 5));
        assert!(Series::new(0, 12) < Series::new(1, 0));
    }

    #[test]
    fn series_display() {
        assert_eq!(format!("{}", Series::new(0, 8)), "0.8");
    }
}
