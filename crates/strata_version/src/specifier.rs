//! The caller-facing version specifier.

use crate::detect::DetectionStrategy;
use crate::releases::ReleaseIndex;
use crate::strategy::{RangeStrategy, VersionStrategy};
use std::fmt;

/// The literal specifier string requesting version auto-detection.
pub const AUTO: &str = "auto";

/// How the caller wants candidate versions chosen.
pub enum VersionSpec {
    /// Detect compatible versions from the source's version directives.
    Auto,
    /// A pinned exact version or a single constraint string.
    Pinned(String),
    /// A caller-supplied strategy, used as-is.
    Strategy(Box<dyn VersionStrategy>),
}

impl VersionSpec {
    /// Resolves the specifier into a concrete strategy for one source.
    pub fn into_strategy(self, source: &str, index: &ReleaseIndex) -> Box<dyn VersionStrategy> {
        match self {
            VersionSpec::Auto => Box::new(DetectionStrategy::new(source, index.clone())),
            VersionSpec::Pinned(spec) => Box::new(RangeStrategy::pinned(spec, index.clone())),
            VersionSpec::Strategy(strategy) => strategy,
        }
    }
}

impl From<&str> for VersionSpec {
    fn from(spec: &str) -> Self {
        if spec == AUTO {
            VersionSpec::Auto
        } else {
            VersionSpec::Pinned(spec.to_string())
        }
    }
}

impl From<String> for VersionSpec {
    fn from(spec: String) -> Self {
        VersionSpec::from(spec.as_str())
    }
}

impl fmt::Debug for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSpec::Auto => write!(f, "VersionSpec::Auto"),
            VersionSpec::Pinned(spec) => write!(f, "VersionSpec::Pinned({spec:?})"),
            VersionSpec::Strategy(_) => write!(f, "VersionSpec::Strategy(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    #[test]
    fn auto_token_maps_to_auto() {
        assert!(matches!(VersionSpec::from("auto"), VersionSpec::Auto));
    }

    #[test]
    fn other_strings_are_pinned() {
        assert!(matches!(
            VersionSpec::from("0.6.12"),
            VersionSpec::Pinned(spec) if spec == "0.6.12"
        ));
    }

    #[test]
    fn auto_resolves_to_detection() {
        let spec = VersionSpec::Auto;
        let strategy =
            spec.into_strategy("pragma version ^0.6.0;", &ReleaseIndex::default());
        assert_eq!(strategy.select().unwrap(), vec![Version::new(0, 6, 12)]);
    }

    #[test]
    fn pinned_resolves_to_range_strategy() {
        let spec = VersionSpec::from("0.4.26");
        let strategy = spec.into_strategy("contract C {}", &ReleaseIndex::default());
        assert_eq!(strategy.select().unwrap(), vec![Version::new(0, 4, 26)]);
    }

    #[test]
    fn custom_strategy_is_used_verbatim() {
        struct Fixed;
        impl VersionStrategy for Fixed {
            fn select(&self) -> Result<Vec<Version>, crate::SelectionError> {
                Ok(vec![Version::new(0, 7, 6)])
            }
        }

        let spec = VersionSpec::Strategy(Box::new(Fixed));
        let strategy = spec.into_strategy("ignored", &ReleaseIndex::default());
        assert_eq!(strategy.select().unwrap(), vec![Version::new(0, 7, 6)]);
    }
}
