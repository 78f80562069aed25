//! The set of compiler releases available for loading.

use semver::Version;
use strata_common::Series;
use std::collections::BTreeMap;

/// Known compiler releases, one tuple per `(major, minor, patch)`.
///
/// This is a curated table covering the releases the default module loaders
/// are expected to supply; deployments with a different module set build
/// their own index via [`ReleaseIndex::from_versions`].
const KNOWN_RELEASES: &[(u64, u64, u64)] = &[
    (0, 4, 24),
    (0, 4, 25),
    (0, 4, 26),
    (0, 5, 15),
    (0, 5, 16),
    (0, 5, 17),
    (0, 6, 10),
    (0, 6, 11),
    (0, 6, 12),
    (0, 7, 4),
    (0, 7, 5),
    (0, 7, 6),
    (0, 8, 19),
    (0, 8, 20),
    (0, 8, 21),
];

/// A sorted, deduplicated set of compiler releases.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ReleaseIndex {
    versions: Vec<Version>,
}

impl ReleaseIndex {
    /// Builds an index from an arbitrary list of releases.
    pub fn from_versions(versions: impl IntoIterator<Item = Version>) -> Self {
        let mut versions: Vec<Version> = versions.into_iter().collect();
        versions.sort();
        versions.dedup();
        Self { versions }
    }

    /// All releases in ascending order.
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    /// Returns `true` if the index contains no releases.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Returns `true` if the exact release is available.
    pub fn contains(&self, version: &Version) -> bool {
        self.versions.binary_search(version).is_ok()
    }

    /// The highest release satisfying the predicate, if any.
    pub fn latest_matching(&self, mut allowed: impl FnMut(&Version) -> bool) -> Option<Version> {
        self.versions.iter().rev().find(|v| allowed(v)).cloned()
    }

    /// The highest patch release of every series with at least one release
    /// satisfying the predicate, in ascending series order.
    pub fn latest_in_each_series(&self, mut allowed: impl FnMut(&Version) -> bool) -> Vec<Version> {
        let mut by_series: BTreeMap<Series, Version> = BTreeMap::new();

        for version in &self.versions {
            if allowed(version) {
                // Ascending iteration, so a later hit is a higher patch.
                by_series.insert(Series::from(version), version.clone());
            }
        }

        by_series.into_values().collect()
    }
}

impl Default for ReleaseIndex {
    fn default() -> Self {
        Self::from_versions(
            KNOWN_RELEASES
                .iter()
                .map(|&(major, minor, patch)| Version::new(major, minor, patch)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_index_is_sorted_and_nonempty() {
        let index = ReleaseIndex::default();
        assert!(!index.is_empty());
        let versions = index.versions();
        assert!(versions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn contains_exact_release() {
        let index = ReleaseIndex::default();
        assert!(index.contains(&Version::new(0, 5, 17)));
        assert!(!index.contains(&Version::new(0, 5, 99)));
    }

    #[test]
    fn from_versions_dedupes() {
        let index = ReleaseIndex::from_versions(vec![
            Version::new(0, 5, 1),
            Version::new(0, 4, 9),
            Version::new(0, 5, 1),
        ]);
        assert_eq!(
            index.versions(),
            &[Version::new(0, 4, 9), Version::new(0, 5, 1)]
        );
    }

    #[test]
    fn latest_matching_picks_highest() {
        let index = ReleaseIndex::default();
        let latest = index.latest_matching(|v| v.minor == 6).unwrap();
        assert_eq!(latest, Version::new(0, 6, 12));
        assert!(index.latest_matching(|v| v.minor == 9).is_none());
    }

    #[test]
    fn latest_in_each_series_ascending() {
        let index = ReleaseIndex::default();
        let picks = index.latest_in_each_series(|v| v.minor >= 5 && v.minor <= 7);
        assert_eq!(
            picks,
            vec![
                Version::new(0, 5, 17),
                Version::new(0, 6, 12),
                Version::new(0, 7, 6),
            ]
        );
    }

    #[test]
    fn latest_in_each_series_empty_when_nothing_allowed() {
        let index = ReleaseIndex::default();
        assert!(index.latest_in_each_series(|_| false).is_empty());
    }
}
