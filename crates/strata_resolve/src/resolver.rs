//! The ordered import resolver chain.
//!
//! Resolvers turn an import path into a filesystem location or report "no
//! match", never an error. The chain tries them strictly in order:
//! filesystem first, then remappings, then local packages; the first match
//! wins.

use crate::remapping::Remapping;
use std::path::{Path, PathBuf};

/// Directory name searched by [`LocalPackageResolver`] in each ancestor.
pub const LOCAL_PACKAGE_DIR: &str = "packages";

/// A single strategy for resolving an import path to a file on disk.
///
/// `None` means "no match here, try the next resolver". Only the chain's
/// exhaustion is an error, and that is reported by the finder, not here.
pub trait ImportResolver {
    /// Attempts to resolve the import path to an existing file.
    fn resolve(&self, import_path: &str) -> Option<PathBuf>;
}

/// Resolves an import path relative to the importing file's directory, or
/// as an absolute path.
pub struct FileSystemResolver {
    base: PathBuf,
}

impl FileSystemResolver {
    /// Creates a resolver rooted at the importing file's directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl ImportResolver for FileSystemResolver {
    fn resolve(&self, import_path: &str) -> Option<PathBuf> {
        let path = Path::new(import_path);

        let candidate = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base.join(path)
        };

        candidate.is_file().then_some(candidate)
    }
}

/// Rewrites import path prefixes according to remapping rules.
///
/// Among rules whose `prefix` starts the import path and whose `context`
/// (if non-empty) starts the importer's location, the longest prefix wins;
/// that disambiguates overlapping remappings deterministically.
pub struct RemappingResolver {
    remappings: Vec<Remapping>,
    location: String,
}

impl RemappingResolver {
    /// Creates a resolver for the given rules and importing location.
    pub fn new(remappings: Vec<Remapping>, location: impl Into<String>) -> Self {
        Self {
            remappings,
            location: location.into(),
        }
    }
}

impl ImportResolver for RemappingResolver {
    fn resolve(&self, import_path: &str) -> Option<PathBuf> {
        let best = self
            .remappings
            .iter()
            .filter(|remapping| {
                import_path.starts_with(&remapping.prefix)
                    && (remapping.context.is_empty() || self.location.starts_with(&remapping.context))
            })
            .max_by_key(|remapping| remapping.prefix.len())?;

        let rewritten = format!(
            "{}{}",
            best.target,
            &import_path[best.prefix.len()..]
        );
        let candidate = PathBuf::from(rewritten);

        candidate.is_file().then_some(candidate)
    }
}

/// Resolves package-style imports by walking ancestor directories.
///
/// Starting from the importer's directory, each ancestor is checked for a
/// [`LOCAL_PACKAGE_DIR`] subdirectory containing the import path, emulating
/// hierarchical package resolution without any network access.
pub struct LocalPackageResolver {
    base: PathBuf,
}

impl LocalPackageResolver {
    /// Creates a resolver starting its ancestor walk at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl ImportResolver for LocalPackageResolver {
    fn resolve(&self, import_path: &str) -> Option<PathBuf> {
        let mut dir = Some(self.base.as_path());

        while let Some(current) = dir {
            let candidate = current.join(LOCAL_PACKAGE_DIR).join(import_path);

            if candidate.is_file() {
                return Some(candidate);
            }

            dir = current.parent();
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, rel: &str, contents: &str) -> PathBuf {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn filesystem_relative_hit() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "util.str", "library U {}");

        let resolver = FileSystemResolver::new(tmp.path());
        let resolved = resolver.resolve("util.str").unwrap();
        assert_eq!(resolved, tmp.path().join("util.str"));
    }

    #[test]
    fn filesystem_absolute_hit() {
        let tmp = tempfile::tempdir().unwrap();
        let abs = write(tmp.path(), "util.str", "library U {}");

        let resolver = FileSystemResolver::new("/some/unrelated/base");
        assert_eq!(resolver.resolve(abs.to_str().unwrap()), Some(abs));
    }

    #[test]
    fn filesystem_miss_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let resolver = FileSystemResolver::new(tmp.path());
        assert!(resolver.resolve("missing.str").is_none());
    }

    #[test]
    fn remapping_rewrites_prefix() {
        let tmp = tempfile::tempdir().unwrap();
        let target = write(tmp.path(), "vendor/lib/math.str", "library M {}");

        let rules = vec![Remapping::new(
            "lib/",
            format!("{}/vendor/lib/", tmp.path().display()),
        )];
        let resolver = RemappingResolver::new(rules, "src");
        assert_eq!(resolver.resolve("lib/math.str"), Some(target));
    }

    #[test]
    fn longest_prefix_wins() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "short/core/math.str", "short");
        let long = write(tmp.path(), "long/math.str", "long");

        let rules = vec![
            Remapping::new("lib/", format!("{}/short/", tmp.path().display())),
            Remapping::new("lib/core/", format!("{}/long/", tmp.path().display())),
        ];
        let resolver = RemappingResolver::new(rules, "src");
        assert_eq!(resolver.resolve("lib/core/math.str"), Some(long));
    }

    #[test]
    fn context_scopes_rule() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "vendor/math.str", "library M {}");
        let rules = vec![Remapping::scoped(
            "src/app",
            "lib/",
            format!("{}/vendor/", tmp.path().display()),
        )];

        let in_context = RemappingResolver::new(rules.clone(), "src/app");
        assert!(in_context.resolve("lib/math.str").is_some());

        let out_of_context = RemappingResolver::new(rules, "tests");
        assert!(out_of_context.resolve("lib/math.str").is_none());
    }

    #[test]
    fn local_package_walks_ancestors() {
        let tmp = tempfile::tempdir().unwrap();
        let target = write(tmp.path(), "packages/dep/lib.str", "library D {}");
        let nested = tmp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let resolver = LocalPackageResolver::new(&nested);
        assert_eq!(resolver.resolve("dep/lib.str"), Some(target));
    }

    #[test]
    fn nearest_package_dir_wins() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "packages/dep/lib.str", "outer");
        let inner = write(tmp.path(), "a/packages/dep/lib.str", "inner");

        let resolver = LocalPackageResolver::new(tmp.path().join("a"));
        assert_eq!(resolver.resolve("dep/lib.str"), Some(inner));
    }

    #[test]
    fn local_package_miss_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let resolver = LocalPackageResolver::new(tmp.path());
        assert!(resolver.resolve("dep/lib.str").is_none());
    }
}
