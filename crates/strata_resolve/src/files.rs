//! Insertion-ordered map of import paths to source text.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An insertion-ordered mapping from import path to source text.
///
/// Keys are import paths exactly as referenced in the compiled sources, not
/// resolved filesystem paths. Iteration yields entries in the order they
/// were first recorded, matching the order files were read during the
/// attempt that produced them.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct FileMap {
    entries: Vec<(String, String)>,
}

impl FileMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing the contents of an existing key in place.
    ///
    /// Re-inserting a key keeps its original position.
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        let path = path.into();
        let contents = contents.into();

        match self.entries.iter_mut().find(|(key, _)| *key == path) {
            Some((_, existing)) => *existing = contents,
            None => self.entries.push((path, contents)),
        }
    }

    /// Returns the contents recorded for an import path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == path)
            .map(|(_, contents)| contents.as_str())
    }

    /// Returns `true` if the import path has been recorded.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Number of recorded files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no files have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, contents)| (path.as_str(), contents.as_str()))
    }
}

impl Serialize for FileMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, contents) in &self.entries {
            map.serialize_entry(path, contents)?;
        }
        map.end()
    }
}

impl IntoIterator for FileMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut files = FileMap::new();
        files.insert("b.str", "bee");
        files.insert("a.str", "ay");
        let keys: Vec<&str> = files.iter().map(|(path, _)| path).collect();
        assert_eq!(keys, ["b.str", "a.str"]);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut files = FileMap::new();
        files.insert("a.str", "old");
        files.insert("b.str", "bee");
        files.insert("a.str", "new");
        assert_eq!(files.len(), 2);
        assert_eq!(files.get("a.str"), Some("new"));
        let keys: Vec<&str> = files.iter().map(|(path, _)| path).collect();
        assert_eq!(keys, ["a.str", "b.str"]);
    }

    #[test]
    fn missing_key() {
        let files = FileMap::new();
        assert!(files.is_empty());
        assert_eq!(files.get("nope"), None);
        assert!(!files.contains("nope"));
    }

    #[test]
    fn serializes_as_json_object() {
        let mut files = FileMap::new();
        files.insert("main.str", "contract C {}");
        let json = serde_json::to_value(&files).unwrap();
        assert_eq!(json["main.str"], "contract C {}");
    }
}
