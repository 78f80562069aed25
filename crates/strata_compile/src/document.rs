//! Shape inspection of pre-existing compiler-output documents.
//!
//! A structured document is re-ingested in one of two ways depending on how
//! its `sources` map is shaped: entries carrying an AST are returned
//! without compiling, entries carrying source text are recompiled from an
//! in-memory store. The shape must hold consistently across all entries;
//! mixed documents are never auto-repaired.

use serde_json::{Map, Value};
use strata_resolve::{FileMap, MemoryStorage, StorageEntry};

/// The AST-bearing field names across schema generations.
pub const AST_KEYS: &[&str] = &["ast", "legacyAST", "AST"];

/// The source-bearing field name.
pub const SOURCE_KEY: &str = "source";

/// Returns `true` if at least one of the properties is present in every
/// entry of the map.
pub fn consistently_contains_one_of(sources: &Map<String, Value>, properties: &[&str]) -> bool {
    properties
        .iter()
        .any(|property| sources.values().all(|entry| entry.get(property).is_some()))
}

/// Collects entries whose `source` field is a string into a file map.
pub fn fill_files_from_sources(sources: &Map<String, Value>) -> FileMap {
    let mut files = FileMap::new();

    for (file_name, entry) in sources {
        if let Some(source) = entry.get(SOURCE_KEY).and_then(Value::as_str) {
            files.insert(file_name, source);
        }
    }

    files
}

/// Builds an in-memory import store from a `sources` map.
///
/// Entries without a string `source` value become storage entries with no
/// source, which surface as storage errors if an import ever reaches them.
pub fn storage_from_sources(sources: &Map<String, Value>) -> MemoryStorage {
    sources
        .iter()
        .map(|(file_name, entry)| {
            let source = entry
                .get(SOURCE_KEY)
                .and_then(Value::as_str)
                .map(str::to_string);
            (file_name.clone(), StorageEntry { source })
        })
        .collect()
}

/// Determines the document's main file.
///
/// An explicit top-level `mainSource` naming an existing entry takes
/// precedence; otherwise the first entry flagged `main: true` is chosen.
pub fn detect_main_file(data: &Value, sources: &Map<String, Value>) -> Option<String> {
    if let Some(main) = data.get("mainSource").and_then(Value::as_str) {
        if sources.contains_key(main) {
            return Some(main.to_string());
        }
    }

    sources
        .iter()
        .find(|(_, entry)| entry.get("main").and_then(Value::as_bool) == Some(true))
        .map(|(file_name, _)| file_name.clone())
}
