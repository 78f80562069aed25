//! Tests for re-ingesting pre-existing compiler-output documents.

use semver::Version;
use serde_json::json;
use std::sync::{Arc, Mutex};
use strata_compile::{CompileError, Session};
use strata_conformance::{clean_output, registry, ImportingModule, ScriptedModule};
use strata_invoke::{CompilerLoader, CompilerModule, LoadError};
use strata_version::VersionSpec;

/// A loader that records every load request.
struct RecordingLoader {
    inner: strata_invoke::ModuleRegistry,
    requests: Mutex<Vec<Version>>,
}

impl CompilerLoader for RecordingLoader {
    fn load(&self, version: &Version) -> Result<Arc<dyn CompilerModule>, LoadError> {
        self.requests.lock().unwrap().push(version.clone());
        self.inner.load(version)
    }
}

#[test]
fn ast_document_returns_without_touching_the_loader() {
    let loader = RecordingLoader {
        inner: registry(vec![(
            Version::new(0, 6, 12),
            Arc::new(ScriptedModule::new(clean_output())),
        )]),
        requests: Mutex::new(Vec::new()),
    };
    let session = Session::new(&loader);

    let data = json!({
        "sources": {
            "a.str": { "ast": { "kind": "unit" }, "source": "contract A {}" },
            "b.str": { "ast": { "kind": "unit" } }
        }
    });
    let result = session
        .compile_json_data("out.json", &data, VersionSpec::Auto, &[])
        .unwrap();

    assert!(loader.requests.lock().unwrap().is_empty());
    assert_eq!(result.compiler_version, None);
    assert_eq!(result.data, data);
    // Only entries with source text land in the files map.
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files.get("a.str"), Some("contract A {}"));
}

#[test]
fn source_document_resolves_imports_from_storage_only() {
    let module = Arc::new(ImportingModule::new(["lib.str"]));
    let loader = registry(vec![(Version::new(0, 6, 12), module)]);
    let session = Session::new(&loader);

    let data = json!({
        "mainSource": "main.str",
        "sources": {
            "main.str": { "source": "import \"lib.str\";" },
            "lib.str": { "source": "library L {}" }
        }
    });
    let result = session
        .compile_json_data("doc.json", &data, VersionSpec::from("0.6.12"), &[])
        .unwrap();

    assert_eq!(result.compiler_version, Some(Version::new(0, 6, 12)));
    assert_eq!(result.files.len(), 2);
    assert_eq!(result.files.get("main.str"), Some("import \"lib.str\";"));
    assert_eq!(result.files.get("lib.str"), Some("library L {}"));
}

#[test]
fn storage_miss_becomes_fatal_diagnostic() {
    let module = Arc::new(ImportingModule::new(["ghost.str"]));
    let loader = registry(vec![(Version::new(0, 6, 12), module)]);
    let session = Session::new(&loader);

    let data = json!({
        "sources": {
            "main.str": { "source": "import \"ghost.str\";", "main": true }
        }
    });
    let err = session
        .compile_json_data("doc.json", &data, VersionSpec::from("0.6.12"), &[])
        .unwrap_err();

    let CompileError::Failed(failed) = err else {
        panic!("expected aggregated failure");
    };
    assert!(failed.failures[0].errors[0]
        .contains("Import path \"ghost.str\" not found in storage"));
}

#[test]
fn mixed_shape_document_is_rejected_unrepaired() {
    let loader = registry(Vec::new());
    let session = Session::new(&loader);

    let data = json!({
        "sources": {
            "a.str": { "ast": {} },
            "b.str": { "source": "contract B {}" }
        }
    });
    let err = session
        .compile_json_data("doc.json", &data, VersionSpec::Auto, &[])
        .unwrap_err();
    assert!(matches!(err, CompileError::Structural(_)));
}

#[test]
fn entry_without_either_shape_is_rejected() {
    let loader = registry(Vec::new());
    let session = Session::new(&loader);

    let data = json!({
        "sources": {
            "a.str": { "bytecode": "0x00" }
        }
    });
    let err = session
        .compile_json_data("doc.json", &data, VersionSpec::Auto, &[])
        .unwrap_err();
    assert!(matches!(err, CompileError::Structural(_)));
}

#[test]
fn main_flag_selects_entry_point() {
    let module = Arc::new(ImportingModule::new(Vec::<String>::new()));
    let loader = registry(vec![(Version::new(0, 6, 12), module)]);
    let session = Session::new(&loader);

    let data = json!({
        "sources": {
            "helper.str": { "source": "library H {}" },
            "main.str": { "source": "contract C {}", "main": true }
        }
    });
    let result = session
        .compile_json_data("doc.json", &data, VersionSpec::from("0.6.12"), &[])
        .unwrap();

    // The entry file is seeded into the files map; the helper was never
    // imported and stays out.
    assert_eq!(result.files.get("main.str"), Some("contract C {}"));
    assert!(!result.files.contains("helper.str"));
}
