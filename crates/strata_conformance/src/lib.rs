//! Shared fixtures for pipeline conformance tests.
//!
//! Scripted compiler modules stand in for real loadable compilers: each
//! honors its generation's calling convention and return channel while
//! producing a pre-arranged output, so tests can exercise the retry loop,
//! the finder contract, and diagnostic classification end to end without
//! any real compiler present.

#![warn(missing_docs)]

use semver::Version;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use strata_invoke::{CompilerModule, Invocation, ModuleError, ModuleRegistry, RawOutput};

/// A clean current-schema output with no diagnostics.
pub fn clean_output() -> Value {
    json!({ "contracts": {}, "errors": [] })
}

/// A current-schema output carrying one fatal diagnostic.
pub fn fatal_output(message: &str) -> Value {
    json!({
        "errors": [ { "severity": "error", "formattedMessage": message } ]
    })
}

/// A legacy-schema output carrying one fatal string diagnostic.
pub fn legacy_fatal_output(message: &str) -> Value {
    json!({ "errors": [message] })
}

/// A module returning a fixed output through the convention-appropriate
/// channel, counting how often it ran.
#[derive(Debug)]
pub struct ScriptedModule {
    output: Value,
    runs: AtomicUsize,
}

impl ScriptedModule {
    /// Creates a module that always produces `output`.
    pub fn new(output: Value) -> Self {
        Self {
            output,
            runs: AtomicUsize::new(0),
        }
    }

    /// How many times this module has run.
    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::Relaxed)
    }
}

impl CompilerModule for ScriptedModule {
    fn run(&self, invocation: Invocation<'_>) -> Result<RawOutput, ModuleError> {
        self.runs.fetch_add(1, Ordering::Relaxed);

        match invocation {
            Invocation::Legacy { .. } => Ok(RawOutput::Object(self.output.clone())),
            Invocation::Standard { .. } | Invocation::Callbacks { .. } => {
                Ok(RawOutput::Json(self.output.to_string()))
            }
        }
    }
}

/// A module that resolves a fixed list of imports through the provided
/// finder before answering, the way a real compiler pulls in dependencies.
///
/// Every unresolved import becomes a fatal diagnostic in the generation's
/// own schema; with all imports resolved the module reports success.
#[derive(Debug)]
pub struct ImportingModule {
    imports: Vec<String>,
}

impl ImportingModule {
    /// Creates a module that imports the given paths on every run.
    pub fn new(imports: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            imports: imports.into_iter().map(Into::into).collect(),
        }
    }
}

impl CompilerModule for ImportingModule {
    fn run(&self, invocation: Invocation<'_>) -> Result<RawOutput, ModuleError> {
        let legacy = matches!(invocation, Invocation::Legacy { .. });
        let finder = invocation.finder();

        let mut unresolved = Vec::new();

        for import in &self.imports {
            if let strata_resolve::FinderResult::Error { error } = finder.find(import) {
                unresolved.push(error);
            }
        }

        let output = if unresolved.is_empty() {
            clean_output()
        } else if legacy {
            json!({ "errors": unresolved })
        } else {
            json!({
                "errors": unresolved
                    .iter()
                    .map(|error| json!({ "severity": "error", "formattedMessage": error }))
                    .collect::<Vec<_>>()
            })
        };

        if legacy {
            Ok(RawOutput::Object(output))
        } else {
            Ok(RawOutput::Json(output.to_string()))
        }
    }
}

/// Builds a module registry from `(version, module)` pairs.
pub fn registry(entries: Vec<(Version, Arc<dyn CompilerModule>)>) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();

    for (version, module) in entries {
        registry.register(version, module);
    }

    registry
}
