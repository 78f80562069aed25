//! The orchestration session and its entry points.

use crate::document::{
    consistently_contains_one_of, detect_main_file, fill_files_from_sources,
    storage_from_sources, AST_KEYS, SOURCE_KEY,
};
use crate::error::{CompileError, CompileFailedError, CompileFailure};
use crate::result::CompileResult;
use semver::Version;
use serde_json::Value;
use std::fs;
use std::path::Path;
use strata_common::Generation;
use strata_diagnostics::detect_compile_errors;
use strata_invoke::{invoke, CompilerLoader, InvokeError, LoadError};
use strata_resolve::{
    parse_remappings, FileRegistry, FileSystemFinder, ImportFinder, MemoryFinder, Remapping,
};
use strata_version::{ReleaseIndex, VersionSpec};

/// A failure of one attempt before diagnostics could be classified.
#[derive(Debug, thiserror::Error)]
enum AttemptError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Invoke(#[from] InvokeError),
}

/// One orchestration context: a module loader plus the set of releases
/// selection strategies may draw from.
///
/// Sessions hold no per-call state; each compile call builds its own file
/// registries and failure accumulator, so unrelated sources may be compiled
/// through the same session from different threads.
pub struct Session<'a> {
    loader: &'a dyn CompilerLoader,
    releases: ReleaseIndex,
}

impl<'a> Session<'a> {
    /// Creates a session over the default release index.
    pub fn new(loader: &'a dyn CompilerLoader) -> Self {
        Self::with_releases(loader, ReleaseIndex::default())
    }

    /// Creates a session with a custom release index.
    pub fn with_releases(loader: &'a dyn CompilerLoader, releases: ReleaseIndex) -> Self {
        Self { loader, releases }
    }

    /// The release index strategies select from.
    pub fn releases(&self) -> &ReleaseIndex {
        &self.releases
    }

    /// Reads a source file and compiles it.
    pub fn compile_file(
        &self,
        path: &Path,
        spec: VersionSpec,
        remappings: &[String],
    ) -> Result<CompileResult, CompileError> {
        let source = fs::read_to_string(path)?;
        self.compile_source(&path.to_string_lossy(), &source, spec, remappings)
    }

    /// Compiles source text through the candidate-version retry loop.
    ///
    /// Candidates are attempted strictly in the strategy's order; the first
    /// attempt with zero fatal diagnostics wins and the remaining candidates
    /// are never tried. Each attempt resolves imports afresh into its own
    /// file registry.
    pub fn compile_source(
        &self,
        file_name: &str,
        source: &str,
        spec: VersionSpec,
        remappings: &[String],
    ) -> Result<CompileResult, CompileError> {
        let parsed = parse_remappings(remappings)?;
        let candidates = spec.into_strategy(source, &self.releases).select()?;

        let mut failures = Vec::new();

        for version in candidates {
            let registry = FileRegistry::new();
            registry.record(file_name, source);

            // Only the oldest generation lacks native remapping support;
            // its finder applies the rules itself. Later generations get
            // remappings through settings and the finder stays literal.
            let finder_remappings = if Generation::of(&version) == Generation::Legacy {
                parsed.clone()
            } else {
                Vec::<Remapping>::new()
            };
            let finder = FileSystemFinder::new(Path::new(file_name), finder_remappings, &registry);

            match self.attempt(&version, file_name, source, remappings, &finder) {
                Attempt::Success(data) => {
                    return Ok(CompileResult {
                        data,
                        compiler_version: Some(version),
                        files: registry.into_files(),
                    })
                }
                Attempt::Failure(failure) => failures.push(failure),
            }
        }

        Err(CompileFailedError::new(failures).into())
    }

    /// Reads and re-ingests a structured compiler-output document.
    pub fn compile_json_file(
        &self,
        path: &Path,
        spec: VersionSpec,
        remappings: &[String],
    ) -> Result<CompileResult, CompileError> {
        let text = fs::read_to_string(path)?;
        let data: Value = serde_json::from_str(&text)?;
        self.compile_json_data(&path.to_string_lossy(), &data, spec, remappings)
    }

    /// Re-ingests a structured compiler-output document.
    ///
    /// A document whose every source entry carries an AST is returned
    /// verbatim without compiling (failing immediately on embedded fatal
    /// diagnostics). A document whose every entry carries source text is
    /// recompiled from an in-memory import store, entry point chosen by the
    /// main-file markers. Anything else is a structural error.
    pub fn compile_json_data(
        &self,
        file_name: &str,
        data: &Value,
        spec: VersionSpec,
        remappings: &[String],
    ) -> Result<CompileResult, CompileError> {
        parse_remappings(remappings)?;

        let Some(sources) = data.get("sources").and_then(Value::as_object) else {
            return Err(CompileError::Structural(format!(
                "unable to find required properties in \"{file_name}\""
            )));
        };

        if consistently_contains_one_of(sources, AST_KEYS) {
            let errors = detect_compile_errors(data);

            if !errors.is_empty() {
                return Err(CompileFailedError::new(vec![CompileFailure {
                    compiler_version: None,
                    errors,
                }])
                .into());
            }

            return Ok(CompileResult {
                data: data.clone(),
                compiler_version: None,
                files: fill_files_from_sources(sources),
            });
        }

        if consistently_contains_one_of(sources, &[SOURCE_KEY]) {
            let main_file = detect_main_file(data, sources)
                .ok_or_else(|| {
                    CompileError::Structural("unable to detect main source to compile".to_string())
                })?;
            let source = sources[&main_file]
                .get(SOURCE_KEY)
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    CompileError::Structural("unable to detect main source to compile".to_string())
                })?
                .to_string();

            let storage = storage_from_sources(sources);
            let candidates = spec.into_strategy(&source, &self.releases).select()?;

            let mut failures = Vec::new();

            for version in candidates {
                let registry = FileRegistry::new();
                registry.record(&main_file, &source);

                let finder = MemoryFinder::new(&storage, &registry);

                match self.attempt(&version, &main_file, &source, remappings, &finder) {
                    Attempt::Success(data) => {
                        return Ok(CompileResult {
                            data,
                            compiler_version: Some(version),
                            files: registry.into_files(),
                        })
                    }
                    Attempt::Failure(failure) => failures.push(failure),
                }
            }

            return Err(CompileFailedError::new(failures).into());
        }

        Err(CompileError::Structural(
            "unable to process data structure: neither consistent AST or source values are present"
                .to_string(),
        ))
    }

    /// Runs one candidate version end to end: load, invoke, classify.
    ///
    /// Load and invocation errors are recovered into a failure record, like
    /// fatal diagnostics, so one broken module never aborts the retry loop.
    fn attempt(
        &self,
        version: &Version,
        file_name: &str,
        source: &str,
        remappings: &[String],
        finder: &dyn ImportFinder,
    ) -> Attempt {
        let outcome: Result<Value, AttemptError> = self
            .loader
            .load(version)
            .map_err(AttemptError::from)
            .and_then(|module| {
                invoke(module.as_ref(), version, file_name, source, remappings, finder)
                    .map_err(AttemptError::from)
            });

        match outcome {
            Ok(data) => {
                let errors = detect_compile_errors(&data);

                if errors.is_empty() {
                    Attempt::Success(data)
                } else {
                    Attempt::Failure(CompileFailure {
                        compiler_version: Some(version.clone()),
                        errors,
                    })
                }
            }
            Err(err) => Attempt::Failure(CompileFailure {
                compiler_version: Some(version.clone()),
                errors: vec![err.to_string()],
            }),
        }
    }
}

/// The outcome of one candidate attempt.
enum Attempt {
    Success(Value),
    Failure(CompileFailure),
}
