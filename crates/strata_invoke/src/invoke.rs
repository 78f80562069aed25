//! Invocation dispatch and output normalization.

use crate::input::CompilerInput;
use crate::module::{CompilerModule, ImportCallbacks, Invocation, ModuleError, RawOutput};
use semver::Version;
use serde_json::Value;
use strata_common::Generation;
use strata_resolve::ImportFinder;

/// Errors produced while invoking a compiler module.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// The request object could not be serialized.
    #[error("failed to serialize compiler input: {0}")]
    Input(serde_json::Error),

    /// The module returned a JSON string that does not parse.
    #[error("malformed compiler output: {0}")]
    MalformedOutput(serde_json::Error),

    /// The module itself failed to run.
    #[error(transparent)]
    Module(#[from] ModuleError),
}

/// Invokes a compiler module with the calling convention its release
/// expects, returning one normalized JSON structure regardless of
/// generation.
pub fn invoke(
    module: &dyn CompilerModule,
    version: &Version,
    file_name: &str,
    content: &str,
    remappings: &[String],
    finder: &dyn ImportFinder,
) -> Result<Value, InvokeError> {
    let generation = Generation::of(version);
    let input = CompilerInput::for_generation(generation, file_name, content, remappings);

    let raw = match generation {
        Generation::Legacy => module.run(Invocation::Legacy {
            input: serde_json::to_value(&input).map_err(InvokeError::Input)?,
            verbose: true,
            finder,
        })?,
        Generation::Standard => module.run(Invocation::Standard {
            input_json: serde_json::to_string(&input).map_err(InvokeError::Input)?,
            finder,
        })?,
        Generation::Callbacks => module.run(Invocation::Callbacks {
            input_json: serde_json::to_string(&input).map_err(InvokeError::Input)?,
            callbacks: ImportCallbacks { import: finder },
        })?,
    };

    match raw {
        RawOutput::Object(value) => Ok(value),
        RawOutput::Json(text) => serde_json::from_str(&text).map_err(InvokeError::MalformedOutput),
    }
}
