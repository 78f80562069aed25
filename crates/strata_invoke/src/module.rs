//! The loadable compiler entry point and its calling conventions.

use serde_json::Value;
use strata_resolve::ImportFinder;

/// The import hook wrapper used by the newest calling convention.
///
/// From 0.6.0 onward the entry point takes its hooks bundled in a callbacks
/// object rather than positionally, even though the input schema did not
/// change at that boundary.
pub struct ImportCallbacks<'a> {
    /// The import lookup hook.
    pub import: &'a dyn ImportFinder,
}

/// One invocation of a compiler module, shaped for its generation's calling
/// convention.
pub enum Invocation<'a> {
    /// Oldest generation: a plain input object, a verbosity flag, and the
    /// finder passed positionally; output is already a plain object.
    Legacy {
        /// The legacy-shaped request object.
        input: Value,
        /// Verbosity flag forwarded to the entry point.
        verbose: bool,
        /// The import lookup hook.
        finder: &'a dyn ImportFinder,
    },
    /// 0.5 series: JSON-serialized request with the finder positional;
    /// output is a JSON string.
    Standard {
        /// The serialized current-shaped request.
        input_json: String,
        /// The import lookup hook.
        finder: &'a dyn ImportFinder,
    },
    /// 0.6.0 and later: identical to [`Standard`](Invocation::Standard) but
    /// the finder travels inside a callbacks object.
    Callbacks {
        /// The serialized current-shaped request.
        input_json: String,
        /// The bundled hooks.
        callbacks: ImportCallbacks<'a>,
    },
}

impl Invocation<'_> {
    /// The import hook, regardless of how the convention carries it.
    pub fn finder(&self) -> &dyn ImportFinder {
        match self {
            Invocation::Legacy { finder, .. } => *finder,
            Invocation::Standard { finder, .. } => *finder,
            Invocation::Callbacks { callbacks, .. } => callbacks.import,
        }
    }
}

/// A compiler module's raw return value before normalization.
pub enum RawOutput {
    /// A plain object, as the legacy entry point returns.
    Object(Value),
    /// A JSON string requiring deserialization, as later entry points return.
    Json(String),
}

/// A loaded compiler entry point for one exact release.
///
/// Implementations accept the invocation matching their release's calling
/// convention. A failure to run at all (as opposed to a compilation with
/// diagnostics) is reported through the error channel and becomes one
/// failed attempt in the retry loop.
pub trait CompilerModule: Send + Sync + std::fmt::Debug {
    /// Runs the compiler on one invocation.
    fn run(&self, invocation: Invocation<'_>) -> Result<RawOutput, ModuleError>;
}

/// An error reported by a compiler module itself.
#[derive(Debug, thiserror::Error)]
#[error("compiler module failed: {message}")]
pub struct ModuleError {
    /// Description of the failure.
    pub message: String,
}

impl ModuleError {
    /// Creates a module error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
