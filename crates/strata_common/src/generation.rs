//! Compiler generation bands and output schema tags.
//!
//! The compiler has been released in three incompatible generations. Each
//! band changed either the shape of the request object, the calling
//! convention of the entry point, or both:
//!
//! * releases before 0.5.0 take a plain input object, a verbosity flag and
//!   an import finder callback, and return a plain object;
//! * the 0.5 series takes a JSON-serialized input with the finder passed
//!   positionally, and returns a JSON string;
//! * 0.6.0 and later are identical to 0.5 except the finder travels inside
//!   a callbacks object.

use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The invocation convention band a compiler release belongs to.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Generation {
    /// Releases before 0.5.0.
    Legacy,
    /// The 0.5 series.
    Standard,
    /// Releases from 0.6.0 onward.
    Callbacks,
}

impl Generation {
    /// Determines the generation band of a release.
    pub fn of(version: &Version) -> Self {
        if version.major == 0 && version.minor < 5 {
            Generation::Legacy
        } else if version.major == 0 && version.minor == 5 {
            Generation::Standard
        } else {
            Generation::Callbacks
        }
    }

    /// The output schema this generation emits.
    ///
    /// Only the oldest generation uses the legacy diagnostic/output schema;
    /// the calling-convention change at 0.6 did not alter the schema.
    pub fn schema(self) -> Schema {
        match self {
            Generation::Legacy => Schema::Legacy,
            Generation::Standard | Generation::Callbacks => Schema::Current,
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generation::Legacy => write!(f, "legacy"),
            Generation::Standard => write!(f, "standard"),
            Generation::Callbacks => write!(f, "callbacks"),
        }
    }
}

/// The schema generation of a compiler's JSON output, handed to the
/// downstream AST consumer alongside the opaque payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// String diagnostics, bare source text entries.
    Legacy,
    /// Structured diagnostics with severities, `content`-wrapped sources.
    Current,
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Legacy => write!(f, "legacy"),
            Schema::Current => write!(f, "current"),
        }
    }
}
