//! Severity levels of structured compiler diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity of a current-generation diagnostic record, ordered from
/// least to most severe.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational output that never blocks a build.
    Info,
    /// A potential issue; compilation still succeeds.
    Warning,
    /// A definite problem; the attempt is fatal.
    Error,
}

impl Severity {
    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}
