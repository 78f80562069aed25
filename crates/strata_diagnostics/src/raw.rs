//! Per-generation raw diagnostic shapes.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A structured diagnostic record, as emitted by current-generation
/// compilers (0.5 and later schemas).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StructuredDiagnostic {
    /// The record's severity.
    pub severity: Severity,
    /// The human-readable message with source context, when present.
    #[serde(rename = "formattedMessage", default, skip_serializing_if = "Option::is_none")]
    pub formatted_message: Option<String>,
    /// The bare message without source context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StructuredDiagnostic {
    /// The best available message text: formatted if present, bare otherwise.
    pub fn text(&self) -> Option<&str> {
        self.formatted_message
            .as_deref()
            .or(self.message.as_deref())
    }
}

/// One entry of a compiler's `errors` array, from either schema generation.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDiagnostic {
    /// A current-generation structured record.
    Structured(StructuredDiagnostic),
    /// A legacy-generation plain string.
    Legacy(String),
}

/// Substring marking a legacy string diagnostic as non-fatal.
const LEGACY_WARNING_MARK: &str = "Warning";

impl RawDiagnostic {
    /// Returns `true` if this diagnostic makes the attempt fail.
    ///
    /// Structured records are fatal only at `error` severity; legacy strings
    /// are fatal unless they mention `Warning`.
    pub fn is_fatal(&self) -> bool {
        match self {
            RawDiagnostic::Structured(diag) => diag.severity.is_error(),
            RawDiagnostic::Legacy(text) => !text.contains(LEGACY_WARNING_MARK),
        }
    }

    /// The message carried by this diagnostic, when it has one.
    pub fn text(&self) -> Option<&str> {
        match self {
            RawDiagnostic::Structured(diag) => diag.text(),
            RawDiagnostic::Legacy(text) => Some(text),
        }
    }
}
