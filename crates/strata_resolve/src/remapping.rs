//! Remapping entry grammar and parsing.
//!
//! A remapping rewrites an import path prefix to an alternate resolution
//! target, optionally scoped to an importing context. The textual grammar
//! is `[context:]prefix=target`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors produced when parsing remapping entries.
#[derive(Debug, thiserror::Error)]
pub enum RemappingError {
    /// The entry does not match the `[context:]prefix=target` grammar.
    #[error("invalid remapping entry \"{0}\"")]
    Invalid(String),
}

/// A parsed remapping rule.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Remapping {
    /// The importing location this rule applies to; empty means any.
    pub context: String,
    /// The import path prefix to rewrite.
    pub prefix: String,
    /// The replacement for the prefix.
    pub target: String,
}

impl Remapping {
    /// Creates a remapping that applies in any context.
    pub fn new(prefix: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            context: String::new(),
            prefix: prefix.into(),
            target: target.into(),
        }
    }

    /// Creates a remapping scoped to an importing context.
    pub fn scoped(
        context: impl Into<String>,
        prefix: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            prefix: prefix.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Remapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            write!(f, "{}={}", self.prefix, self.target)
        } else {
            write!(f, "{}:{}={}", self.context, self.prefix, self.target)
        }
    }
}

/// Parses a single `[context:]prefix=target` entry.
///
/// The entry is split on the first `=`; an optional context segment before
/// the first `:` of the left half scopes the rule. A missing `=` or an
/// empty target is a configuration error.
pub fn parse_remapping(entry: &str) -> Result<Remapping, RemappingError> {
    let (left, target) = entry
        .split_once('=')
        .ok_or_else(|| RemappingError::Invalid(entry.to_string()))?;

    if target.is_empty() {
        return Err(RemappingError::Invalid(entry.to_string()));
    }

    let (context, prefix) = match left.split_once(':') {
        Some((context, prefix)) => (context, prefix),
        None => ("", left),
    };

    Ok(Remapping {
        context: context.to_string(),
        prefix: prefix.to_string(),
        target: target.to_string(),
    })
}

/// Parses a list of remapping entries, failing on the first malformed one.
///
/// Called once per orchestration call, before any compiler is invoked, so a
/// bad entry never wastes a compilation attempt.
pub fn parse_remappings(entries: &[String]) -> Result<Vec<Remapping>, RemappingError> {
    entries.iter().map(|entry| parse_remapping(entry)).collect()
}
