//! The version-shaped compiler request object.
//!
//! Two request schemas exist. The oldest generation maps each filename
//! directly to its source text; every later generation wraps the text in a
//! `content` object. Both shapes carry the remapping list and request every
//! output type for every compilation unit unconditionally.

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use strata_common::Generation;

/// The language name stamped into every request.
pub const LANGUAGE: &str = "Strata";

/// A `content`-wrapped source entry, as current-generation schemas expect.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct SourceContent {
    /// The source text.
    pub content: String,
}

/// The `sources` section in either schema shape.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(untagged)]
pub enum Sources {
    /// Legacy shape: filename to plain source text.
    Legacy(BTreeMap<String, String>),
    /// Current shape: filename to a `content` wrapper.
    Current(BTreeMap<String, SourceContent>),
}

/// Request settings shared by both schema shapes.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Settings {
    /// Remapping entries, honored natively by generations that support them.
    pub remappings: Vec<String>,
    /// Output selection; always maximal.
    #[serde(rename = "outputSelection")]
    pub output_selection: Value,
}

/// A complete compiler request.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CompilerInput {
    /// The language being compiled.
    pub language: String,
    /// The entry file's source, in the generation's shape.
    pub sources: Sources,
    /// Request settings.
    pub settings: Settings,
}

/// The maximal output selection: all output types for all units, including
/// file-level output.
fn maximal_output_selection() -> Value {
    json!({
        "*": {
            "*": ["*"],
            "": ["*"]
        }
    })
}

impl CompilerInput {
    /// Builds a legacy-shaped request.
    pub fn legacy(file_name: &str, content: &str, remappings: &[String]) -> Self {
        let mut sources = BTreeMap::new();
        sources.insert(file_name.to_string(), content.to_string());

        Self {
            language: LANGUAGE.to_string(),
            sources: Sources::Legacy(sources),
            settings: Settings {
                remappings: remappings.to_vec(),
                output_selection: maximal_output_selection(),
            },
        }
    }

    /// Builds a current-shaped request.
    pub fn current(file_name: &str, content: &str, remappings: &[String]) -> Self {
        let mut sources = BTreeMap::new();
        sources.insert(
            file_name.to_string(),
            SourceContent {
                content: content.to_string(),
            },
        );

        Self {
            language: LANGUAGE.to_string(),
            sources: Sources::Current(sources),
            settings: Settings {
                remappings: remappings.to_vec(),
                output_selection: maximal_output_selection(),
            },
        }
    }

    /// Builds the request in the shape the given generation expects.
    pub fn for_generation(
        generation: Generation,
        file_name: &str,
        content: &str,
        remappings: &[String],
    ) -> Self {
        match generation {
            Generation::Legacy => Self::legacy(file_name, content, remappings),
            Generation::Standard | Generation::Callbacks => {
                Self::current(file_name, content, remappings)
            }
        }
    }
}
