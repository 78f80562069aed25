//! Classification of raw compiler diagnostics across schema generations.
//!
//! Compiler output carries an `errors` array whose entry shape depends on
//! the emitting generation: structured records with a `severity` field for
//! current-generation releases, plain strings for legacy ones. This crate
//! models both shapes ([`RawDiagnostic`]) and filters the fatal entries
//! ([`detect_compile_errors`]); an empty fatal list is the sole success
//! signal of a compilation attempt.

#![warn(missing_docs)]

pub mod classify;
pub mod raw;
pub mod severity;

pub use classify::detect_compile_errors;
pub use raw::{RawDiagnostic, StructuredDiagnostic};
pub use severity::Severity;
