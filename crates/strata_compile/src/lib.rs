//! The compilation orchestrator.
//!
//! This crate wires version selection, import resolution, input shaping,
//! invocation, and diagnostic classification into the retry loop: candidate
//! versions are attempted in order until one compiles with zero fatal
//! diagnostics, and a total failure surfaces every attempt's diagnostics.
//! Entry points exist for raw source text, for files, and for pre-existing
//! structured compiler-output documents.

#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod result;
pub mod session;

pub use error::{CompileError, CompileFailedError, CompileFailure};
pub use result::CompileResult;
pub use session::Session;
