//! Version-normalized compiler invocation.
//!
//! This crate builds the version-shaped request object ([`CompilerInput`]),
//! defines the loadable compiler entry point ([`CompilerModule`]) with its
//! per-generation calling conventions ([`Invocation`]), and normalizes every
//! generation's output into a single in-memory JSON structure ([`invoke`]).
//! Module loading itself is a collaborator behind [`CompilerLoader`],
//! injectable with fakes for testing.

#![warn(missing_docs)]

pub mod input;
pub mod invoke;
pub mod loader;
pub mod module;

pub use input::{CompilerInput, Settings, SourceContent, Sources, LANGUAGE};
pub use invoke::{invoke, InvokeError};
pub use loader::{CachingLoader, CompilerLoader, LoadError, ModuleRegistry};
pub use module::{CompilerModule, ImportCallbacks, Invocation, ModuleError, RawOutput};
