//! Shared foundational types for the Strata compiler orchestration toolchain.
//!
//! This crate provides exact-version parsing, release [`Series`] grouping, and
//! the [`Generation`]/[`Schema`] bands that describe how a given compiler
//! release is invoked and what its output looks like.

#![warn(missing_docs)]

pub mod generation;
pub mod version;

pub use generation::{Generation, Schema};
pub use version::{parse_exact, Series, VersionError};
