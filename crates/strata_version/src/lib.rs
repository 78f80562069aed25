//! Candidate version selection for the compilation retry loop.
//!
//! This crate provides the [`ReleaseIndex`] of available compiler releases,
//! the [`VersionStrategy`] trait with its [`RangeStrategy`] and
//! [`DetectionStrategy`] implementations, and the [`VersionSpec`] that
//! callers use to pick between a pinned version, auto-detection, or a
//! custom strategy.

#![warn(missing_docs)]

pub mod detect;
pub mod releases;
pub mod specifier;
pub mod strategy;

pub use detect::{extract_version_directives, DetectionStrategy};
pub use releases::ReleaseIndex;
pub use specifier::VersionSpec;
pub use strategy::{RangeStrategy, SelectionError, VersionStrategy};
