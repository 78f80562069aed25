//! Import path resolution for compiler invocations.
//!
//! This crate provides the [`Remapping`] grammar and parser, the ordered
//! [`ImportResolver`] chain ([`FileSystemResolver`], [`RemappingResolver`],
//! [`LocalPackageResolver`]), the [`ImportFinder`] callback contract handed
//! to compiler modules, and the per-attempt [`FileRegistry`] that records
//! every file contributing to a compilation.

#![warn(missing_docs)]

pub mod files;
pub mod finder;
pub mod registry;
pub mod remapping;
pub mod resolver;

pub use files::FileMap;
pub use finder::{
    FileSystemFinder, FinderResult, ImportFinder, MemoryFinder, MemoryStorage, StorageEntry,
};
pub use registry::FileRegistry;
pub use remapping::{parse_remappings, Remapping, RemappingError};
pub use resolver::{FileSystemResolver, ImportResolver, LocalPackageResolver, RemappingResolver};
