//! Descriptor discovery and catalog building
//!
//! # Error Handling Strategy
//!
//! The indexer degrades gracefully at every level:
//!
//! - **Discovery failures**: A missing content root or an unreadable tree entry is
//!   logged and yields fewer (possibly zero) descriptors, never an error.
//!
//! - **Descriptor failures**: A descriptor that cannot be read or parsed is warned
//!   about and skipped, degrading that one lesson only.
//!
//! - **Data-quality warnings**: An indexed lesson missing its `level` is reported
//!   with its course/lesson identity and kept as-is.
//!
//! - **Summary reporting**: A one-line summary after each build shows lessons and
//!   courses cataloged plus the warning count, giving visibility into catalog
//!   completeness.
//!
//! Nothing in this module is fatal to the hosting process.

pub mod builder;
pub mod source;

pub use builder::build_catalog;
pub use source::{DESCRIPTOR_FILE_NAME, DescriptorSource, FsDescriptorSource, InMemorySource};
