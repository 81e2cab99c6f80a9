//! Data models for the lesson catalog.
//!
//! This module defines the data structures used throughout the crate:
//!
//! - [`RawDescriptor`] - Untyped view of one `lesson.yml` file
//! - [`DiscoveredDescriptor`] - A raw descriptor plus its course/lesson coordinates
//! - [`LessonMetadata`] - Validated, normalized metadata for one lesson
//! - [`Catalog`] - The full two-level course → lesson → metadata mapping
//!
//! Raw descriptor fields whose policy depends on the exact raw value (`indexed`,
//! `tags`) are kept as untyped YAML values until the builder applies the policy.

pub mod descriptor;
pub mod metadata;

pub use descriptor::{DiscoveredDescriptor, RawDescriptor};
pub use metadata::{Catalog, LessonMetadata, TagMap};
