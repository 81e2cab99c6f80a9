//! Lesson Catalog - queryable index of lesson metadata
//!
//! This library builds the catalog index for an educational content platform:
//! every lesson carries a small `lesson.yml` descriptor (difficulty level,
//! license, classification tags, indexing flag) next to its content, stored as
//! `<course>/<lesson>/lesson.yml` under a content root. It supports:
//!
//! - Discovering descriptors in a content tree (or any injected source)
//! - Lenient descriptor parsing and tag normalization
//! - Building the validated `course → lesson → metadata` catalog at most once
//! - A read-only query API with per-operation missing-entry defaults
//!
//! # Example
//!
//! ```no_run
//! use lesson_catalog::CatalogIndex;
//!
//! let index = CatalogIndex::from_content_root("lessonSrc");
//! for lesson in index.lessons_in_course("scratch").iter() {
//!     println!("{} (level {})", lesson, index.level("scratch", lesson));
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod tags;
pub mod utils;

// Re-export commonly used types
pub use catalog::CatalogIndex;
pub use indexer::builder::build_catalog;
pub use indexer::source::{DescriptorSource, FsDescriptorSource, InMemorySource};
pub use models::{Catalog, DiscoveredDescriptor, LessonMetadata, RawDescriptor, TagMap};
pub use tags::cleanse_tags;
