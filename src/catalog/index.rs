use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use crate::indexer::{DescriptorSource, FsDescriptorSource, build_catalog};
use crate::models::{Catalog, LessonMetadata, TagMap};

/// Lazily-built, process-lifetime view of all lesson metadata.
///
/// The catalog is computed at most once, on the first query; concurrent first
/// callers block until the single build completes and then observe the same fully
/// built instance. There is no invalidation: the content set is fixed at build
/// time, and changing descriptors requires a restart. After the build, catalog
/// reads are lock-free.
///
/// Query operations deliberately differ in their default for missing entries
/// (`false`, `None`, `""`, `0`, empty list); each call site historically relies on
/// its own convention, so the asymmetry is part of the contract.
pub struct CatalogIndex<S: DescriptorSource> {
    source: S,
    catalog: OnceLock<Catalog>,
    lesson_lists: Mutex<HashMap<String, Arc<[String]>>>,
}

impl CatalogIndex<FsDescriptorSource> {
    /// Index backed by a content-tree scan of `root`.
    pub fn from_content_root(root: impl Into<PathBuf>) -> Self {
        Self::new(FsDescriptorSource::new(root))
    }
}

impl<S: DescriptorSource> CatalogIndex<S> {
    pub fn new(source: S) -> Self {
        Self { source, catalog: OnceLock::new(), lesson_lists: Mutex::new(HashMap::new()) }
    }

    /// The full catalog, built on first access.
    pub fn catalog(&self) -> &Catalog {
        self.catalog.get_or_init(|| build_catalog(&self.source))
    }

    fn metadata(&self, course: &str, lesson: &str) -> Option<&LessonMetadata> {
        self.catalog().get(course).and_then(|lessons| lessons.get(lesson))
    }

    /// Whether a descriptor was discovered for this course/lesson pair.
    pub fn lesson_exists(&self, course: &str, lesson: &str) -> bool {
        self.metadata(course, lesson).is_some()
    }

    /// Whether any lesson was discovered under this course. Used by the routing
    /// layer to decide between a course page and a 404.
    pub fn course_exists(&self, course: &str) -> bool {
        self.catalog().get(course).is_some_and(|lessons| !lessons.is_empty())
    }

    /// Normalized tags for the lesson, or `None` for an unknown pair.
    pub fn tags(&self, course: &str, lesson: &str) -> Option<&TagMap> {
        self.metadata(course, lesson).map(|metadata| &metadata.tags)
    }

    /// Whether the lesson should appear in filtered lesson listings, or `None`
    /// for an unknown pair. Unindexed lessons are still usable as instruction
    /// lessons in playlists or course info.
    pub fn is_indexed(&self, course: &str, lesson: &str) -> Option<bool> {
        self.metadata(course, lesson).map(|metadata| metadata.is_indexed)
    }

    /// License for the lesson. Defaults to `""` if the course, lesson or license
    /// was not found.
    pub fn license(&self, course: &str, lesson: &str) -> &str {
        self.metadata(course, lesson).and_then(|metadata| metadata.license.as_deref()).unwrap_or("")
    }

    /// Level for the lesson. Defaults to `0` if the course, lesson or level was
    /// not found.
    pub fn level(&self, course: &str, lesson: &str) -> u64 {
        self.metadata(course, lesson).and_then(|metadata| metadata.level).unwrap_or(0)
    }

    /// Lesson identifiers in a course, alphabetically sorted; empty for an
    /// unknown course.
    ///
    /// Memoized per course: repeated calls return the same shared list without
    /// re-deriving it. The list is a view over the single cached catalog.
    pub fn lessons_in_course(&self, course: &str) -> Arc<[String]> {
        let catalog = self.catalog();

        // The memo table is write-once per key, so a poisoned lock is still usable.
        let mut memo = match self.lesson_lists.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(list) = memo.get(course) {
            return Arc::clone(list);
        }

        let list: Arc<[String]> = match catalog.get(course) {
            Some(lessons) => lessons.keys().cloned().collect(),
            None => Arc::from(Vec::new()),
        };
        memo.insert(course.to_string(), Arc::clone(&list));
        list
    }
}
