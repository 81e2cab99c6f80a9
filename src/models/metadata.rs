use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Normalized classification tags: category name mapped to an ordered list of
/// tag values. The category set is open-ended (e.g. `topic`, `subject`, `grade`).
pub type TagMap = BTreeMap<String, Vec<String>>;

/// Language-independent metadata for one lesson, as declared in its `lesson.yml`.
///
/// `level` and `license` pass through from the descriptor unvalidated; `tags` is
/// always the normalized structure, never the raw one. `is_indexed` is true unless
/// the descriptor explicitly set `indexed: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonMetadata {
    pub level: Option<u64>,
    pub license: Option<String>,
    pub tags: TagMap,
    pub is_indexed: bool,
}

/// The full lesson catalog: course identifier → lesson identifier → metadata.
///
/// Exactly one entry per discovered descriptor. Once built the catalog is
/// immutable for the rest of the process lifetime.
pub type Catalog = BTreeMap<String, BTreeMap<String, LessonMetadata>>;
