use crate::indexer::source::DescriptorSource;
use crate::models::{Catalog, LessonMetadata};
use crate::tags::cleanse_tags;

/// Build the catalog from every descriptor the source can enumerate.
///
/// This function owns the validation and defaulting policy:
///
/// - `is_indexed` is true unless the raw `indexed` field is the literal boolean
///   `false` (explicit opt-out; `0`, `null`, `""` and absence do not disable it)
/// - An indexed lesson with a falsy level (absent or zero) gets a non-fatal
///   data-quality warning naming the course and lesson, and is kept as-is
/// - Raw tags are normalized via [`cleanse_tags`] with the descriptor's source id
///   for diagnostic context
/// - Records are inserted at `[course, lesson]` with an explicit two-level insert;
///   sibling lessons already stored under the same course are never clobbered
///
/// No condition here is fatal: the worst outcome of bad input data is a degraded
/// metadata record or a warning line, never an aborted build.
///
/// # Examples
///
/// ```no_run
/// use lesson_catalog::indexer::{FsDescriptorSource, build_catalog};
///
/// let source = FsDescriptorSource::new("lessonSrc");
/// let catalog = build_catalog(&source);
/// println!("Cataloged {} courses", catalog.len());
/// ```
pub fn build_catalog(source: &dyn DescriptorSource) -> Catalog {
    let mut catalog = Catalog::new();
    let mut warnings = 0;

    for discovered in source.enumerate() {
        let raw = discovered.raw;
        let is_indexed = raw.is_indexed();

        if is_indexed && raw.has_falsy_level() {
            eprintln!(
                "Warning: The indexed lesson {}/{} is missing 'level'.",
                discovered.course, discovered.lesson
            );
            warnings += 1;
        }

        let tags = cleanse_tags(&raw.tags, &discovered.source_id);
        let metadata =
            LessonMetadata { level: raw.level, license: raw.license, tags, is_indexed };

        catalog.entry(discovered.course).or_default().insert(discovered.lesson, metadata);
    }

    let lesson_count: usize = catalog.values().map(|lessons| lessons.len()).sum();
    eprintln!(
        "Cataloged {} lessons in {} courses ({} warnings)",
        lesson_count,
        catalog.len(),
        warnings
    );

    catalog
}
