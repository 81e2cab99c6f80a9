use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use walkdir::WalkDir;

use crate::models::DiscoveredDescriptor;
use crate::parsers::parse_descriptor_file;

/// Descriptor file name expected in every `<course>/<lesson>/` directory.
pub const DESCRIPTOR_FILE_NAME: &str = "lesson.yml";

/// Injectable enumeration of lesson descriptors.
///
/// Backed by a content-tree scan in production and by in-memory fixtures in tests,
/// which keeps the catalog builder fully unit-testable without filesystem access.
pub trait DescriptorSource {
    /// Enumerate all discovered descriptors as (course, lesson, raw) records.
    ///
    /// Individual malformed descriptors are reported to stderr and skipped;
    /// enumeration itself never fails.
    fn enumerate(&self) -> Vec<DiscoveredDescriptor>;
}

/// Scans a content root for descriptors matching `<course>/<lesson>/lesson.yml`.
///
/// Only files at exactly that depth count; a `lesson.yml` nested deeper (or placed
/// directly under a course) is not a descriptor.
pub struct FsDescriptorSource {
    root: PathBuf,
}

impl FsDescriptorSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DescriptorSource for FsDescriptorSource {
    fn enumerate(&self) -> Vec<DiscoveredDescriptor> {
        if !self.root.exists() {
            eprintln!("Warning: Content root {} does not exist", self.root.display());
            return Vec::new();
        }

        let mut discovered = Vec::new();
        let walker =
            WalkDir::new(&self.root).min_depth(3).max_depth(3).sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("Warning: Failed to read content tree entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || entry.file_name() != DESCRIPTOR_FILE_NAME {
                continue;
            }

            let Some((course, lesson)) = identifiers_for(entry.path(), &self.root) else {
                continue;
            };
            let source_id = format!("{}/{}/{}", course, lesson, DESCRIPTOR_FILE_NAME);

            match parse_descriptor_file(entry.path(), &source_id) {
                Ok(raw) => {
                    discovered.push(DiscoveredDescriptor { course, lesson, source_id, raw });
                }
                Err(e) => {
                    eprintln!("Warning: Skipping descriptor {}: {:#}", source_id, e);
                }
            }
        }

        discovered
    }
}

/// Course and lesson identifiers are the two path segments enclosing the
/// descriptor file; both must be non-empty valid UTF-8.
fn identifiers_for(path: &Path, root: &Path) -> Option<(String, String)> {
    let relative = path.strip_prefix(root).ok()?;
    let mut segments = relative.components();
    let course = segments.next()?.as_os_str().to_str()?.to_string();
    let lesson = segments.next()?.as_os_str().to_str()?.to_string();
    if course.is_empty() || lesson.is_empty() {
        return None;
    }
    Some((course, lesson))
}

/// Fixture-backed source for tests and benchmarks.
///
/// Counts enumerations so tests can observe that the memoized accessor builds the
/// catalog at most once.
pub struct InMemorySource {
    descriptors: Vec<DiscoveredDescriptor>,
    enumerations: AtomicUsize,
}

impl InMemorySource {
    pub fn new(descriptors: Vec<DiscoveredDescriptor>) -> Self {
        Self { descriptors, enumerations: AtomicUsize::new(0) }
    }

    /// Number of times `enumerate` has run.
    pub fn enumeration_count(&self) -> usize {
        self.enumerations.load(Ordering::SeqCst)
    }
}

impl DescriptorSource for InMemorySource {
    fn enumerate(&self) -> Vec<DiscoveredDescriptor> {
        self.enumerations.fetch_add(1, Ordering::SeqCst);
        self.descriptors.clone()
    }
}
