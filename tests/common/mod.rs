//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use lesson_catalog::models::DiscoveredDescriptor;
use lesson_catalog::parsers::parse_descriptor;
use tempfile::TempDir;

/// Builder for content trees of `<course>/<lesson>/lesson.yml` descriptors
pub struct LessonTreeBuilder {
    temp_dir: TempDir,
}

impl LessonTreeBuilder {
    /// Create a new builder with an empty content root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the content root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a descriptor built from a [`DescriptorBuilder`]
    pub fn with_descriptor(self, course: &str, lesson: &str, body: &DescriptorBuilder) -> Self {
        self.with_raw_descriptor(course, lesson, &body.to_yaml())
    }

    /// Add a descriptor with a literal YAML body
    pub fn with_raw_descriptor(self, course: &str, lesson: &str, content: &str) -> Self {
        let dir = self.temp_dir.path().join(course).join(lesson);
        fs::create_dir_all(&dir).expect("Failed to create lesson dir");
        fs::write(dir.join("lesson.yml"), content).expect("Failed to write lesson.yml");
        self
    }

    /// Add an arbitrary non-descriptor file, for discovery-layout tests
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(path, content).expect("Failed to write file");
        self
    }
}

/// Builder emitting `lesson.yml` YAML bodies
#[derive(Default)]
pub struct DescriptorBuilder {
    level: Option<u64>,
    license: Option<String>,
    indexed: Option<String>,
    tags: Vec<(String, Vec<String>)>,
}

impl DescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: u64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn license(mut self, license: &str) -> Self {
        self.license = Some(license.to_string());
        self
    }

    pub fn indexed(self, indexed: bool) -> Self {
        self.indexed_raw(if indexed { "true" } else { "false" })
    }

    /// Set the raw YAML value of `indexed`, e.g. `"0"` or `"null"`
    pub fn indexed_raw(mut self, raw: &str) -> Self {
        self.indexed = Some(raw.to_string());
        self
    }

    pub fn tag(mut self, category: &str, values: &[&str]) -> Self {
        self.tags.push((category.to_string(), values.iter().map(|v| v.to_string()).collect()));
        self
    }

    pub fn to_yaml(&self) -> String {
        let mut yaml = String::new();
        if let Some(level) = self.level {
            yaml.push_str(&format!("level: {}\n", level));
        }
        if let Some(license) = &self.license {
            yaml.push_str(&format!("license: '{}'\n", license));
        }
        if let Some(indexed) = &self.indexed {
            yaml.push_str(&format!("indexed: {}\n", indexed));
        }
        if !self.tags.is_empty() {
            yaml.push_str("tags:\n");
            for (category, values) in &self.tags {
                yaml.push_str(&format!("  {}: [{}]\n", category, values.join(", ")));
            }
        }
        yaml
    }
}

/// A discovered-descriptor fixture for in-memory sources
pub fn descriptor(course: &str, lesson: &str, yaml: &str) -> DiscoveredDescriptor {
    let source_id = format!("{}/{}/lesson.yml", course, lesson);
    let raw = parse_descriptor(yaml, &source_id).expect("valid fixture YAML");
    DiscoveredDescriptor { course: course.into(), lesson: lesson.into(), source_id, raw }
}

/// A small realistic content root spanning several courses
pub fn realistic_content_root() -> LessonTreeBuilder {
    LessonTreeBuilder::new()
        .with_descriptor(
            "scratch",
            "astrokatt",
            &DescriptorBuilder::new()
                .level(1)
                .license("[cc-by-sa 3.0](http://creativecommons.org/licenses/by-sa/3.0/)")
                .tag("topic", &["block_based", "app"])
                .tag("subject", &["technology", "programming"])
                .tag("grade", &["secondary", "junior"]),
        )
        .with_descriptor(
            "scratch",
            "straffespark",
            &DescriptorBuilder::new().level(2).tag("topic", &["block_based", "game"]),
        )
        .with_descriptor(
            "python",
            "intro",
            &DescriptorBuilder::new().indexed(false).license("cc-by-sa 4.0"),
        )
        .with_descriptor("web", "nettside", &DescriptorBuilder::new().level(3))
}
