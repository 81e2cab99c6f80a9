use serde_yaml_ng::Value;

/// Raw, untyped view of a single `lesson.yml` descriptor.
///
/// Fields keep their raw shape as far as the policy requires it: `indexed` must
/// distinguish the literal boolean `false` from every other value (`0`, `null`,
/// `""` and absence all leave the lesson indexed), and `tags` is handed to the tag
/// normalizer as-is. A wrongly-typed `level` or `license` degrades to absent with
/// a warning rather than failing the whole descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDescriptor {
    pub level: Option<u64>,
    pub license: Option<String>,
    pub tags: Value,
    pub indexed: Value,
}

impl Default for RawDescriptor {
    fn default() -> Self {
        Self { level: None, license: None, tags: Value::Null, indexed: Value::Null }
    }
}

impl RawDescriptor {
    /// Extract descriptor fields from parsed YAML without ever failing.
    ///
    /// `source_id` identifies the descriptor in warnings, e.g.
    /// `scratch/astrokatt/lesson.yml`.
    pub fn from_value(value: &Value, source_id: &str) -> Self {
        let mut raw = Self::default();

        if value.as_mapping().is_none() {
            if !value.is_null() {
                eprintln!(
                    "Warning: Descriptor {} is not a mapping; treating it as empty",
                    source_id
                );
            }
            return raw;
        }

        match value.get("level") {
            None | Some(Value::Null) => {}
            Some(level) => match level.as_u64() {
                Some(n) => raw.level = Some(n),
                None => {
                    eprintln!("Warning: Ignoring non-integer 'level' in {}", source_id);
                }
            },
        }

        match value.get("license") {
            None | Some(Value::Null) => {}
            Some(license) => match license.as_str() {
                Some(s) => raw.license = Some(s.to_string()),
                None => {
                    eprintln!("Warning: Ignoring non-string 'license' in {}", source_id);
                }
            },
        }

        if let Some(tags) = value.get("tags") {
            raw.tags = tags.clone();
        }
        if let Some(indexed) = value.get("indexed") {
            raw.indexed = indexed.clone();
        }

        raw
    }

    /// Only the literal boolean `false` disables indexing. This is an explicit
    /// opt-out, not a truthiness check.
    pub fn is_indexed(&self) -> bool {
        self.indexed != Value::Bool(false)
    }

    /// Whether the level is falsy (absent, non-numeric, or zero). Indexed lessons
    /// with a falsy level get a data-quality warning at build time.
    pub fn has_falsy_level(&self) -> bool {
        self.level.unwrap_or(0) == 0
    }
}

/// One discovered descriptor with its coordinates in the content tree.
///
/// `course` and `lesson` are the two path segments enclosing the descriptor file;
/// `source_id` is a human-readable locator used only in diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredDescriptor {
    pub course: String,
    pub lesson: String,
    pub source_id: String,
    pub raw: RawDescriptor,
}
