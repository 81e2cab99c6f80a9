use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_yaml_ng::Value;

use crate::models::RawDescriptor;

/// Parse a single `lesson.yml` descriptor file.
///
/// An empty file is a valid all-defaults descriptor. Field extraction is lenient
/// (wrongly-typed fields degrade with a warning); only an unreadable file or
/// invalid YAML is an error, which the descriptor source reports and skips.
pub fn parse_descriptor_file(path: &Path, source_id: &str) -> Result<RawDescriptor> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor file: {}", path.display()))?;
    parse_descriptor(&content, source_id)
}

/// Parse descriptor YAML from a string.
pub fn parse_descriptor(content: &str, source_id: &str) -> Result<RawDescriptor> {
    if content.trim().is_empty() {
        return Ok(RawDescriptor::default());
    }

    let value: Value = serde_yaml_ng::from_str(content)
        .with_context(|| format!("Invalid YAML in descriptor {}", source_id))?;
    Ok(RawDescriptor::from_value(&value, source_id))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_full_descriptor() {
        let raw = parse_descriptor(
            "level: 1\nlicense: 'cc-by-sa 4.0'\ntags:\n  topic: [app]\n",
            "scratch/astrokatt/lesson.yml",
        )
        .unwrap();

        assert_eq!(raw.level, Some(1));
        assert_eq!(raw.license.as_deref(), Some("cc-by-sa 4.0"));
        assert!(raw.is_indexed());
    }

    #[test]
    fn test_parse_empty_descriptor_is_all_defaults() {
        let raw = parse_descriptor("", "x/y/lesson.yml").unwrap();
        assert_eq!(raw, RawDescriptor::default());

        let raw = parse_descriptor("   \n\n", "x/y/lesson.yml").unwrap();
        assert_eq!(raw, RawDescriptor::default());
    }

    #[test]
    fn test_parse_invalid_yaml_is_an_error() {
        let result = parse_descriptor("level: [unclosed", "x/y/lesson.yml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("x/y/lesson.yml"));
    }

    #[test]
    fn test_parse_descriptor_file_reads_from_disk() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "level: 3\nindexed: false").expect("Failed to write temp file");

        let raw = parse_descriptor_file(file.path(), "x/y/lesson.yml").unwrap();
        assert_eq!(raw.level, Some(3));
        assert!(!raw.is_indexed());
    }

    #[test]
    fn test_parse_descriptor_file_missing_file() {
        let result =
            parse_descriptor_file(Path::new("/nonexistent/lesson.yml"), "x/y/lesson.yml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read descriptor file"));
    }
}
