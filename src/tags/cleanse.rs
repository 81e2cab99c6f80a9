use serde_yaml_ng::Value;

use crate::models::TagMap;

/// Normalize a raw `tags` structure into category → ordered tag values.
///
/// Best-effort by contract: malformed input degrades to a partial (possibly empty)
/// normalized structure with stderr warnings naming `source_id`, and never fails.
///
/// - Null or absent tags → empty map
/// - A scalar category value becomes a one-element sequence
/// - Sequence elements keep their order; strings, numbers and booleans are kept
///   (stringified), other shapes are dropped
/// - Tag values are trimmed and lowercased; empty values are dropped
pub fn cleanse_tags(raw: &Value, source_id: &str) -> TagMap {
    let mut tags = TagMap::new();

    let mapping = match raw {
        Value::Null => return tags,
        Value::Mapping(mapping) => mapping,
        _ => {
            eprintln!("Warning: Ignoring malformed tags in {} (expected a mapping)", source_id);
            return tags;
        }
    };

    for (key, value) in mapping {
        let Some(category) = key.as_str() else {
            eprintln!("Warning: Ignoring non-string tag category in {}", source_id);
            continue;
        };

        let values = match value {
            Value::Null => Vec::new(),
            Value::Sequence(items) => items
                .iter()
                .filter_map(|item| cleanse_value(item, category, source_id))
                .collect(),
            scalar => cleanse_value(scalar, category, source_id).into_iter().collect(),
        };
        tags.insert(category.to_string(), values);
    }

    tags
}

/// Normalize a single tag value. Strings pass through, numbers and booleans are
/// stringified, anything else is dropped with a warning.
fn cleanse_value(value: &Value, category: &str, source_id: &str) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => {
            eprintln!(
                "Warning: Ignoring malformed tag value in category '{}' of {}",
                category, source_id
            );
            return None;
        }
    };

    let cleaned = text.trim().to_lowercase();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}
