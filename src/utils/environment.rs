use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable naming the content root when `--root` is not given.
pub const CONTENT_ROOT_ENV: &str = "LESSON_SRC";

/// Resolve the content root from an explicit flag value, falling back to the
/// `LESSON_SRC` environment variable.
pub fn resolve_content_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = flag {
        return Ok(root);
    }
    let root = env::var(CONTENT_ROOT_ENV)
        .with_context(|| format!("No content root given: pass --root or set {}", CONTENT_ROOT_ENV))?;
    Ok(PathBuf::from(root))
}
