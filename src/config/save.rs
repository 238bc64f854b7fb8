use std::path::Path;

use anyhow::{Context, Result};

use super::types::SlicerConfig;

/// Save a config to a JSON file with pretty formatting.
pub fn save_config(config: &SlicerConfig, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config)
        .with_context(|| "failed to serialize config to JSON")?;

    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    Ok(())
}

/// Express `path` relative to `base` when it lies underneath it.
///
/// Paths outside `base` are returned unchanged.
pub fn make_relative(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
