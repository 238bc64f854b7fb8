use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::SlicerConfig;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: SlicerConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: SlicerConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Input sheet path, resolved against the config directory.
    pub fn resolve_input(&self) -> Option<PathBuf> {
        self.config.input.as_ref().map(|p| self.config_dir.join(p))
    }

    /// Output manifest path, resolved against the config directory.
    pub fn resolve_output(&self) -> Option<PathBuf> {
        self.config.output.as_ref().map(|p| self.config_dir.join(p))
    }
}
