use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use super::load::LoadedConfig;
use super::save::make_relative;
use super::types::SlicerConfig;
use crate::cli::CliArgs;
use crate::sheet::CellSize;
use crate::slicer::SliceOptions;

/// Settings after combining the CLI and an optional config file
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub options: SliceOptions,
    pub filename_only: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
pub fn merge_config_with_args(cli: &CliArgs) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &cli.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Input: the string as given is what ends up in the manifest
    let (input, given_input) = if let Some(input) = &cli.input {
        (PathBuf::from(input), input.clone())
    } else if let Some(lc) = &loaded_config
        && let (Some(path), Some(given)) = (lc.resolve_input(), lc.config.input.clone())
    {
        (path, given)
    } else {
        return Err(missing("input"));
    };

    let output = cli
        .output
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_output))
        .ok_or_else(|| missing("output"))?;

    let sprite_width = cli
        .sprite_width
        .or_else(|| loaded_config.as_ref().and_then(|lc| lc.config.sprite_width))
        .ok_or_else(|| missing("sprite_width"))?;

    let sprite_height = cli
        .sprite_height
        .or_else(|| loaded_config.as_ref().and_then(|lc| lc.config.sprite_height))
        .ok_or_else(|| missing("sprite_height"))?;

    let cell_size = CellSize::new(sprite_width, sprite_height)?;

    // Flag presence enables it, otherwise the config decides
    let filename_only = cli.filename_only
        || loaded_config
            .as_ref()
            .map(|lc| lc.config.filename_only)
            .unwrap_or(false);

    let sheet_name = if filename_only {
        Path::new(&given_input)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or(given_input)
    } else {
        given_input
    };

    Ok(MergedConfig {
        options: SliceOptions {
            input,
            sheet_name,
            cell_size,
            output,
        },
        filename_only,
    })
}

fn missing(field: &str) -> anyhow::Error {
    anyhow!(
        "no {} given; pass it on the command line or set it in the config file",
        field
    )
}

/// Build a config file equivalent to the merged settings, with paths
/// relative to the directory the config will be saved in.
pub fn effective_config(merged: &MergedConfig, config_path: &Path) -> Result<SlicerConfig> {
    let config_dir = config_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let base = std::path::absolute(config_dir).context("failed to resolve config directory")?;
    let relative = |path: &Path| -> Result<String> {
        let absolute = std::path::absolute(path)
            .with_context(|| format!("failed to resolve path: {}", path.display()))?;
        Ok(make_relative(&absolute, &base))
    };

    let options = &merged.options;
    Ok(SlicerConfig {
        input: Some(relative(&options.input)?),
        output: Some(relative(&options.output)?),
        sprite_width: Some(options.cell_size.width()),
        sprite_height: Some(options.cell_size.height()),
        filename_only: merged.filename_only,
        ..SlicerConfig::default()
    })
}
