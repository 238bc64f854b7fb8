use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::manifest::{Manifest, build_manifest};
use crate::output::write_manifest;
use crate::sheet::{CellSize, Grid, load_sheet};

/// Everything needed to turn one sheet into one manifest file
#[derive(Debug, Clone)]
pub struct SliceOptions {
    /// Sheet image to read
    pub input: PathBuf,
    /// Value recorded in each record's `spriteSheet`
    pub sheet_name: String,
    pub cell_size: CellSize,
    /// Manifest file to create or overwrite
    pub output: PathBuf,
}

/// Load a sheet, describe every grid cell and write the manifest.
///
/// The returned manifest is exactly what was written to `options.output`.
pub fn process_spritesheet(options: &SliceOptions) -> Result<Manifest> {
    let sheet = load_sheet(&options.input)?;
    let (width, height) = sheet.dimensions();
    let grid = Grid::new(width, height, options.cell_size);

    info!(
        "Slicing {} ({}x{}) into {} columns x {} rows of {}x{}",
        options.input.display(),
        width,
        height,
        grid.columns(),
        grid.rows(),
        options.cell_size.width(),
        options.cell_size.height()
    );

    let manifest = build_manifest(&sheet, &options.sheet_name, options.cell_size);
    info!(
        "Described {} sprites ({} empty)",
        manifest.len(),
        manifest.empty_cells()
    );

    write_manifest(&manifest, &options.output)?;
    info!("Wrote {}", options.output.display());

    Ok(manifest)
}
