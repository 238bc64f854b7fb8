use image::{RgbaImage, imageops};
use log::debug;

use super::{Manifest, SpriteRecord};
use crate::sheet::{CellSize, Grid, visible_bounds};

/// Slice a sheet into grid cells and describe each one.
///
/// Indices are assigned in row-major enumeration order starting at 0.
/// `sheet_name` is copied verbatim into every record.
pub fn build_manifest(sheet: &RgbaImage, sheet_name: &str, cell_size: CellSize) -> Manifest {
    let (width, height) = sheet.dimensions();
    let grid = Grid::new(width, height, cell_size);
    let mut manifest = Manifest::new();

    for cell in grid.cells() {
        let view = imageops::crop_imm(sheet, cell.x, cell.y, cell.width, cell.height);
        let bounds = visible_bounds(&*view);
        let visible = bounds.is_some();

        let record = SpriteRecord::new(cell.index, sheet_name, bounds.unwrap_or((0, 0)));
        debug!(
            "Cell {} at ({}, {}) {}x{}: trim {}x{}{}",
            cell.index,
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            record.x_trim,
            record.y_trim,
            if visible { "" } else { " (empty)" }
        );
        manifest.push(record, visible);
    }

    manifest
}
