use std::num::NonZeroU32;

use crate::error::SliceError;

/// Pixel dimensions of one grid cell. Both sides are guaranteed non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl CellSize {
    pub fn new(width: u32, height: u32) -> Result<Self, SliceError> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(SliceError::InvalidCellSize { width, height }),
        }
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn height(&self) -> u32 {
        self.height.get()
    }
}

/// One grid cell, clipped to the sheet bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Position in row-major enumeration order
    pub index: usize,
    pub x: u32,
    pub y: u32,
    /// Clipped width (narrower than the cell size on the right edge)
    pub width: u32,
    /// Clipped height (shorter than the cell size on the bottom edge)
    pub height: u32,
}

/// Regular grid laid over a spritesheet.
///
/// Cells are enumerated top-to-bottom, left-to-right. When the cell size does
/// not divide the sheet evenly, the trailing column and row hold partial cells.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    sheet_width: u32,
    sheet_height: u32,
    cell: CellSize,
}

impl Grid {
    pub fn new(sheet_width: u32, sheet_height: u32, cell: CellSize) -> Self {
        Self {
            sheet_width,
            sheet_height,
            cell,
        }
    }

    pub fn columns(&self) -> u32 {
        self.sheet_width.div_ceil(self.cell.width())
    }

    pub fn rows(&self) -> u32 {
        self.sheet_height.div_ceil(self.cell.height())
    }

    /// Total number of cells, partial edge cells included
    pub fn len(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (cell_w, cell_h) = (self.cell.width(), self.cell.height());

        (0..self.rows())
            .flat_map(move |row| (0..self.columns()).map(move |col| (col, row)))
            .enumerate()
            .map(move |(index, (col, row))| {
                let x = col * cell_w;
                let y = row * cell_h;
                Cell {
                    index,
                    x,
                    y,
                    width: cell_w.min(self.sheet_width - x),
                    height: cell_h.min(self.sheet_height - y),
                }
            })
    }
}
