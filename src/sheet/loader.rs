use std::path::Path;

use anyhow::Result;
use image::{ImageReader, RgbaImage};
use log::debug;

use crate::error::SliceError;

/// Load a spritesheet from disk as RGBA8.
///
/// Images without an alpha channel are widened with every pixel fully opaque.
pub fn load_sheet(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(SliceError::InputNotFound(path.to_path_buf()).into());
    }

    let image = ImageReader::open(path)
        .map_err(|e| SliceError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| SliceError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SliceError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!("Decoded {} as {:?}", path.display(), image.color());

    Ok(image.into_rgba8())
}
