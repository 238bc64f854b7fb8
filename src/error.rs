use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SliceError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Sprite size must be positive in both dimensions, got {width}x{height}")]
    InvalidCellSize { width: u32, height: u32 },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
