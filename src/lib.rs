pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod output;
pub mod sheet;
pub mod slicer;

pub use cli::CliArgs;
pub use error::SliceError;
pub use manifest::{Manifest, SpriteRecord, build_manifest};
pub use sheet::{CellSize, Grid, trim_bounds};
pub use slicer::{SliceOptions, process_spritesheet};
