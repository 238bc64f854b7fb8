use serde::{Deserialize, Serialize};

/// Slicer configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlicerConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Spritesheet image path
    pub input: Option<String>,
    /// Manifest output path
    pub output: Option<String>,
    /// Cell width in pixels
    pub sprite_width: Option<u32>,
    /// Cell height in pixels
    pub sprite_height: Option<u32>,
    /// Record only the sheet's file name in `spriteSheet`
    pub filename_only: bool,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: None,
            output: None,
            sprite_width: None,
            sprite_height: None,
            filename_only: false,
        }
    }
}
