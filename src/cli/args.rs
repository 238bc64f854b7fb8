use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "gridslice")]
#[command(
    version,
    about = "Slice a grid spritesheet into a JSON sprite manifest",
    long_about = None
)]
pub struct CliArgs {
    /// Spritesheet image to slice
    #[arg(required_unless_present = "config")]
    pub input: Option<String>,

    /// Width of each grid cell in pixels
    #[arg(required_unless_present = "config")]
    pub sprite_width: Option<u32>,

    /// Height of each grid cell in pixels
    #[arg(required_unless_present = "config")]
    pub sprite_height: Option<u32>,

    /// Manifest file to write (overwritten if it exists)
    #[arg(required_unless_present = "config")]
    pub output: Option<PathBuf>,

    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the effective settings to a config file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Use only the file name (no directory prefix) for spriteSheet
    #[arg(long)]
    pub filename_only: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
