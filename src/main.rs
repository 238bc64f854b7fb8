use anyhow::Result;
use clap::Parser;
use log::info;

use gridslice::cli::CliArgs;
use gridslice::config::{effective_config, merge_config_with_args, save_config};
use gridslice::slicer::process_spritesheet;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Logger may not be initialized yet (config loading happens first)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    let merged = merge_config_with_args(&cli)?;

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("gridslice v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &cli.save_config {
        save_config(&effective_config(&merged, path)?, path)?;
        info!("Saved config to {}", path.display());
    }

    process_spritesheet(&merged.options)?;

    Ok(())
}
