mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use commands::Mirror;
use log::LevelFilter;
use mirrorsync_core::{DirectoryPair, MirrorOptions};

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    init_logger(cli.verbose, cli.dry_run);

    // Argument count is checked before anything touches the filesystem
    let pair = DirectoryPair::from_args(&cli.directories)?;
    let options = MirrorOptions::new(cli.dry_run);

    Mirror::execute(&pair, options).context("Failed to mirror directories")?;

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the level chosen from the flags
fn init_logger(verbose: bool, dry_run: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else if dry_run {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
