use clap::Parser;
use std::path::PathBuf;

/// One-way directory mirroring tool
///
/// Copies files from SOURCE_DIRECTORY to DESTINATION_DIRECTORY, creating
/// missing files and folders and overwriting files only when the source copy
/// is newer. Nothing is ever deleted from the destination.
#[derive(Parser, Debug)]
#[command(name = "mirrorsync")]
#[command(about, long_about, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview changes without copying anything (dry-run)
    #[arg(long)]
    pub dry_run: bool,

    /// SOURCE_DIRECTORY followed by DESTINATION_DIRECTORY
    #[arg(value_name = "DIRECTORY")]
    pub directories: Vec<PathBuf>,
}
