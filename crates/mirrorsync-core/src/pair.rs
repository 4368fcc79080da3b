//! The source/destination root pair a mirror run operates on

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::{MirrorError, Result};

/// Source and destination roots of a mirror run.
///
/// The walk descends both sides in lockstep by entry name, starting here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPair {
    /// Tree being mirrored from (read only)
    pub source: PathBuf,
    /// Tree being mirrored into (never deleted from)
    pub destination: PathBuf,
}

impl DirectoryPair {
    /// Create a pair from explicit paths
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Build a pair from positional command line arguments.
    ///
    /// Performs no filesystem access.
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::InvalidArgumentCount`] unless exactly two
    /// arguments are given.
    pub fn from_args(args: &[PathBuf]) -> std::result::Result<Self, MirrorError> {
        match args {
            [source, destination] => Ok(Self::new(source, destination)),
            _ => Err(MirrorError::InvalidArgumentCount {
                count: args.len(),
                args: args.to_vec(),
            }),
        }
    }

    /// Check that both roots exist and are directories.
    ///
    /// # Errors
    ///
    /// Returns a [`MirrorError`] for a missing or non-directory root, or the
    /// underlying I/O error if metadata cannot be read.
    pub fn validate(&self) -> Result<()> {
        check_directory(&self.source, MirrorError::SourceNotFound)?;
        check_directory(&self.destination, MirrorError::DestinationNotFound)?;
        Ok(())
    }
}

fn check_directory(path: &Path, not_found: fn(PathBuf) -> MirrorError) -> Result<()> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(MirrorError::NotADirectory(path.to_path_buf()).into()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(not_found(path.to_path_buf()).into()),
        Err(e) => Err(e).with_context(|| format!("Failed to read metadata for: {}", path.display())),
    }
}
