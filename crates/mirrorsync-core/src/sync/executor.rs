//! File operations executor

use std::fs;
use std::path::Path;

use anyhow::Context;
use filetime::FileTime;
use log::{debug, info, trace};

use super::MirrorResult;
use super::actions::{CopyReason, MirrorAction};
use crate::error::Result;

/// Applies mirror actions to the destination tree
pub struct FileOperationExecutor {
    dry_run: bool,
}

impl FileOperationExecutor {
    /// Create a new executor
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Execute a mirror action, updating the copy counters
    ///
    /// # Errors
    ///
    /// Returns an error if a file operation fails.
    pub fn execute(&self, action: &MirrorAction, result: &mut MirrorResult) -> Result<()> {
        match action {
            MirrorAction::CreateDirectory { dest } => {
                if self.dry_run {
                    info!("[DRY RUN] Would create directory: {}", dest.display());
                } else {
                    Self::create_directory(dest)?;
                }
            }
            MirrorAction::EnterDirectory { dest } => {
                trace!("Entering existing directory: {}", dest.display());
            }
            MirrorAction::Copy {
                source,
                dest,
                reason,
            } => {
                let why = match reason {
                    CopyReason::Missing => "new",
                    CopyReason::SourceNewer => "source newer",
                };
                if self.dry_run {
                    info!("[DRY RUN] Would copy ({why}): {}", dest.display());
                } else {
                    Self::copy_file(source, dest)?;
                    debug!("Copied ({why}): {} -> {}", source.display(), dest.display());
                }
                result.files_copied += 1;
            }
            MirrorAction::Skip { path } => {
                trace!("Up to date: {}", path.display());
                result.files_skipped += 1;
            }
        }
        Ok(())
    }

    /// Create a single destination directory.
    ///
    /// Parents are not created; a missing parent is an error.
    fn create_directory(dest: &Path) -> Result<()> {
        fs::create_dir(dest)
            .with_context(|| format!("Failed to create directory: {}", dest.display()))?;
        debug!("Created directory: {}", dest.display());
        Ok(())
    }

    /// Copy file content, permissions, and access/modification times
    fn copy_file(source: &Path, dest: &Path) -> Result<()> {
        fs::copy(source, dest).with_context(|| {
            format!("Failed to copy {} to {}", source.display(), dest.display())
        })?;

        let metadata = fs::metadata(source)
            .with_context(|| format!("Failed to read metadata for: {}", source.display()))?;
        filetime::set_file_times(
            dest,
            FileTime::from_last_access_time(&metadata),
            FileTime::from_last_modification_time(&metadata),
        )
        .with_context(|| format!("Failed to set timestamps on: {}", dest.display()))?;

        Ok(())
    }
}
