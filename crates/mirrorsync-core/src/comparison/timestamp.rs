//! File timestamp comparison for determining recency

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use anyhow::Context;
use filetime::FileTime;

use crate::error::Result;

/// Timestamp comparator
pub struct TimestampComparator;

impl TimestampComparator {
    /// Check if source file is strictly newer than destination file
    ///
    /// Equal timestamps are not newer.
    ///
    /// # Errors
    ///
    /// Returns an error if file metadata cannot be read.
    pub fn is_newer(source: &Path, destination: &Path) -> Result<bool> {
        Ok(Self::compare_times(source, destination)? == Ordering::Greater)
    }

    /// Get the modification time of a file
    ///
    /// # Errors
    ///
    /// Returns an error if file metadata cannot be read.
    pub fn modified_time(path: &Path) -> Result<FileTime> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read metadata for: {}", path.display()))?;

        Ok(FileTime::from_last_modification_time(&metadata))
    }

    /// Compare modification times and return ordering
    ///
    /// # Errors
    ///
    /// Returns an error if file metadata cannot be read.
    pub fn compare_times(source: &Path, destination: &Path) -> Result<Ordering> {
        let source_time = Self::modified_time(source)?;
        let dest_time = Self::modified_time(destination)?;

        Ok(source_time.cmp(&dest_time))
    }
}
