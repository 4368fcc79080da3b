//! Depth-first walk of the source tree

use anyhow::Context;
use log::debug;
use walkdir::WalkDir;

use super::actions::MirrorActionResolver;
use super::executor::FileOperationExecutor;
use super::{MirrorOptions, MirrorResult};
use crate::error::Result;
use crate::pair::DirectoryPair;

/// Main mirror engine
pub struct MirrorWalker {
    options: MirrorOptions,
}

impl MirrorWalker {
    /// Create a new walker
    #[must_use]
    pub const fn new(options: MirrorOptions) -> Self {
        Self { options }
    }

    /// Mirror `pair.source` into `pair.destination`.
    ///
    /// Entries are visited pre-order: each directory is created (if needed)
    /// before its contents, and a subdirectory is finished before its next
    /// sibling. Sibling order is whatever the filesystem yields. Symlinks are
    /// followed. The first error aborts the run; copies already made stay.
    ///
    /// # Errors
    ///
    /// Returns an error if either root is invalid or any filesystem operation
    /// fails.
    pub fn mirror(&self, pair: &DirectoryPair) -> Result<MirrorResult> {
        pair.validate()?;

        let mut result = MirrorResult::default();
        let executor = FileOperationExecutor::new(self.options.dry_run);

        for entry in WalkDir::new(&pair.source).follow_links(true) {
            let entry = entry.with_context(|| {
                format!("Failed to read source tree: {}", pair.source.display())
            })?;
            let is_dir = entry.file_type().is_dir();

            if is_dir {
                result.directories_searched += 1;
                debug!("Searching: {}", entry.path().display());
            }
            if entry.depth() == 0 {
                continue;
            }

            let rel_path = entry
                .path()
                .strip_prefix(&pair.source)
                .with_context(|| format!("Failed to strip prefix from {}", entry.path().display()))?;
            let dest_path = pair.destination.join(rel_path);

            let action = MirrorActionResolver::resolve(entry.path(), &dest_path, is_dir)?;
            executor.execute(&action, &mut result)?;
        }

        Ok(result)
    }
}
