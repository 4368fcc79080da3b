//! One-way mirroring engine
//!
//! Walks the source tree depth first, creating missing destination
//! directories and copying files that are missing at the destination or
//! strictly newer at the source. Destination-only entries are left alone.

mod actions;
mod executor;
mod reporting;
mod walker;


pub use actions::{CopyReason, MirrorAction, MirrorActionResolver};
pub use executor::FileOperationExecutor;
pub use reporting::MirrorReporter;
pub use walker::MirrorWalker;

/// Options controlling a mirror run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorOptions {
    /// Report what would be copied without touching the destination
    pub dry_run: bool,
}

impl MirrorOptions {
    /// Create new mirror options
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

/// Counters accumulated over one mirror run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorResult {
    /// Files copied (or that would be copied in dry-run mode)
    pub files_copied: usize,
    /// Directories visited, including the source root
    pub directories_searched: usize,
    /// Files left alone because the destination was not older
    pub files_skipped: usize,
}

impl MirrorResult {
    /// Whether nothing needed copying
    #[must_use]
    pub const fn is_up_to_date(&self) -> bool {
        self.files_copied == 0
    }
}
