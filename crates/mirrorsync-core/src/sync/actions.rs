//! Per-entry mirror action determination logic

use std::path::{Path, PathBuf};

use crate::comparison::TimestampComparator;
use crate::error::Result;

/// Why a file is being copied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyReason {
    /// Nothing exists at the destination path
    Missing,
    /// Source modification time is strictly newer
    SourceNewer,
}

/// Mirror action to perform for a single source entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorAction {
    /// Create the destination directory, then descend into it
    CreateDirectory {
        /// Directory to create
        dest: PathBuf,
    },
    /// Destination path already exists, just descend
    EnterDirectory {
        /// Existing destination path
        dest: PathBuf,
    },
    /// Copy content and timestamps from source to destination
    Copy {
        /// File to read
        source: PathBuf,
        /// File to create or overwrite
        dest: PathBuf,
        /// Why the copy is needed
        reason: CopyReason,
    },
    /// Destination is up to date
    Skip {
        /// Destination file left alone
        path: PathBuf,
    },
}

/// Resolves a source entry into a mirror action
pub struct MirrorActionResolver;

impl MirrorActionResolver {
    /// Determine the action for `source`, whose counterpart is `dest`.
    ///
    /// An existing destination directory is entered whatever its type; an
    /// existing destination file is replaced only when the source is strictly
    /// newer.
    ///
    /// # Errors
    ///
    /// Returns an error if modification times cannot be read.
    pub fn resolve(source: &Path, dest: &Path, source_is_dir: bool) -> Result<MirrorAction> {
        let dest_exists = dest.exists();

        let action = if source_is_dir {
            if dest_exists {
                MirrorAction::EnterDirectory {
                    dest: dest.to_path_buf(),
                }
            } else {
                MirrorAction::CreateDirectory {
                    dest: dest.to_path_buf(),
                }
            }
        } else if !dest_exists {
            MirrorAction::Copy {
                source: source.to_path_buf(),
                dest: dest.to_path_buf(),
                reason: CopyReason::Missing,
            }
        } else if TimestampComparator::is_newer(source, dest)? {
            MirrorAction::Copy {
                source: source.to_path_buf(),
                dest: dest.to_path_buf(),
                reason: CopyReason::SourceNewer,
            }
        } else {
            MirrorAction::Skip {
                path: dest.to_path_buf(),
            }
        };

        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::{FileTime, set_file_mtime};
    use std::fs;
    use tempfile::TempDir;

    fn write_with_mtime(path: &Path, content: &str, secs: i64) {
        fs::write(path, content).unwrap();
        set_file_mtime(path, FileTime::from_unix_time(secs, 0)).unwrap();
    }

    #[test]
    fn test_missing_directory_is_created() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        fs::create_dir(&src).unwrap();

        let action = MirrorActionResolver::resolve(&src, &dest, true).unwrap();
        assert_eq!(action, MirrorAction::CreateDirectory { dest });
    }

    #[test]
    fn test_existing_directory_is_entered() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dest).unwrap();

        let action = MirrorActionResolver::resolve(&src, &dest, true).unwrap();
        assert_eq!(action, MirrorAction::EnterDirectory { dest });
    }

    #[test]
    fn test_missing_file_is_copied() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");
        fs::write(&src, "content").unwrap();

        let action = MirrorActionResolver::resolve(&src, &dest, false).unwrap();
        assert_eq!(
            action,
            MirrorAction::Copy {
                source: src,
                dest,
                reason: CopyReason::Missing,
            }
        );
    }

    #[test]
    fn test_newer_source_is_copied() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");
        write_with_mtime(&src, "new", 1_600_000_100);
        write_with_mtime(&dest, "old", 1_600_000_000);

        let action = MirrorActionResolver::resolve(&src, &dest, false).unwrap();
        assert!(matches!(
            action,
            MirrorAction::Copy {
                reason: CopyReason::SourceNewer,
                ..
            }
        ));
    }

    #[test]
    fn test_equal_or_older_source_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");

        write_with_mtime(&src, "same", 1_600_000_000);
        write_with_mtime(&dest, "same", 1_600_000_000);
        let action = MirrorActionResolver::resolve(&src, &dest, false).unwrap();
        assert_eq!(action, MirrorAction::Skip { path: dest.clone() });

        write_with_mtime(&dest, "newer", 1_600_000_100);
        let action = MirrorActionResolver::resolve(&src, &dest, false).unwrap();
        assert_eq!(action, MirrorAction::Skip { path: dest });
    }
}
