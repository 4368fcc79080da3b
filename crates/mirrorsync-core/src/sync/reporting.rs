//! Mirror run reporting

use super::MirrorResult;
use crate::pair::DirectoryPair;

/// Mirror run reporter
pub struct MirrorReporter;

impl MirrorReporter {
    /// Line printed before the walk starts
    #[must_use]
    pub fn greeting(pair: &DirectoryPair) -> String {
        format!(
            "Copying data files from \"{}\" to \"{}\"...",
            pair.source.display(),
            pair.destination.display()
        )
    }

    /// Generate the one-line summary printed after the walk
    #[must_use]
    pub fn generate_summary(result: &MirrorResult) -> String {
        let folders = format!(
            "searched {} folder{}",
            result.directories_searched,
            plural(result.directories_searched)
        );

        if result.is_up_to_date() {
            format!("All data files are up to date. Nothing was copied. ({folders})")
        } else {
            format!(
                "Copied {} modified file{} ({folders})",
                result.files_copied,
                plural(result.files_copied)
            )
        }
    }
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
