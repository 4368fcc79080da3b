use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `anyhow::Error`
pub type Result<T> = anyhow::Result<T>;

/// Failures detected by mirrorsync itself, before or outside of raw I/O.
///
/// Filesystem errors hit during the walk are not mapped onto this enum; they
/// surface as `std::io::Error` wrapped with the offending path.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Wrong number of positional arguments
    #[error(
        "mirrorsync needs two arguments: A source directory and a destination directory.\n\
         It was given {count} arguments: {args:?}"
    )]
    InvalidArgumentCount {
        /// Number of arguments received
        count: usize,
        /// The arguments as received
        args: Vec<PathBuf>,
    },

    /// Source root does not exist
    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Destination root does not exist; it is never created by mirrorsync
    #[error("Destination directory not found: {}", .0.display())]
    DestinationNotFound(PathBuf),

    /// A root path exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_count_message() {
        let err = MirrorError::InvalidArgumentCount {
            count: 1,
            args: vec![PathBuf::from("only-one")],
        };
        let msg = err.to_string();

        assert!(msg.contains("needs two arguments"));
        assert!(msg.contains("It was given 1 arguments"));
        assert!(msg.contains("only-one"));
    }

    #[test]
    fn test_path_errors_name_the_path() {
        let err = MirrorError::SourceNotFound(PathBuf::from("/no/such/src"));
        assert_eq!(err.to_string(), "Source directory not found: /no/such/src");

        let err = MirrorError::NotADirectory(PathBuf::from("file.txt"));
        assert_eq!(err.to_string(), "Not a directory: file.txt");
    }
}
