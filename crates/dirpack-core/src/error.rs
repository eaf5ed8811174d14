//! Error types for filtering, walking and packing operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PackError`.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while filtering, walking or packing a directory.
#[derive(Error, Debug)]
pub enum PackError {
    /// I/O operation failed without more specific context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A filter source file does not exist.
    ///
    /// Distinct from read failures so that callers can treat a missing
    /// ignore file as "no extra filtering" instead of aborting.
    #[error("filter source not found: {path}")]
    FilterSourceMissing {
        /// Path of the missing filter source.
        path: PathBuf,
    },

    /// A filter source file exists but could not be read.
    #[error("cannot read filter source {path}: {source}")]
    FilterSourceRead {
        /// Path of the filter source.
        path: PathBuf,
        /// Underlying read failure.
        source: std::io::Error,
    },

    /// A candidate path is not located under the base directory.
    #[error("path {path} is not under base directory {base}")]
    OutsideBase {
        /// The offending path.
        path: PathBuf,
        /// The base directory it was resolved against.
        base: PathBuf,
    },

    /// A filter failed while deciding on an entry.
    #[error("apply filter {name}: {source}")]
    Filter {
        /// Name of the failing filter.
        name: String,
        /// Underlying failure.
        source: Box<PackError>,
    },

    /// Directory traversal aborted.
    #[error("walk failed at {path}: {source}")]
    Walk {
        /// Path at which traversal failed.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// A file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        /// Path of the file.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// A file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// A destination file could not be created.
    #[error("cannot create {path}: {source}")]
    Create {
        /// Path of the destination.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// A directory could not be created.
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        /// Path of the directory.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// An entry could not be appended to the archive.
    #[error("cannot add {name} to archive: {source}")]
    Append {
        /// In-archive entry name.
        name: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// The archive stream could not be finalized.
    #[error("cannot finalize archive {path}: {source}")]
    Finish {
        /// Path of the archive.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// Several independent failures, none masking another.
    #[error("{}", format_multiple(.0))]
    Multiple(Vec<PackError>),
}

impl PackError {
    /// Folds a list of errors into a single one.
    ///
    /// Returns `None` for an empty list and the error itself for a list of
    /// one; longer lists become [`PackError::Multiple`].
    #[must_use]
    pub fn aggregate(mut errors: Vec<Self>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }

    /// Returns `true` if this error reports a missing filter source.
    ///
    /// Callers commonly map this condition to an empty filter instead of
    /// propagating it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirpack_core::PackError;
    /// use std::path::PathBuf;
    ///
    /// let err = PackError::FilterSourceMissing {
    ///     path: PathBuf::from(".dirpackignore"),
    /// };
    /// assert!(err.is_filter_source_missing());
    /// ```
    #[must_use]
    pub const fn is_filter_source_missing(&self) -> bool {
        matches!(self, Self::FilterSourceMissing { .. })
    }
}

fn format_multiple(errors: &[PackError]) -> String {
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!("{} errors: {joined}", errors.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_empty() {
        assert!(PackError::aggregate(Vec::new()).is_none());
    }

    #[test]
    fn test_aggregate_single_unwrapped() {
        let err = PackError::FilterSourceMissing {
            path: PathBuf::from(".gitignore"),
        };
        let folded = PackError::aggregate(vec![err]).unwrap();
        assert!(folded.is_filter_source_missing());
    }

    #[test]
    fn test_aggregate_joins_messages() {
        let errors = vec![
            PackError::FilterSourceMissing {
                path: PathBuf::from("a"),
            },
            PackError::OutsideBase {
                path: PathBuf::from("/x/y"),
                base: PathBuf::from("/z"),
            },
        ];
        let folded = PackError::aggregate(errors).unwrap();
        let msg = folded.to_string();
        assert!(msg.starts_with("2 errors:"));
        assert!(msg.contains("filter source not found: a"));
        assert!(msg.contains("not under base directory /z"));
    }

    #[test]
    fn test_missing_filter_source_is_distinct() {
        let missing = PackError::FilterSourceMissing {
            path: PathBuf::from("x"),
        };
        let read = PackError::FilterSourceRead {
            path: PathBuf::from("x"),
            source: std::io::Error::other("boom"),
        };
        assert!(missing.is_filter_source_missing());
        assert!(!read.is_filter_source_missing());
    }
}
