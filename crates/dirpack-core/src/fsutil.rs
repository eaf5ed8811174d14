//! Filesystem helpers: cleaned-path opens, logged cleanup, parallel mkdir.

use crate::error::PackError;
use crate::error::Result;
use rayon::prelude::*;
use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Lexically normalizes a path: `.` components are dropped and `..` pops
/// its parent where one exists.
///
/// No filesystem access; symlinks are not resolved.
///
/// # Examples
///
/// ```
/// use dirpack_core::fsutil::clean_path;
/// use std::path::Path;
///
/// assert_eq!(clean_path(Path::new("a/b/../c")), Path::new("a/c"));
/// assert_eq!(clean_path(Path::new("./a//b/.")), Path::new("a/b"));
/// assert_eq!(clean_path(Path::new("/..")), Path::new("/"));
/// ```
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other),
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }

    cleaned
}

/// Opens a file for reading through a cleaned path.
///
/// # Errors
///
/// Returns [`PackError::Open`] carrying the path on failure.
pub fn open(path: &Path) -> Result<File> {
    File::open(clean_path(path)).map_err(|source| PackError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Opens a file with explicit options through a cleaned path.
///
/// # Errors
///
/// Returns [`PackError::Open`] carrying the path on failure.
pub fn open_with(path: &Path, options: &OpenOptions) -> Result<File> {
    options
        .open(clean_path(path))
        .map_err(|source| PackError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads a whole file through a cleaned path.
///
/// # Errors
///
/// Returns [`PackError::Read`] carrying the path on failure.
pub fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(clean_path(path)).map_err(|source| PackError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Removes the given files and directory trees, logging failures instead
/// of returning them. Missing targets are ignored.
pub fn remove_all_logged<I, P>(paths: I)
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        let removed = if path.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };

        if let Err(error) = removed
            && error.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %path.display(), %error, "remove failed");
        }
    }
}

/// Creates every listed directory (and missing parents), in parallel.
///
/// All directories are attempted regardless of earlier failures; the
/// failures are collected and aggregated, each naming its path.
///
/// # Examples
///
/// ```no_run
/// use dirpack_core::fsutil::make_dirs;
///
/// # fn main() -> dirpack_core::Result<()> {
/// make_dirs(&["/tmp/app/cache", "/tmp/app/state", "/tmp/app/logs"])?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns a single [`PackError::CreateDir`] or, for several failures, a
/// [`PackError::Multiple`] combining them all.
pub fn make_dirs<P: AsRef<Path> + Sync>(paths: &[P]) -> Result<()> {
    let errors: Vec<PackError> = paths
        .par_iter()
        .filter_map(|path| {
            let path = path.as_ref();
            fs::create_dir_all(path)
                .err()
                .map(|source| PackError::CreateDir {
                    path: path.to_path_buf(),
                    source,
                })
        })
        .collect();

    PackError::aggregate(errors).map_or(Ok(()), Err)
}
