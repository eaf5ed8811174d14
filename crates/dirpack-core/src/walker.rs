//! Depth-first directory walking into a filtered file map.

use crate::error::PackError;
use crate::error::Result;
use crate::filter::PathFilter;
use crate::filter::Verdict;
use std::collections::HashMap;
use std::fs::Metadata;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Mapping from path key to entry metadata for all non-excluded paths.
///
/// Keys are absolute or base-relative per [`KeyStyle`]; iteration order is
/// unspecified.
pub type FileMap = HashMap<PathBuf, Metadata>;

/// Selects how entries are keyed in the produced [`FileMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// Keys are the absolute filesystem paths.
    Absolute,

    /// Keys are relative to the walked base directory.
    RelativeToBase,
}

/// Walks the tree rooted at `base` and builds a map of included entries.
///
/// The base entry itself is never part of the map. At each node the filters
/// are consulted in order: the first [`Verdict::Prune`] stops descent into
/// that directory, the first [`Verdict::Omit`] drops the single entry, and
/// later filters are not consulted either way. Entries surviving all
/// filters are inserted keyed per `keys`.
///
/// # Examples
///
/// ```no_run
/// use dirpack_core::IgnoreFilter;
/// use dirpack_core::KeyStyle;
/// use dirpack_core::PathFilter;
/// use dirpack_core::build_file_map;
/// use std::path::Path;
///
/// # fn main() -> dirpack_core::Result<()> {
/// let ignore = IgnoreFilter::from_lines(["target/", "*.tmp"]);
/// let map = build_file_map(
///     Path::new("./project"),
///     KeyStyle::RelativeToBase,
///     &[&ignore],
/// )?;
/// println!("{} entries", map.len());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Any traversal failure (permission, broken metadata) aborts the whole
/// walk as [`PackError::Walk`] carrying the offending path; filter failures
/// are wrapped as [`PackError::Filter`] with the filter name.
pub fn build_file_map(
    base: &Path,
    keys: KeyStyle,
    filters: &[&dyn PathFilter],
) -> Result<FileMap> {
    let mut map = FileMap::new();
    let mut walker = WalkDir::new(base).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let path = source
                    .path()
                    .map_or_else(|| base.to_path_buf(), Path::to_path_buf);
                return Err(PackError::Walk {
                    path,
                    source: source.into(),
                });
            }
        };

        // The base directory itself is not an entry of its own map.
        if entry.depth() == 0 {
            continue;
        }

        let abs = entry.path();
        let metadata = entry.metadata().map_err(|source| PackError::Walk {
            path: abs.to_path_buf(),
            source: source.into(),
        })?;

        let mut keep = true;
        for filter in filters {
            let verdict =
                filter
                    .evaluate(abs, base, &metadata)
                    .map_err(|source| PackError::Filter {
                        name: filter.name().to_owned(),
                        source: Box::new(source),
                    })?;

            match verdict {
                Verdict::Include => {}
                Verdict::Omit => {
                    keep = false;
                    break;
                }
                Verdict::Prune => {
                    tracing::debug!(
                        path = %abs.display(),
                        filter = filter.name(),
                        "pruning excluded subtree"
                    );
                    walker.skip_current_dir();
                    keep = false;
                    break;
                }
            }
        }

        if !keep {
            continue;
        }

        let key = match keys {
            KeyStyle::Absolute => abs.to_path_buf(),
            KeyStyle::RelativeToBase => abs
                .strip_prefix(base)
                .map_err(|_| PackError::OutsideBase {
                    path: abs.to_path_buf(),
                    base: base.to_path_buf(),
                })?
                .to_path_buf(),
        };

        map.insert(key, metadata);
    }

    Ok(map)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::filter::IgnoreFilter;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Wrapper recording every path a filter is consulted about.
    struct RecordingFilter {
        inner: IgnoreFilter,
        seen: RefCell<Vec<PathBuf>>,
    }

    impl RecordingFilter {
        fn new(inner: IgnoreFilter) -> Self {
            Self {
                inner,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl PathFilter for RecordingFilter {
        fn name(&self) -> &str {
            self.inner.name()
        }

        fn evaluate(&self, abs: &Path, base: &Path, metadata: &Metadata) -> Result<Verdict> {
            self.seen.borrow_mut().push(abs.to_path_buf());
            self.inner.evaluate(abs, base, metadata)
        }
    }

    fn tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("keep.txt"), "keep").unwrap();
        fs::write(root.join("drop.log"), "drop").unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/main.rs"), "fn main() {}").unwrap();
        fs::create_dir_all(root.join("node_modules/pkg/deep")).unwrap();
        fs::write(root.join("node_modules/pkg/index.js"), "js").unwrap();
        fs::write(root.join("node_modules/pkg/deep/leaf.js"), "js").unwrap();
        temp
    }

    #[test]
    fn test_relative_keys_exclude_base() {
        let temp = tree();
        let map = build_file_map(temp.path(), KeyStyle::RelativeToBase, &[]).unwrap();

        assert!(map.contains_key(Path::new("keep.txt")));
        assert!(map.contains_key(Path::new("src")));
        assert!(map.contains_key(Path::new("src/main.rs")));
        assert!(!map.contains_key(Path::new("")));
        assert!(!map.contains_key(temp.path()));
    }

    #[test]
    fn test_absolute_keys() {
        let temp = tree();
        let map = build_file_map(temp.path(), KeyStyle::Absolute, &[]).unwrap();

        assert!(map.contains_key(&temp.path().join("keep.txt")));
        assert!(map.contains_key(&temp.path().join("src/main.rs")));
    }

    #[test]
    fn test_omitted_files_are_absent() {
        let temp = tree();
        let ignore = IgnoreFilter::from_lines(["*.log"]);
        let map =
            build_file_map(temp.path(), KeyStyle::RelativeToBase, &[&ignore]).unwrap();

        assert!(map.contains_key(Path::new("keep.txt")));
        assert!(!map.contains_key(Path::new("drop.log")));
    }

    #[test]
    fn test_pruned_subtree_is_never_visited() {
        let temp = tree();
        let probe = RecordingFilter::new(IgnoreFilter::from_lines(["node_modules/"]));
        let map = build_file_map(temp.path(), KeyStyle::RelativeToBase, &[&probe]).unwrap();

        assert!(!map.contains_key(Path::new("node_modules")));
        assert!(!map.contains_key(Path::new("node_modules/pkg/index.js")));

        // The filter saw the directory once and none of its children.
        let seen = probe.seen.borrow();
        let visited_inside = seen
            .iter()
            .filter(|p| p.starts_with(temp.path().join("node_modules")))
            .collect::<Vec<_>>();
        assert_eq!(visited_inside.len(), 1);
        assert_eq!(*visited_inside[0], temp.path().join("node_modules"));
    }

    #[test]
    fn test_filters_compose_as_or() {
        let temp = tree();
        let logs = IgnoreFilter::from_lines(["*.log"]);
        let sources = IgnoreFilter::from_lines(["*.rs"]);
        let map = build_file_map(
            temp.path(),
            KeyStyle::RelativeToBase,
            &[&logs, &sources],
        )
        .unwrap();

        assert!(!map.contains_key(Path::new("drop.log")));
        assert!(!map.contains_key(Path::new("src/main.rs")));
        assert!(map.contains_key(Path::new("keep.txt")));
    }

    #[test]
    fn test_first_omit_short_circuits_later_filters() {
        let temp = tree();
        let first = IgnoreFilter::from_lines(["*.log"]);
        let probe = RecordingFilter::new(IgnoreFilter::from_lines(Vec::<String>::new()));
        build_file_map(temp.path(), KeyStyle::RelativeToBase, &[&first, &probe]).unwrap();

        let seen = probe.seen.borrow();
        assert!(!seen.contains(&temp.path().join("drop.log")));
        assert!(seen.contains(&temp.path().join("keep.txt")));
    }

    #[test]
    fn test_missing_base_aborts_walk() {
        let temp = TempDir::new().unwrap();
        let err = build_file_map(
            &temp.path().join("does-not-exist"),
            KeyStyle::RelativeToBase,
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, PackError::Walk { .. }));
    }
}
