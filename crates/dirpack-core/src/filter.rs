//! Exclusion filters built from ordered pattern lists.

use crate::error::PackError;
use crate::error::Result;
use crate::pattern::Pattern;
use std::fs::File;
use std::fs::Metadata;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

/// Decision of a filter for a single walked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The entry passes this filter.
    Include,

    /// The entry is excluded; processing of it stops here.
    Omit,

    /// The entry is an excluded directory; the walker must not descend
    /// into it. This is control flow, not an error.
    Prune,
}

/// A named exclusion filter consulted during directory walks.
///
/// Implementations decide per entry whether it is included, omitted, or —
/// for directories — whether the whole subtree is pruned. Multiple filters
/// compose as a logical OR over exclusions: the walker consults them in
/// sequence and the first non-include verdict wins.
pub trait PathFilter {
    /// Name used in error context and logging.
    fn name(&self) -> &str;

    /// Decides on one entry given its absolute path, the walk base and the
    /// entry metadata.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::OutsideBase`] when `abs` cannot be resolved
    /// relative to `base`.
    fn evaluate(&self, abs: &Path, base: &Path, metadata: &Metadata) -> Result<Verdict>;
}

/// Filter holding an ordered list of compiled gitignore-style patterns.
///
/// # Examples
///
/// ```no_run
/// use dirpack_core::IgnoreFilter;
/// use dirpack_core::PathFilter;
/// use std::path::Path;
///
/// # fn main() -> dirpack_core::Result<()> {
/// let filter = IgnoreFilter::from_lines(["*.log", "!important.log"]);
/// let metadata = std::fs::metadata("/tmp/base/debug.log")?;
/// let verdict = filter.evaluate(
///     Path::new("/tmp/base/debug.log"),
///     Path::new("/tmp/base"),
///     &metadata,
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    name: String,
    patterns: Vec<Pattern>,
}

impl IgnoreFilter {
    /// Builds a filter from an explicit ordered list of pattern lines.
    ///
    /// Lines reach the compiler verbatim; blank and uncompilable lines are
    /// dropped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = lines
            .into_iter()
            .filter_map(|line| Pattern::compile(line.as_ref()))
            .collect();

        Self {
            name: "pattern-list".to_owned(),
            patterns,
        }
    }

    /// Builds a filter from a gitignore-style file.
    ///
    /// Lines starting with `#` are comments and are skipped before
    /// compilation.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::FilterSourceMissing`] when the file does not
    /// exist — distinct from [`PackError::FilterSourceRead`] for any other
    /// read failure — so callers can treat a missing ignore file as "no
    /// extra filtering".
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                PackError::FilterSourceMissing {
                    path: path.to_path_buf(),
                }
            } else {
                PackError::FilterSourceRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| PackError::FilterSourceRead {
                path: path.to_path_buf(),
                source,
            })?;

            if !line.starts_with('#') {
                lines.push(line);
            }
        }

        let name = path
            .file_name()
            .map_or_else(|| "ignore-file".to_owned(), |n| n.to_string_lossy().into_owned());

        Ok(Self {
            name,
            patterns: lines
                .iter()
                .filter_map(|line| Pattern::compile(line))
                .collect(),
        })
    }

    /// Number of compiled patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the filter holds no patterns and therefore passes everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The compiled patterns in source order.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

impl PathFilter for IgnoreFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, abs: &Path, base: &Path, metadata: &Metadata) -> Result<Verdict> {
        let rel = abs
            .strip_prefix(base)
            .map_err(|_| PackError::OutsideBase {
                path: abs.to_path_buf(),
                base: base.to_path_buf(),
            })?;

        let name = abs
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let rel = rel.to_string_lossy();
        let abs = abs.to_string_lossy();

        // Patterns are consulted in order; the last matching pattern
        // decides, so a later negation re-includes what an earlier pattern
        // excluded.
        let mut excluded = false;
        for pattern in &self.patterns {
            let vote = if pattern.is_anchored() {
                pattern.decide(&[rel.as_ref(), abs.as_ref()])
            } else {
                pattern.decide(&[name.as_str(), rel.as_ref(), abs.as_ref()])
            };

            if let Some(vote) = vote {
                excluded = vote;
            }
        }

        Ok(if !excluded {
            Verdict::Include
        } else if metadata.is_dir() {
            Verdict::Prune
        } else {
            Verdict::Omit
        })
    }
}
