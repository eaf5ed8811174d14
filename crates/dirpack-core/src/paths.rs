//! User directory resolution with an explicit home value.
//!
//! The home directory is read from the environment once, at the edge, and
//! threaded through as a value; the joiners themselves are pure and test
//! without environment mutation.

use std::env;
use std::path::Path;
use std::path::PathBuf;

/// Well-known per-user paths rooted at an explicit home directory.
///
/// # Examples
///
/// ```
/// use dirpack_core::UserPaths;
/// use std::path::Path;
///
/// let paths = UserPaths::new("/home/alice");
/// assert_eq!(
///     paths.config(["dirpack", "ignore"]),
///     Path::new("/home/alice/.config/dirpack/ignore"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPaths {
    home: PathBuf,
}

impl UserPaths {
    /// Creates a resolver rooted at the given home directory.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Resolves the home directory from `HOME` (or `USERPROFILE`), once.
    ///
    /// Returns `None` when neither variable is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        env::var_os("HOME")
            .or_else(|| env::var_os("USERPROFILE"))
            .filter(|home| !home.is_empty())
            .map(|home| Self::new(PathBuf::from(home)))
    }

    /// The home directory itself.
    #[must_use]
    pub fn home_dir(&self) -> &Path {
        &self.home
    }

    /// Joins path segments under the home directory.
    #[must_use]
    pub fn home<I, S>(&self, parts: I) -> PathBuf
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut path = self.home.clone();
        path.extend(parts);
        path
    }

    /// Joins path segments under `~/.config`.
    #[must_use]
    pub fn config<I, S>(&self, parts: I) -> PathBuf
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut path = self.home.join(".config");
        path.extend(parts);
        path
    }

    /// Joins path segments under `~/.cache`.
    #[must_use]
    pub fn cache<I, S>(&self, parts: I) -> PathBuf
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut path = self.home.join(".cache");
        path.extend(parts);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_join() {
        let paths = UserPaths::new("/home/bob");
        assert_eq!(
            paths.home(["projects", "dirpack"]),
            Path::new("/home/bob/projects/dirpack"),
        );
    }

    #[test]
    fn test_home_join_empty() {
        let paths = UserPaths::new("/home/bob");
        assert_eq!(paths.home(Vec::<&str>::new()), Path::new("/home/bob"));
    }

    #[test]
    fn test_config_and_cache() {
        let paths = UserPaths::new("/home/bob");
        assert_eq!(
            paths.config(["app.toml"]),
            Path::new("/home/bob/.config/app.toml"),
        );
        assert_eq!(
            paths.cache(["app", "index"]),
            Path::new("/home/bob/.cache/app/index"),
        );
    }

    #[test]
    fn test_explicit_home_needs_no_environment() {
        let paths = UserPaths::new("/srv/users/carol");
        assert_eq!(paths.home_dir(), Path::new("/srv/users/carol"));
    }
}
