//! Compilation of gitignore-style glob lines into anchored regexes.
//!
//! One source line becomes one [`Pattern`]: an anchored regular expression
//! plus a negation flag. Blank lines and lines whose translated expression
//! does not compile produce no pattern at all — the engine prefers dropping
//! a malformed line over rejecting the whole filter.

use regex::Regex;

/// Placeholder protecting already-expanded stars from the single-star pass.
const MAGIC_STAR: &str = "#$~";

/// A single compiled exclusion pattern.
///
/// Immutable once compiled. The matcher is anchored on both ends; candidate
/// strings either match in full (optionally with a leading directory prefix
/// or a trailing subtree) or not at all.
///
/// # Examples
///
/// ```
/// use dirpack_core::Pattern;
///
/// let pattern = Pattern::compile("*.log").unwrap();
/// assert!(pattern.is_match("debug.log"));
/// assert!(pattern.is_match("logs/debug.log"));
/// assert!(!pattern.is_match("debug.log.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    matcher: Regex,
    negate: bool,
    anchored: bool,
}

impl Pattern {
    /// Compiles one filter line.
    ///
    /// Returns `None` for lines that are empty after trimming a trailing
    /// carriage return and surrounding spaces, and for lines whose final
    /// expression fails regex compilation (silently dropped).
    #[must_use]
    pub fn compile(line: &str) -> Option<Self> {
        let source = line.to_owned();

        let mut body = line.strip_suffix('\r').unwrap_or(line).trim_matches(' ');
        if body.is_empty() {
            return None;
        }

        let mut negate = false;
        if let Some(rest) = body.strip_prefix('!') {
            negate = true;
            body = rest;
        }

        // A `#` or `!` still leading after negation handling is taken
        // literally. An escaping backslash survives into the regex, where
        // `\#` and `\!` already mean the literal character.
        body = body.strip_prefix(['#', '!']).unwrap_or(body);

        let mut expr = if wants_implicit_anchor(body) {
            format!("/{body}")
        } else {
            body.to_owned()
        };

        // Escape dots first so the alternations inserted below keep their
        // regex meaning.
        expr = expr.replace('.', r"\.");

        if let Some(rest) = expr.strip_prefix("/**/") {
            expr = format!("**/{rest}");
        }

        expr = expr.replace("/**/", "(/|/.+/)");
        expr = expr.replace("**/", &format!("(|.{MAGIC_STAR}/)"));
        expr = expr.replace("/**", &format!("(|/.{MAGIC_STAR})"));
        expr = expr.replace(r"\*", &format!(r"\{MAGIC_STAR}"));
        expr = expr.replace('*', "([^/]*)");
        expr = expr.replace('?', r"\?");
        expr = expr.replace(MAGIC_STAR, "*");

        let anchored = expr.starts_with('/');

        // A trailing slash names a directory: match the directory itself
        // and everything beneath it, so the walker can prune the subtree.
        let stem = expr.strip_suffix('/').unwrap_or(&expr);
        let expr = match stem.strip_prefix('/') {
            Some(rest) => format!("^(|/){rest}(|/.*)$"),
            None => format!("^(|.*/){stem}(|/.*)$"),
        };

        let matcher = Regex::new(&expr).ok()?;

        Some(Self {
            source,
            matcher,
            negate,
            anchored,
        })
    }

    /// The raw source line this pattern was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether a match means "include" instead of "exclude".
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negate
    }

    /// Whether the pattern is anchored to the base root.
    ///
    /// Anchored patterns are never tested against a bare file name; a name
    /// carries no position and would defeat the anchor.
    #[must_use]
    pub const fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Tests a single candidate string.
    ///
    /// Literal equality with the original source line counts as a match, as
    /// a fast path for exact names.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        candidate == self.source || self.matcher.is_match(candidate)
    }

    /// Returns this pattern's vote for a set of candidate strings.
    ///
    /// `Some(true)` votes exclude, `Some(false)` votes include (negated
    /// pattern), `None` means the pattern does not apply.
    #[must_use]
    pub fn decide(&self, candidates: &[&str]) -> Option<bool> {
        candidates
            .iter()
            .any(|candidate| self.is_match(candidate))
            .then_some(!self.negate)
    }
}

/// True when a body not starting with `/` contains a separator preceded by
/// a normal character and followed by a `*.` glob segment further on.
///
/// Such a pattern (`foo/*.ext`) gets an implicit leading separator so it
/// only matches under a top-level `foo` directory rather than anywhere in
/// the tree.
fn wants_implicit_anchor(body: &str) -> bool {
    if body.starts_with('/') {
        return false;
    }
    let Some(glob) = body.rfind("*.") else {
        return false;
    };
    body.as_bytes()[..glob]
        .windows(2)
        .any(|pair| pair[0] != b'/' && pair[0] != b'+' && pair[1] == b'/')
}
