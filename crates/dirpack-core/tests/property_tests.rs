//! Property-based tests for the pattern compiler.
//!
//! These use proptest to check invariants of glob-to-regex translation
//! across a wide range of generated names and paths.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use dirpack_core::Pattern;
use proptest::prelude::*;

proptest! {
    /// Negating a line inverts the decision for every path the base
    /// pattern excludes.
    #[test]
    fn prop_negation_inverts_exclusion(
        name in "[a-z][a-z0-9_]{0,12}",
        prefix in "([a-z]{1,6}/){0,3}",
    ) {
        let base = Pattern::compile(&name).unwrap();
        let negated = Pattern::compile(&format!("!{name}")).unwrap();
        let path = format!("{prefix}{name}");

        prop_assert_eq!(base.decide(&[path.as_str()]), Some(true));
        prop_assert_eq!(negated.decide(&[path.as_str()]), Some(false));
    }

    /// A single star never matches across a path separator.
    ///
    /// Disjoint alphabets keep either side of the separator from matching
    /// the whole pattern on its own.
    #[test]
    fn prop_star_stays_within_segment(
        left in "[a-c]{1,4}",
        right in "[a-c]{1,4}",
        middle in "[x-z]{0,4}",
    ) {
        let pattern = Pattern::compile(&format!("{left}*{right}")).unwrap();

        let within = format!("{left}{middle}{right}");
        let across = format!("{left}{middle}/{middle}{right}");
        prop_assert!(pattern.is_match(&within));
        prop_assert!(!pattern.is_match(&across));
    }

    /// An extension glob excludes matching names at any depth but never a
    /// name with a further suffix.
    #[test]
    fn prop_extension_glob(
        stem in "[a-z]{1,8}",
        prefix in "([a-z]{1,6}/){0,3}",
    ) {
        let pattern = Pattern::compile("*.log").unwrap();

        let matching = format!("{prefix}{stem}.log");
        let suffixed = format!("{prefix}{stem}.log.txt");
        prop_assert!(pattern.is_match(&matching));
        prop_assert!(!pattern.is_match(&suffixed));
    }

    /// A root-anchored pattern never matches below the first level.
    ///
    /// The parent segment draws from a disjoint alphabet so it cannot
    /// itself be the anchored name.
    #[test]
    fn prop_root_anchor_is_top_level_only(
        name in "[a-m]{1,8}",
        parent in "[n-z]{1,6}",
    ) {
        let pattern = Pattern::compile(&format!("/{name}")).unwrap();

        let nested = format!("{parent}/{name}");
        prop_assert!(pattern.is_match(&name));
        prop_assert!(!pattern.is_match(&nested));
    }

    /// Whitespace-only lines never compile to a pattern.
    #[test]
    fn prop_blank_lines_produce_nothing(spaces in " {0,10}") {
        let with_cr = format!("{spaces}\r");
        prop_assert!(Pattern::compile(&spaces).is_none());
        prop_assert!(Pattern::compile(&with_cr).is_none());
    }

    /// Directory patterns cover the directory itself and its subtree.
    #[test]
    fn prop_trailing_slash_covers_subtree(
        name in "[a-z]{1,8}",
        child in "[a-z]{1,8}",
    ) {
        let pattern = Pattern::compile(&format!("{name}/")).unwrap();

        let subpath = format!("{name}/{child}");
        prop_assert!(pattern.is_match(&name));
        prop_assert!(pattern.is_match(&subpath));
    }
}
