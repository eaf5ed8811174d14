//! List command implementation.

use crate::cli::ListArgs;
use crate::commands;
use crate::error::convert_pack_error;
use crate::output::ListingEntry;
use crate::output::OutputFormatter;
use anyhow::Result;
use dirpack_core::PathFilter;
use dirpack_core::build_file_map;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let filters = commands::build_filters(&args.exclude, args.ignore_file.as_deref())?;
    let refs: Vec<&dyn PathFilter> = filters
        .iter()
        .map(|filter| filter as &dyn PathFilter)
        .collect();

    let map = build_file_map(
        &args.source,
        commands::key_style(args.absolute_keys),
        &refs,
    )
    .map_err(|err| convert_pack_error(err, &args.source))?;

    // The map is unordered; sort for stable output.
    let mut included: Vec<_> = map.into_iter().collect();
    included.sort_by(|a, b| a.0.cmp(&b.0));

    let entries: Vec<ListingEntry> = included
        .iter()
        .map(|(path, metadata)| ListingEntry {
            path: path.display().to_string(),
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            is_dir: metadata.is_dir(),
        })
        .collect();

    formatter.format_listing(&entries, args.long)
}
