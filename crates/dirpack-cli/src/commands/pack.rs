//! Pack command implementation.

use crate::cli::PackArgs;
use crate::commands;
use crate::error::convert_pack_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;
use dirpack_core::PathFilter;
use dirpack_core::pack_directory;

pub fn execute(args: &PackArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "output file '{}' already exists (pass --force to overwrite)",
            args.output.display()
        );
    }

    let filters = commands::build_filters(&args.exclude, args.ignore_file.as_deref())?;
    let refs: Vec<&dyn PathFilter> = filters
        .iter()
        .map(|filter| filter as &dyn PathFilter)
        .collect();

    let report = pack_directory(
        &args.output,
        &args.source,
        commands::key_style(args.absolute_keys),
        &refs,
    )
    .map_err(|err| convert_pack_error(err, &args.source))?;

    formatter.format_pack_result(&args.output, &report)
}
