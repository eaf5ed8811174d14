//! Command implementations.

pub mod completion;
pub mod list;
pub mod pack;

use crate::error::convert_pack_error;
use anyhow::Result;
use dirpack_core::IgnoreFilter;
use dirpack_core::KeyStyle;
use std::path::Path;

/// Builds the filter chain shared by `pack` and `list`: the explicit
/// `--exclude` list first, then the ignore file, each kept as its own
/// filter so both sources keep their own precedence.
pub(crate) fn build_filters(
    exclude: &[String],
    ignore_file: Option<&Path>,
) -> Result<Vec<IgnoreFilter>> {
    let mut filters = Vec::new();

    if !exclude.is_empty() {
        filters.push(IgnoreFilter::from_lines(exclude));
    }

    if let Some(path) = ignore_file {
        let filter = IgnoreFilter::from_file(path).map_err(|err| convert_pack_error(err, path))?;
        filters.push(filter);
    }

    Ok(filters)
}

pub(crate) const fn key_style(absolute: bool) -> KeyStyle {
    if absolute {
        KeyStyle::Absolute
    } else {
        KeyStyle::RelativeToBase
    }
}
