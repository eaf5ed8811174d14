//! Error conversion utilities for CLI.
//!
//! Converts dirpack-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use dirpack_core::PackError;
use std::path::Path;

/// Converts `PackError` to a user-friendly anyhow error with context
pub fn convert_pack_error(err: PackError, context: &Path) -> anyhow::Error {
    match err {
        PackError::FilterSourceMissing { path } => {
            anyhow!(
                "Ignore file not found: {}\n\
                 HINT: Omit --ignore-file to pack without one, or check the path.",
                path.display()
            )
        }
        PackError::OutsideBase { path, base } => {
            anyhow!(
                "Path '{}' is not under the base directory '{}'\n\
                 HINT: Filters only apply to entries inside the packed directory.",
                path.display(),
                base.display()
            )
        }
        PackError::Walk { path, source } => {
            anyhow!(
                "Cannot traverse '{}': {source}\n\
                 HINT: Check permissions and that the source directory exists.",
                path.display()
            )
        }
        PackError::Create { path, source } => {
            anyhow!(
                "Cannot create archive '{}': {source}\n\
                 HINT: Check that the destination directory exists and is writable.",
                path.display()
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("error while processing '{}'", context.display())),
    }
}
