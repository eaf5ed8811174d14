//! Output formatter trait for CLI results.

use anyhow::Result;
use dirpack_core::PackReport;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of a pack operation
    fn format_pack_result(&self, output: &Path, report: &PackReport) -> Result<()>;

    /// Format a directory listing
    fn format_listing(&self, entries: &[ListingEntry], long: bool) -> Result<()>;

    /// Format warning message
    #[allow(dead_code)]
    fn format_warning(&self, message: &str);
}

/// One entry of a `list` run.
#[derive(Debug, Serialize)]
pub struct ListingEntry {
    /// Map key (relative or absolute per the key style).
    pub path: String,
    /// File size in bytes, 0 for directories.
    pub size: u64,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    #[allow(dead_code)]
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}
