//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::ListingEntry;
use super::formatter::OutputFormatter;
use anyhow::Result;
use dirpack_core::PackReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_pack_result(&self, output: &Path, report: &PackReport) -> Result<()> {
        #[derive(Serialize)]
        struct PackOutput {
            output_path: String,
            files_added: usize,
            directories_skipped: usize,
            bytes_written: u64,
            bytes_compressed: u64,
            compression_ratio: f64,
            duration_ms: u128,
        }

        let data = PackOutput {
            output_path: output.display().to_string(),
            files_added: report.files_added,
            directories_skipped: report.directories_skipped,
            bytes_written: report.bytes_written,
            bytes_compressed: report.bytes_compressed,
            compression_ratio: report.compression_ratio(),
            duration_ms: report.duration.as_millis(),
        };

        let output = JsonOutput::success("pack", data);
        Self::output(&output)
    }

    fn format_listing(&self, entries: &[ListingEntry], _long: bool) -> Result<()> {
        #[derive(Serialize)]
        struct ListOutput<'a> {
            entries: &'a [ListingEntry],
            total: usize,
        }

        let data = ListOutput {
            entries,
            total: entries.len(),
        };

        let output = JsonOutput::success("list", data);
        Self::output(&output)
    }

    fn format_warning(&self, message: &str) {
        let warning = serde_json::json!({
            "status": "warning",
            "message": message,
        });
        let _ = writeln!(io::stderr(), "{warning}");
    }
}
