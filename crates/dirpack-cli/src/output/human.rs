//! Human-readable output formatter with colors and styling.

use super::formatter::ListingEntry;
use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use dirpack_core::PackReport;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_pack_result(&self, output: &Path, report: &PackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Archive created: {}",
                style("✓").green().bold(),
                output.display()
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("Archive created: {}", output.display()));
        }

        let _ = self
            .term
            .write_line(&format!("  Files packed: {}", report.files_added));
        let _ = self.term.write_line(&format!(
            "  Content size: {}",
            Self::format_size(report.bytes_written)
        ));
        let _ = self.term.write_line(&format!(
            "  Archive size: {}",
            Self::format_size(report.bytes_compressed)
        ));

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Directories skipped: {}",
                report.directories_skipped
            ));
            let _ = self.term.write_line(&format!(
                "  Compression ratio: {:.2}",
                report.compression_ratio()
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:.2?}", report.duration));
        }

        Ok(())
    }

    fn format_listing(&self, entries: &[ListingEntry], long: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in entries {
            let line = if long {
                let size = if entry.is_dir {
                    "-".to_owned()
                } else {
                    Self::format_size(entry.size)
                };
                format!("{size:>10}  {}", entry.path)
            } else {
                entry.path.clone()
            };
            let _ = self.term.write_line(&line);
        }

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("{} entries", entries.len()));
        }

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
