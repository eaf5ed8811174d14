//! Directory traversal with gitignore-style filtering and tar.gz packing.
//!
//! `dirpack-core` walks a directory tree, applies ordered exclusion
//! filters compiled from gitignore-style pattern lines, builds a map of
//! the included entries and streams it into a gzip-compressed tar archive.
//!
//! # Examples
//!
//! ```no_run
//! use dirpack_core::IgnoreFilter;
//! use dirpack_core::KeyStyle;
//! use dirpack_core::pack_directory;
//! use std::path::Path;
//!
//! # fn main() -> dirpack_core::Result<()> {
//! let ignore = IgnoreFilter::from_lines(["target/", "*.log", "!keep.log"]);
//! let report = pack_directory(
//!     Path::new("project.tar.gz"),
//!     Path::new("./project"),
//!     KeyStyle::RelativeToBase,
//!     &[&ignore],
//! )?;
//! println!("packed {} files", report.files_added);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod error;
pub mod filter;
pub mod fsutil;
pub mod paths;
pub mod pattern;
pub mod report;
pub mod walker;

// Re-export main API types
pub use archive::create_tar_gz;
pub use archive::pack_directory;
pub use error::PackError;
pub use error::Result;
pub use filter::IgnoreFilter;
pub use filter::PathFilter;
pub use filter::Verdict;
pub use paths::UserPaths;
pub use pattern::Pattern;
pub use report::PackReport;
pub use walker::FileMap;
pub use walker::KeyStyle;
pub use walker::build_file_map;
