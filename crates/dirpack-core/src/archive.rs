//! Streaming of a file map into a gzip-compressed tar archive.

use crate::error::PackError;
use crate::error::Result;
use crate::filter::PathFilter;
use crate::fsutil;
use crate::report::PackReport;
use crate::walker::FileMap;
use crate::walker::KeyStyle;
use crate::walker::build_file_map;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tar::Builder;
use tar::Header;

/// Walks `src` through the given filters and packs the surviving entries
/// into a gzip-compressed tar archive at `dst`.
///
/// # Examples
///
/// ```no_run
/// use dirpack_core::IgnoreFilter;
/// use dirpack_core::KeyStyle;
/// use dirpack_core::pack_directory;
/// use std::path::Path;
///
/// # fn main() -> dirpack_core::Result<()> {
/// let ignore = IgnoreFilter::from_lines(["target/", "*.tmp"]);
/// let report = pack_directory(
///     Path::new("project.tar.gz"),
///     Path::new("./project"),
///     KeyStyle::RelativeToBase,
///     &[&ignore],
/// )?;
/// println!("packed {} files", report.files_added);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Propagates walk failures from [`build_file_map`] and archive failures
/// from [`create_tar_gz`].
pub fn pack_directory(
    dst: &Path,
    src: &Path,
    keys: KeyStyle,
    filters: &[&dyn PathFilter],
) -> Result<PackReport> {
    let content = build_file_map(src, keys, filters)?;
    create_tar_gz(dst, src, &content)
}

/// Packs the entries of a file map into a gzip-compressed tar stream.
///
/// Directory entries are skipped; the archive holds flat file entries
/// whose names are exactly the map keys, so relative-path keys control the
/// in-archive layout. Iteration order over the map is unspecified, and so
/// is entry order in the archive — callers needing reproducible output
/// must pack from a sorted entry list themselves.
///
/// # Errors
///
/// The first write failure aborts entry processing; the archive is still
/// finalized and a finalization failure is surfaced as well, aggregated
/// with the write failure into [`PackError::Multiple`] when both occur.
pub fn create_tar_gz(dst: &Path, base: &Path, content: &FileMap) -> Result<PackReport> {
    let start = Instant::now();

    let file = File::create(dst).map_err(|source| PackError::Create {
        path: dst.to_path_buf(),
        source,
    })?;
    let encoder = GzEncoder::new(CountingWriter::new(file), Compression::default());
    let mut builder = Builder::new(encoder);

    let mut report = PackReport::new();
    let written = append_entries(&mut builder, base, content, &mut report);
    let finished = finish_archive(builder, dst);

    report.duration = start.elapsed();

    match (written, finished) {
        (Ok(()), Ok(bytes)) => {
            report.bytes_compressed = bytes;
            Ok(report)
        }
        (Err(write_err), Ok(_)) => Err(write_err),
        (Ok(()), Err(close_err)) => Err(close_err),
        (Err(write_err), Err(close_err)) => Err(PackError::Multiple(vec![write_err, close_err])),
    }
}

fn append_entries<W: Write>(
    builder: &mut Builder<W>,
    base: &Path,
    content: &FileMap,
    report: &mut PackReport,
) -> Result<()> {
    for (key, metadata) in content {
        if metadata.is_dir() {
            report.directories_skipped += 1;
            continue;
        }

        // Absolute keys replace the base on join, relative keys extend it.
        let mut file = fsutil::open(&base.join(key))?;

        let mut header = Header::new_gnu();
        header.set_metadata(metadata);
        header.set_cksum();

        // Tar entry names must be relative; an absolute key is stored
        // without its root, the way GNU tar strips leading slashes.
        let name = key.strip_prefix("/").unwrap_or(key);

        builder
            .append_data(&mut header, name, &mut file)
            .map_err(|source| PackError::Append {
                name: key.clone(),
                source,
            })?;

        report.files_added += 1;
        report.bytes_written += metadata.len();
    }

    Ok(())
}

/// Terminates the tar stream and the gzip stream, returning the compressed
/// byte count.
fn finish_archive(
    builder: Builder<GzEncoder<CountingWriter<File>>>,
    dst: &Path,
) -> Result<u64> {
    let encoder = builder.into_inner().map_err(|source| PackError::Finish {
        path: dst.to_path_buf(),
        source,
    })?;

    let mut counting = encoder.finish().map_err(|source| PackError::Finish {
        path: dst.to_path_buf(),
        source,
    })?;

    counting.flush().map_err(|source| PackError::Finish {
        path: dst.to_path_buf(),
        source,
    })?;

    Ok(counting.total_bytes())
}

/// Wrapper writer tracking bytes written to the destination.
struct CountingWriter<W> {
    inner: W,
    bytes_written: u64,
}

impl<W> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }

    fn total_bytes(&self) -> u64 {
        self.bytes_written
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let bytes = self.inner.write(buf)?;
        self.bytes_written += bytes as u64;
        Ok(bytes)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
