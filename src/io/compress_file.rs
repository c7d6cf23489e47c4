//! File-level compression: one file, or a batch of files, into LZP2 containers.
//!
//! Each source is read whole, compressed with [`crate::frame::try_compress`]
//! and written in a single pass. After a successful write the source's
//! metadata is copied to the output and, when requested, the source is
//! removed.

use std::fs;
use std::io;
use std::path::Path;

use crate::codec::TokenStats;
use crate::config::LZP2_EXTENSION;
use crate::frame::try_compress;
use crate::io::file_io::{is_dev_null, is_stdin, is_stdout, read_src_file, write_dst_file, STDOUT_MARK};
use crate::io::prefs::Prefs;
use crate::util::copy_file_stat;

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Result of compressing one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressStats {
    /// Bytes read from the source.
    pub bytes_in: u64,
    /// Bytes written to the destination, header and padding included.
    pub bytes_out: u64,
    /// Token counts from the encoder.
    pub tokens: TokenStats,
}

impl CompressStats {
    /// Container size as a percentage of the input size.
    pub fn ratio_percent(&self) -> f64 {
        self.bytes_out as f64 / self.bytes_in.max(1) as f64 * 100.0
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files handled successfully.
    pub processed: usize,
    /// Files that failed; each failure has already been reported.
    pub failed: usize,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl BatchSummary {
    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

// ---------------------------------------------------------------------------
// Output naming
// ---------------------------------------------------------------------------

/// Last path component of `src`, or `src` itself when it has none.
pub(crate) fn file_name_of(src: &str) -> String {
    Path::new(src)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| src.to_owned())
}

/// Default destination for compressing `src`: `src.lzp2`, or
/// `<output_dir>/<file name>.lzp2` when an output directory is set.
pub fn compressed_name(src: &str, prefs: &Prefs) -> String {
    let base = match &prefs.output_dir {
        Some(dir) => dir.join(file_name_of(src)).to_string_lossy().into_owned(),
        None => src.to_owned(),
    };
    format!("{}{}", base, LZP2_EXTENSION)
}

// ---------------------------------------------------------------------------
// Single file
// ---------------------------------------------------------------------------

/// Compress `src` into an LZP2 container at `dst`.
///
/// `src` may be `"stdin"`; `dst` may be `"stdout"` or the null device.
pub fn compress_filename(src: &str, dst: &str, prefs: &Prefs) -> io::Result<CompressStats> {
    if !is_stdin(src) && !is_stdout(dst) && Path::new(src) == Path::new(dst) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: source and destination are the same file", src),
        ));
    }
    crate::displaylevel!(3, "Compressing {} to {}\n", src, dst);

    let data = read_src_file(src)?;
    let (container, tokens) = try_compress(&data, prefs.strategy)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}: {}", src, e)))?;
    write_dst_file(dst, &container, prefs)?;

    if prefs.preserve_file_stat && !is_stdin(src) && !is_stdout(dst) && !is_dev_null(dst) {
        // metadata is cosmetic; a failure here does not fail the run
        if let Err(e) = copy_file_stat(Path::new(src), Path::new(dst)) {
            crate::displaylevel!(4, "{}: cannot copy file attributes: {}\n", dst, e);
        }
    }

    if prefs.remove_src_file && !is_stdin(src) {
        fs::remove_file(src)
            .map_err(|e| io::Error::new(e.kind(), format!("Remove error: {}: {}", src, e)))?;
    }

    let stats = CompressStats {
        bytes_in: data.len() as u64,
        bytes_out: container.len() as u64,
        tokens,
    };
    crate::displaylevel!(
        4,
        "{}: strategy {}, {} tokens ({} literal / {} rle / {} reference)\n",
        src,
        prefs.strategy,
        tokens.tokens(),
        tokens.literals,
        tokens.rles,
        tokens.references
    );
    crate::displaylevel!(
        2,
        "Compressed {} bytes into {} bytes ==> {:.2}%\n",
        stats.bytes_in,
        stats.bytes_out,
        stats.ratio_percent()
    );
    Ok(stats)
}

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

/// Compress every file in `srcs`.
///
/// Outputs are named by [`compressed_name`], or all go to stdout when
/// `to_stdout` is set. The output directory is created if missing. A file
/// that fails is reported at level 1 and skipped; the run continues.
pub fn compress_multiple_filenames(srcs: &[&str], to_stdout: bool, prefs: &Prefs) -> io::Result<BatchSummary> {
    if let Some(dir) = &prefs.output_dir {
        if !to_stdout {
            fs::create_dir_all(dir).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: cannot create directory: {}", dir.display(), e))
            })?;
        }
    }

    let mut summary = BatchSummary::default();
    for &src in srcs {
        let dst = if to_stdout { STDOUT_MARK.to_owned() } else { compressed_name(src, prefs) };
        match compress_filename(src, &dst, prefs) {
            Ok(stats) => {
                summary.processed += 1;
                summary.bytes_in += stats.bytes_in;
                summary.bytes_out += stats.bytes_out;
            }
            Err(e) => {
                crate::displaylevel!(1, "lzp2: {}\n", e);
                summary.failed += 1;
            }
        }
    }
    crate::displaylevel!(
        2,
        "{} files compressed : {} bytes into {} bytes\n",
        summary.processed,
        summary.bytes_in,
        summary.bytes_out
    );
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
