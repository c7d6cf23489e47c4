//! File-level decompression and integrity testing of LZP2 containers.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::LZP2_EXTENSION;
use crate::frame::{decompress, ContainerHeader};
use crate::io::compress_file::{file_name_of, BatchSummary};
use crate::io::file_io::{is_dev_null, is_stdin, is_stdout, read_src_file, write_dst_file, NUL_MARK, STDOUT_MARK};
use crate::io::prefs::Prefs;
use crate::util::copy_file_stat;

/// Statistics returned by [`decompress_filename`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecompressStats {
    /// Container bytes read.
    pub compressed_bytes: u64,
    /// Bytes recovered (and written, unless testing).
    pub decompressed_bytes: u64,
}

/// Default destination for decompressing `src`: the name without its
/// `.lzp2` suffix, placed in the output directory when one is set.
///
/// Fails with [`io::ErrorKind::InvalidInput`] when `src` does not end with
/// `.lzp2` or is nothing but the suffix.
pub fn decompressed_name(src: &str, prefs: &Prefs) -> io::Result<String> {
    let stem = match src.strip_suffix(LZP2_EXTENSION) {
        Some(stem) if !stem.is_empty() && !stem.ends_with(|c: char| c == '/' || c == '\\') => stem,
        _ => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}: unknown suffix -- expected {}", src, LZP2_EXTENSION),
            ))
        }
    };
    Ok(match &prefs.output_dir {
        Some(dir) => dir.join(file_name_of(stem)).to_string_lossy().into_owned(),
        None => stem.to_owned(),
    })
}

/// Decode the container at `src` and write the original bytes to `dst`.
///
/// In test mode nothing is written and `dst` is ignored. Corrupt input is
/// reported as [`io::ErrorKind::InvalidData`] wrapping the codec's
/// [`crate::FormatError`].
pub fn decompress_filename(src: &str, dst: &str, prefs: &Prefs) -> io::Result<DecompressStats> {
    if !prefs.test_mode && !is_stdin(src) && !is_stdout(dst) && Path::new(src) == Path::new(dst) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: source and destination are the same file", src),
        ));
    }
    if prefs.test_mode {
        crate::displaylevel!(3, "Testing {}\n", src);
    } else {
        crate::displaylevel!(3, "Decompressing {} to {}\n", src, dst);
    }

    let container = read_src_file(src)?;
    let data = decompress(&container)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{}: {}", src, e)))?;
    crate::displaylevel!(
        4,
        "{}: {} bytes payload, {} bytes original\n",
        src,
        container.len().saturating_sub(crate::frame::HEADER_SIZE),
        data.len()
    );

    let stats = DecompressStats {
        compressed_bytes: container.len() as u64,
        decompressed_bytes: data.len() as u64,
    };

    if prefs.test_mode {
        crate::displaylevel!(2, "{}: {} bytes OK\n", src, stats.decompressed_bytes);
        return Ok(stats);
    }

    write_dst_file(dst, &data, prefs)?;

    if prefs.preserve_file_stat && !is_stdin(src) && !is_stdout(dst) && !is_dev_null(dst) {
        if let Err(e) = copy_file_stat(Path::new(src), Path::new(dst)) {
            crate::displaylevel!(4, "{}: cannot copy file attributes: {}\n", dst, e);
        }
    }

    if prefs.remove_src_file && !is_stdin(src) {
        fs::remove_file(src)
            .map_err(|e| io::Error::new(e.kind(), format!("Remove error: {}: {}", src, e)))?;
    }

    crate::displaylevel!(2, "{:<20}: decoded {} bytes\n", file_name_of(src), stats.decompressed_bytes);
    Ok(stats)
}

/// Decompress (or, in test mode, verify) every file in `srcs`.
///
/// Outputs are named by [`decompressed_name`], or all go to stdout when
/// `to_stdout` is set. A file that fails, including one without the `.lzp2`
/// suffix, is reported at level 1 and skipped; the run continues.
pub fn decompress_multiple_filenames(srcs: &[&str], to_stdout: bool, prefs: &Prefs) -> io::Result<BatchSummary> {
    if let Some(dir) = &prefs.output_dir {
        if !to_stdout && !prefs.test_mode {
            fs::create_dir_all(dir).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: cannot create directory: {}", dir.display(), e))
            })?;
        }
    }

    let mut summary = BatchSummary::default();
    for &src in srcs {
        let dst = if prefs.test_mode {
            Ok(NUL_MARK.to_owned())
        } else if to_stdout {
            Ok(STDOUT_MARK.to_owned())
        } else {
            decompressed_name(src, prefs)
        };
        match dst.and_then(|dst| decompress_filename(src, &dst, prefs)) {
            Ok(stats) => {
                summary.processed += 1;
                summary.bytes_in += stats.compressed_bytes;
                summary.bytes_out += stats.decompressed_bytes;
            }
            Err(e) => {
                crate::displaylevel!(1, "lzp2: {}\n", e);
                summary.failed += 1;
            }
        }
    }
    let verb = if prefs.test_mode { "tested" } else { "decompressed" };
    crate::displaylevel!(2, "{} files {} : {} bytes\n", summary.processed, verb, summary.bytes_out);
    Ok(summary)
}

/// Read only the header of the container at `src`.
pub fn read_container_header(src: &str) -> io::Result<ContainerHeader> {
    use std::io::Read;

    let mut reader = crate::io::file_io::open_src_file(src)?;
    let mut buf = [0u8; crate::frame::HEADER_SIZE];
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    ContainerHeader::parse(&buf[..filled])
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{}: {}", src, e)))
}
