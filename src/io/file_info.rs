//! `--list` support: header summaries of LZP2 containers.
//!
//! Only the 16-byte header is read; the payload is not decoded. Use test mode
//! to verify the token stream itself.

use std::fs;
use std::io;

use crate::frame::ContainerHeader;
use crate::io::compress_file::file_name_of;
use crate::io::decompress_file::read_container_header;
use crate::io::file_io::is_stdin;

/// What `--list` knows about one container.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedFileInfo {
    /// Base name of the file, as displayed.
    pub file_name: String,
    /// Size of the file on disk, when known.
    pub file_size: Option<u64>,
    pub header: ContainerHeader,
}

impl CompressedFileInfo {
    /// True when the file is at least as long as the header says it should be.
    pub fn is_complete(&self) -> bool {
        self.file_size.map_or(true, |n| n >= self.header.container_len())
    }
}

/// Gather [`CompressedFileInfo`] for `path` from its header and file size.
pub fn get_compressed_file_info(path: &str) -> io::Result<CompressedFileInfo> {
    let header = read_container_header(path)?;
    let file_size = if is_stdin(path) {
        None
    } else {
        Some(fs::metadata(path)?.len())
    };
    Ok(CompressedFileInfo {
        file_name: file_name_of(path),
        file_size,
        header,
    })
}

/// Render `n` bytes with a binary unit suffix (`B`, `KiB`, `MiB`, `GiB`).
pub fn to_human(n: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = n as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", n, UNITS[0])
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

/// Prints one summary row per container for the `--list` flag.
///
/// A file whose header cannot be read is reported at level 1 and counted;
/// the listing continues. Returns the number of such failures.
pub fn display_compressed_files_info(paths: &[&str]) -> io::Result<usize> {
    let verbose = crate::cli::constants::display_level() >= 3;
    crate::displayout!(
        "{:>13} {:>13} {:>8}   {}\n",
        "Compressed", "Uncompressed", "Ratio", "Filename"
    );

    let mut failed = 0;
    for &path in paths {
        let info = match get_compressed_file_info(path) {
            Ok(info) => info,
            Err(e) => {
                crate::displaylevel!(1, "lzp2: {}: file format not recognized ({})\n", path, e);
                failed += 1;
                continue;
            }
        };
        let ratio = if info.header.original_size == 0 {
            format!("{:>8}", "-")
        } else {
            format!("{:>7.2}%", info.header.ratio_percent())
        };
        let compressed = info.file_size.unwrap_or_else(|| info.header.container_len());
        crate::displayout!(
            "{:>13} {:>13} {}   {}\n",
            to_human(compressed),
            to_human(u64::from(info.header.original_size)),
            ratio,
            info.file_name
        );
        if verbose {
            crate::displayout!(
                "    original {} bytes, payload {} bytes{}\n",
                info.header.original_size,
                info.header.payload_size,
                if info.is_complete() { "" } else { " (file is truncated)" }
            );
        }
    }
    Ok(failed)
}
