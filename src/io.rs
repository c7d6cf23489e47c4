//! Public API surface for LZP2 file operations.
//!
//! This module assembles the file-level sub-modules and re-exports the
//! symbols consumed by the CLI and library users.

pub mod compress_file;
pub mod decompress_file;
pub mod file_info;
pub mod file_io;
pub mod prefs;

// ── Core type re-exports ─────────────────────────────────────────────────────
pub use compress_file::{BatchSummary, CompressStats};
pub use decompress_file::DecompressStats;
pub use file_info::CompressedFileInfo;
pub use prefs::Prefs;

// ── Special I/O sentinels ────────────────────────────────────────────────────
pub use file_io::{NUL_MARK, STDIN_MARK, STDOUT_MARK};

// ── Compression ──────────────────────────────────────────────────────────────
pub use compress_file::{compress_filename, compress_multiple_filenames, compressed_name};

// ── Decompression / test ─────────────────────────────────────────────────────
pub use decompress_file::{
    decompress_filename, decompress_multiple_filenames, decompressed_name, read_container_header,
};

// ── File info / --list ───────────────────────────────────────────────────────
pub use file_info::{display_compressed_files_info, get_compressed_file_info};
