// lzp2 — LZP2 container codec and command-line tool

pub mod config;
pub mod util;
pub mod io;
pub mod codec;
pub mod frame;
pub mod cli;

// ── Version constants ────────────────────────────────────────────────────────
pub const LZP2_VERSION_MAJOR: u32 = 2;
pub const LZP2_VERSION_MINOR: u32 = 1;
pub const LZP2_VERSION_RELEASE: u32 = 0;
pub const LZP2_VERSION_NUMBER: u32 =
    LZP2_VERSION_MAJOR * 100 * 100 + LZP2_VERSION_MINOR * 100 + LZP2_VERSION_RELEASE;
pub const LZP2_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the runtime version number (`major * 10000 + minor * 100 + release`).
pub fn version_number() -> u32 {
    LZP2_VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    LZP2_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use codec::{EncodeError, FormatError, Strategy, Token, TokenStats};
pub use frame::{compress, compress_with, decompress, try_compress, ContainerHeader};
