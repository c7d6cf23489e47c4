//! LZP2 container: header, whole-buffer compression and decompression.

pub mod compress;
pub mod decompress;
pub mod header;

// Re-export key public API items at the module level.
pub use compress::{compress, compress_with, try_compress};
pub use decompress::decompress;
pub use header::{has_magic, padded_len, ContainerHeader, HEADER_SIZE, MAGIC, PAYLOAD_ALIGN};
