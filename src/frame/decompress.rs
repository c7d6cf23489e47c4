//! Whole-buffer LZP2 decompression.

use crate::codec::{decode_payload, FormatError};

use super::header::{ContainerHeader, HEADER_SIZE};

/// Decompress an LZP2 container.
///
/// Tokens are read from offset 16 until the recorded original size is
/// reached; the result is exactly that many bytes. The payload-size field is
/// not used to bound the read, so padding or trailing data after the last
/// needed token is never interpreted.
pub fn decompress(src: &[u8]) -> Result<Vec<u8>, FormatError> {
    let header = ContainerHeader::parse(src)?;
    decode_payload(&src[HEADER_SIZE..], header.original_size as usize)
}
