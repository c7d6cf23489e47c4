//! Whole-buffer LZP2 compression: token stream, padding, and header.

use crate::codec::{encode_payload, EncodeError, Strategy, TokenStats};

use super::header::{padded_len, ContainerHeader, HEADER_SIZE};

/// Compress `data` into an LZP2 container with the default strategy.
///
/// # Panics
/// Panics if `data` is too large for the header's 32-bit size fields; use
/// [`try_compress`] when that cannot be ruled out.
pub fn compress(data: &[u8]) -> Vec<u8> {
    compress_with(data, Strategy::default())
}

/// Compress `data` into an LZP2 container with an explicit match strategy.
///
/// # Panics
/// Same as [`compress`].
pub fn compress_with(data: &[u8], strategy: Strategy) -> Vec<u8> {
    match try_compress(data, strategy) {
        Ok((container, _)) => container,
        Err(e) => panic!("lzp2: cannot compress {} bytes: {}", data.len(), e),
    }
}

/// Compress `data`, returning the container and the token statistics.
///
/// Fails with [`EncodeError::InputTooLarge`] when the original size or the
/// padded payload does not fit in a `u32`.
pub fn try_compress(
    data: &[u8],
    strategy: Strategy,
) -> Result<(Vec<u8>, TokenStats), EncodeError> {
    let original_size = u32::try_from(data.len()).map_err(|_| EncodeError::InputTooLarge)?;

    let mut out = Vec::with_capacity(HEADER_SIZE + data.len() / 2 + 16);
    out.resize(HEADER_SIZE, 0);
    let stats = encode_payload(data, strategy, &mut out);

    let payload_size = padded_len(out.len() - HEADER_SIZE);
    let header = ContainerHeader {
        original_size,
        payload_size: u32::try_from(payload_size).map_err(|_| EncodeError::InputTooLarge)?,
    };
    out.resize(HEADER_SIZE + payload_size, 0);
    out[..HEADER_SIZE].copy_from_slice(&header.to_bytes());
    Ok((out, stats))
}
