//! LZP2 container header: magic, sizes, and payload alignment.
//!
//! ```text
//! offset 0   : 8 bytes  magic 4C 5A 50 32 AE 47 81 3F
//! offset 8   : u32 LE   original (decompressed) size
//! offset 12  : u32 LE   payload size, a multiple of 16
//! offset 16  : payload  token stream followed by zero padding
//! ```

use crate::codec::FormatError;

// ─────────────────────────────────────────────────────────────────────────────
// Layout constants
// ─────────────────────────────────────────────────────────────────────────────

/// Container magic: `"LZP2"` followed by four fixed bytes.
pub const MAGIC: [u8; 8] = [0x4C, 0x5A, 0x50, 0x32, 0xAE, 0x47, 0x81, 0x3F];

/// Size of the fixed header in bytes.
pub const HEADER_SIZE: usize = 16;

/// The payload is zero-padded to a multiple of this many bytes.
pub const PAYLOAD_ALIGN: usize = 16;

const ORIGINAL_SIZE_OFFSET: usize = 8;
const PAYLOAD_SIZE_OFFSET: usize = 12;

// ─────────────────────────────────────────────────────────────────────────────
// Byte-order helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a little-endian `u32` from `src` at byte `offset`.
#[inline]
pub fn read_le32(src: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        src[offset],
        src[offset + 1],
        src[offset + 2],
        src[offset + 3],
    ])
}

/// Write a little-endian `u32` into `dst` at byte `offset`.
#[inline]
pub fn write_le32(dst: &mut [u8], offset: usize, value: u32) {
    dst[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Round a token-stream length up to the payload alignment.
#[inline]
pub fn padded_len(token_len: usize) -> usize {
    token_len.div_ceil(PAYLOAD_ALIGN) * PAYLOAD_ALIGN
}

/// Returns `true` if `src` starts with the LZP2 magic.
#[inline]
pub fn has_magic(src: &[u8]) -> bool {
    src.len() >= MAGIC.len() && src[..MAGIC.len()] == MAGIC
}

// ─────────────────────────────────────────────────────────────────────────────
// ContainerHeader
// ─────────────────────────────────────────────────────────────────────────────

/// The two size fields of an LZP2 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Length of the decompressed data.
    pub original_size: u32,
    /// Length of the payload including its zero padding.
    pub payload_size: u32,
}

impl ContainerHeader {
    /// Parse and validate the header at the start of `src`.
    ///
    /// Fails with [`FormatError::Truncated`] when `src` is shorter than
    /// [`HEADER_SIZE`], and with [`FormatError::BadMagic`] when the magic does
    /// not match.
    pub fn parse(src: &[u8]) -> Result<Self, FormatError> {
        if src.len() < HEADER_SIZE {
            return Err(FormatError::Truncated);
        }
        if !has_magic(src) {
            return Err(FormatError::BadMagic);
        }
        Ok(Self {
            original_size: read_le32(src, ORIGINAL_SIZE_OFFSET),
            payload_size: read_le32(src, PAYLOAD_SIZE_OFFSET),
        })
    }

    /// Serialise the header.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[..MAGIC.len()].copy_from_slice(&MAGIC);
        write_le32(&mut out, ORIGINAL_SIZE_OFFSET, self.original_size);
        write_le32(&mut out, PAYLOAD_SIZE_OFFSET, self.payload_size);
        out
    }

    /// Total container length this header describes.
    pub fn container_len(&self) -> u64 {
        HEADER_SIZE as u64 + u64::from(self.payload_size)
    }

    /// Container size as a percentage of the original size (0 for empty input).
    pub fn ratio_percent(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            self.container_len() as f64 / f64::from(self.original_size) * 100.0
        }
    }
}
