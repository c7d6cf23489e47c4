//! LZP2 codec constants, the [`Token`] type, and codec error types.
//!
//! Everything the encoder and the decoder must agree on lives here:
//!   - token field widths and their legal ranges
//!   - the sliding-window and candidate-index bounds used by the encoder
//!   - [`FormatError`] / [`EncodeError`]

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Token tags (top bits of the first token byte)
// ─────────────────────────────────────────────────────────────────────────────

/// Bit 7 set: back-reference token.
pub const REFERENCE_TAG: u8 = 0x80;
/// Bits 7..6 == `01`: run-length token.
pub const RLE_TAG: u8 = 0x40;
/// Mask selecting the payload bits of an RLE/literal first byte.
pub const LOW6_MASK: u8 = 0x3F;

// ─────────────────────────────────────────────────────────────────────────────
// Token bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Longest literal run a single token can carry (6-bit length field).
pub const MAX_LITERAL: usize = 63;

/// Shortest run worth an RLE token.
pub const MIN_RLE: usize = 4;
/// Longest run an RLE token can carry: 14-bit field biased by [`MIN_RLE`].
pub const MAX_RLE: usize = (1 << 14) - 1 + MIN_RLE; // 16387

/// Shortest back-reference.
pub const MIN_MATCH: usize = 3;
/// Longest back-reference: 4-bit field biased by [`MIN_MATCH`].
pub const MAX_MATCH: usize = (1 << 4) - 1 + MIN_MATCH; // 18

/// Largest back-reference distance: 11-bit field biased by 1.
pub const WINDOW_SIZE: usize = 1 << 11; // 2048

// ─────────────────────────────────────────────────────────────────────────────
// Encoder index bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Width of the prefix used to key the candidate index.
pub const KEY_LEN: usize = MIN_MATCH;

/// Positions kept per key in the candidate index (most recent win).
pub const MAX_CANDIDATES: usize = 50;

// ─────────────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────────────

/// One unit of the compressed token stream.
///
/// `Literal` borrows its bytes from whichever buffer produced the token: the
/// encoder's input or the decoder's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// 1..=63 bytes copied verbatim.
    Literal(&'a [u8]),
    /// `length` (4..=16387) copies of `value`.
    Rle { length: usize, value: u8 },
    /// Copy `length` (3..=18) bytes starting `offset` (1..=2048) bytes back.
    Reference { length: usize, offset: usize },
}

impl Token<'_> {
    /// Number of output bytes this token produces.
    #[inline]
    pub fn output_len(&self) -> usize {
        match *self {
            Token::Literal(bytes) => bytes.len(),
            Token::Rle { length, .. } | Token::Reference { length, .. } => length,
        }
    }

    /// Number of bytes this token occupies in the payload.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        match *self {
            Token::Literal(bytes) => 1 + bytes.len(),
            Token::Rle { .. } => 3,
            Token::Reference { .. } => 2,
        }
    }

    /// `true` when every field lies within the range its wire field can carry.
    pub fn is_within_bounds(&self) -> bool {
        match *self {
            Token::Literal(bytes) => (1..=MAX_LITERAL).contains(&bytes.len()),
            Token::Rle { length, .. } => (MIN_RLE..=MAX_RLE).contains(&length),
            Token::Reference { length, offset } => {
                (MIN_MATCH..=MAX_MATCH).contains(&length) && (1..=WINDOW_SIZE).contains(&offset)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Error types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned while decoding an LZP2 container or token stream.
///
/// Every variant is fatal: the decoder discards whatever it had produced and
/// hands nothing back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The 8-byte container magic does not match.
    BadMagic,
    /// The input ends inside the header, inside a token, or before the
    /// recorded original size was reached.
    Truncated,
    /// A back-reference points further back than the output produced so far.
    InvalidOffset,
}

impl FormatError {
    /// Short, stable name for the error (used in CLI diagnostics).
    pub fn error_name(&self) -> &'static str {
        match self {
            FormatError::BadMagic => "bad magic number",
            FormatError::Truncated => "truncated input",
            FormatError::InvalidOffset => "reference offset out of range",
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_name())
    }
}

impl std::error::Error for FormatError {}

/// Errors returned by the checked compression entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The input length does not fit the header's 32-bit size field.
    InputTooLarge,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InputTooLarge => f.write_str("input exceeds the 4 GiB container limit"),
        }
    }
}

impl std::error::Error for EncodeError {}
