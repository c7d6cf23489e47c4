//! LZP2 token interpreter.
//!
//! # Security boundary
//!
//! This is the path that sees untrusted bytes. Malformed input must surface
//! as a [`FormatError`], never a panic: every back-reference is checked
//! against the output produced so far, and the output is never allowed to
//! grow past the recorded size by more than one token's worth.

use super::token::TokenReader;
use super::types::{FormatError, Token};

/// Upper bound on the up-front reservation for the output buffer. The
/// recorded size comes from an untrusted header, so larger outputs grow on
/// demand instead.
const MAX_PREALLOC: usize = 1 << 24;

/// Append the bytes `token` produces to `out`.
///
/// References copy one byte at a time from `out.len() - offset`, so a copy
/// longer than its offset re-reads the bytes it has just written.
pub fn apply_token(out: &mut Vec<u8>, token: &Token<'_>) -> Result<(), FormatError> {
    match *token {
        Token::Literal(bytes) => out.extend_from_slice(bytes),
        Token::Rle { length, value } => out.resize(out.len() + length, value),
        Token::Reference { length, offset } => {
            if offset == 0 || offset > out.len() {
                return Err(FormatError::InvalidOffset);
            }
            let start = out.len() - offset;
            out.reserve(length);
            for i in start..start + length {
                let b = out[i];
                out.push(b);
            }
        }
    }
    Ok(())
}

/// Decode `payload` until `original_size` bytes have been produced.
///
/// Returns exactly `original_size` bytes. Anything in `payload` after the
/// token that reaches that size is ignored.
pub fn decode_payload(payload: &[u8], original_size: usize) -> Result<Vec<u8>, FormatError> {
    let mut out = Vec::with_capacity(original_size.min(MAX_PREALLOC));
    for token in TokenReader::new(payload, original_size) {
        apply_token(&mut out, &token?)?;
    }
    out.truncate(original_size);
    Ok(out)
}
