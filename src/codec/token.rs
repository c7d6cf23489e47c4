//! Wire grammar of the LZP2 token stream.
//!
//! The first byte of every token selects its kind:
//!
//! | First byte  | Token     | Layout                                               |
//! |-------------|-----------|------------------------------------------------------|
//! | `00LLLLLL`  | Literal   | `L` raw bytes follow (`L` = 1..=63)                  |
//! | `01CCCCCC`  | RLE       | `CCCCCC cccccccc` = count − 4 (14 bits), then value  |
//! | `1LLLLOOO`  | Reference | `LLLL` = length − 3, `OOO oooooooo` = offset − 1      |
//!
//! Nothing here searches or decides; [`encode_token`] serialises a decision
//! made by the match engine and [`decode_token`] / [`TokenReader`] parse bytes
//! back into [`Token`]s.

use super::types::{
    FormatError, Token, LOW6_MASK, MIN_MATCH, MIN_RLE, REFERENCE_TAG, RLE_TAG,
};

// ─────────────────────────────────────────────────────────────────────────────
// Encoding
// ─────────────────────────────────────────────────────────────────────────────

/// Append the wire form of `token` to `dst`.
///
/// Field ranges are the caller's contract; they are only checked in debug
/// builds.
pub fn encode_token(token: &Token<'_>, dst: &mut Vec<u8>) {
    debug_assert!(token.is_within_bounds(), "token out of bounds: {:?}", token);
    match *token {
        Token::Literal(bytes) => {
            dst.push(bytes.len() as u8);
            dst.extend_from_slice(bytes);
        }
        Token::Rle { length, value } => {
            let count = length - MIN_RLE;
            dst.push(RLE_TAG | ((count >> 8) as u8 & LOW6_MASK));
            dst.push((count & 0xFF) as u8);
            dst.push(value);
        }
        Token::Reference { length, offset } => {
            let dist = offset - 1;
            let len_code = ((length - MIN_MATCH) as u8) << 3;
            dst.push(REFERENCE_TAG | len_code | ((dist >> 8) as u8 & 0x07));
            dst.push((dist & 0xFF) as u8);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────────────────────────────────────

/// Parse the token at the start of `src`.
///
/// Returns the token and the number of payload bytes it occupied. A zero
/// first byte parses as an empty literal consuming one byte; callers treat it
/// as filler. Fails with [`FormatError::Truncated`] when `src` is empty or
/// ends before the token does.
pub fn decode_token(src: &[u8]) -> Result<(Token<'_>, usize), FormatError> {
    let first = *src.first().ok_or(FormatError::Truncated)?;

    if first & REFERENCE_TAG != 0 {
        let low = *src.get(1).ok_or(FormatError::Truncated)?;
        let length = ((first >> 3) & 0x0F) as usize + MIN_MATCH;
        let offset = ((((first & 0x07) as usize) << 8) | low as usize) + 1;
        Ok((Token::Reference { length, offset }, 2))
    } else if first & RLE_TAG != 0 {
        if src.len() < 3 {
            return Err(FormatError::Truncated);
        }
        let length = ((((first & LOW6_MASK) as usize) << 8) | src[1] as usize) + MIN_RLE;
        Ok((Token::Rle { length, value: src[2] }, 3))
    } else {
        let run = first as usize;
        let bytes = src.get(1..1 + run).ok_or(FormatError::Truncated)?;
        Ok((Token::Literal(bytes), 1 + run))
    }
}

/// Iterator over the tokens of a payload, stopping once `limit` output bytes
/// have been accounted for.
///
/// Bytes past that point (alignment padding, or anything else) are never
/// looked at. Running out of payload before `limit` is reached yields a
/// single [`FormatError::Truncated`], after which the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct TokenReader<'a> {
    src: &'a [u8],
    pos: usize,
    produced: usize,
    limit: usize,
    failed: bool,
}

impl<'a> TokenReader<'a> {
    /// Read tokens from `payload` until they produce `limit` bytes.
    pub fn new(payload: &'a [u8], limit: usize) -> Self {
        Self {
            src: payload,
            pos: 0,
            produced: 0,
            limit,
            failed: false,
        }
    }

    /// Payload offset of the next token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Output bytes accounted for by the tokens returned so far.
    #[inline]
    pub fn produced(&self) -> usize {
        self.produced
    }
}

impl<'a> Iterator for TokenReader<'a> {
    type Item = Result<Token<'a>, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.produced >= self.limit {
            return None;
        }
        loop {
            match decode_token(&self.src[self.pos..]) {
                Ok((Token::Literal(bytes), used)) if bytes.is_empty() => {
                    // zero filler byte
                    self.pos += used;
                }
                Ok((token, used)) => {
                    self.pos += used;
                    self.produced += token.output_len();
                    return Some(Ok(token));
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
