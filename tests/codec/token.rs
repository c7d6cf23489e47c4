// Integration tests for src/codec/token.rs — token wire grammar
//
// Covers:
//   - encode_token layouts for each token kind at their field extremes
//   - decode_token inverse of encode_token for every kind
//   - TokenReader: filler bytes, limit handling, fused error reporting
//   - Public constants re-exported from lzp2::codec

use lzp2::codec::{
    decode_token, encode_token, FormatError, Token, TokenReader, MAX_LITERAL, MAX_MATCH, MAX_RLE,
    MIN_MATCH, MIN_RLE, WINDOW_SIZE,
};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn encoded(token: Token<'_>) -> Vec<u8> {
    let mut out = Vec::new();
    encode_token(&token, &mut out);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn first_byte_tags_are_disjoint() {
    let lit = encoded(Token::Literal(&[0xFF; MAX_LITERAL]));
    let rle = encoded(Token::Rle { length: MAX_RLE, value: 0xFF });
    let reference = encoded(Token::Reference { length: MAX_MATCH, offset: WINDOW_SIZE });
    assert_eq!(lit[0] & 0xC0, 0x00);
    assert_eq!(rle[0] & 0xC0, 0x40);
    assert_eq!(reference[0] & 0x80, 0x80);
}

#[test]
fn longest_literal_layout() {
    let bytes: Vec<u8> = (0..MAX_LITERAL as u8).collect();
    let out = encoded(Token::Literal(&bytes));
    assert_eq!(out.len(), 1 + MAX_LITERAL);
    assert_eq!(out[0], 0x3F);
    assert_eq!(&out[1..], &bytes[..]);
}

#[test]
fn rle_count_is_biased_by_four() {
    assert_eq!(encoded(Token::Rle { length: MIN_RLE, value: 0x11 }), [0x40, 0x00, 0x11]);
    assert_eq!(encoded(Token::Rle { length: 4 + 0x1234, value: 0 }), [0x52, 0x34, 0x00]);
}

#[test]
fn reference_fields_are_biased() {
    // length - 3 in bits 6..3, (offset - 1) split 3 + 8 bits
    assert_eq!(encoded(Token::Reference { length: MIN_MATCH, offset: 1 }), [0x80, 0x00]);
    assert_eq!(encoded(Token::Reference { length: 10, offset: 257 }), [0xB9, 0x00]);
    assert_eq!(encoded(Token::Reference { length: 4, offset: 2000 }), [0x8F, 0xCF]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decode_inverts_encode_at_extremes() {
    let lit = [7u8; MAX_LITERAL];
    let tokens = [
        Token::Literal(&lit[..1]),
        Token::Literal(&lit),
        Token::Rle { length: MIN_RLE, value: 1 },
        Token::Rle { length: MAX_RLE, value: 2 },
        Token::Reference { length: MIN_MATCH, offset: 1 },
        Token::Reference { length: MAX_MATCH, offset: WINDOW_SIZE },
    ];
    for token in tokens {
        let bytes = encoded(token);
        let (back, used) = decode_token(&bytes).unwrap();
        assert_eq!(back, token);
        assert_eq!(used, bytes.len());
        assert_eq!(used, token.encoded_len());
    }
}

#[test]
fn zero_byte_is_an_empty_literal() {
    let (token, used) = decode_token(&[0x00, 0x41]).unwrap();
    assert_eq!(token, Token::Literal(&[]));
    assert_eq!(used, 1);
}

#[test]
fn literal_running_off_the_end_is_truncated() {
    assert_eq!(decode_token(&[0x3F, 1, 2, 3]), Err(FormatError::Truncated));
}

// ─────────────────────────────────────────────────────────────────────────────
// TokenReader
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn reader_tracks_position_and_produced() {
    let payload = [0x02, b'h', b'i', 0x80, 0x01, 0x00, 0x00];
    let mut reader = TokenReader::new(&payload, 5);
    assert_eq!(reader.next(), Some(Ok(Token::Literal(b"hi"))));
    assert_eq!((reader.position(), reader.produced()), (3, 2));
    assert_eq!(reader.next(), Some(Ok(Token::Reference { length: 3, offset: 2 })));
    assert_eq!((reader.position(), reader.produced()), (5, 5));
    assert_eq!(reader.next(), None);
    // the trailing zeros were never consumed
    assert_eq!(reader.position(), 5);
}

#[test]
fn reader_with_zero_limit_yields_nothing() {
    assert_eq!(TokenReader::new(&[0xFF, 0xFF], 0).count(), 0);
}

#[test]
fn reader_over_only_filler_is_truncated() {
    let payload = [0u8; 16];
    let items: Vec<_> = TokenReader::new(&payload, 1).collect();
    assert_eq!(items, vec![Err(FormatError::Truncated)]);
}
