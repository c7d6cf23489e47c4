// Integration tests for src/codec/decompress.rs — token interpreter
//
// Covers:
//   - apply_token for every token kind
//   - overlapping references (offset < length)
//   - offset validation against the output produced so far
//   - decode_payload truncation to the recorded size

use lzp2::codec::{apply_token, decode_payload, FormatError, Token, MAX_MATCH, WINDOW_SIZE};

#[test]
fn apply_literal_and_rle() {
    let mut out = Vec::new();
    apply_token(&mut out, &Token::Literal(b"ab")).unwrap();
    apply_token(&mut out, &Token::Rle { length: 5, value: b'c' }).unwrap();
    assert_eq!(out, b"abccccc");
}

#[test]
fn offset_one_repeats_last_byte() {
    let mut out = b"xy".to_vec();
    apply_token(&mut out, &Token::Reference { length: MAX_MATCH, offset: 1 }).unwrap();
    assert_eq!(out.len(), 2 + MAX_MATCH);
    assert!(out[1..].iter().all(|&b| b == b'y'));
}

#[test]
fn full_window_offset_reaches_first_byte() {
    let mut out: Vec<u8> = (0..WINDOW_SIZE).map(|i| (i % 251) as u8).collect();
    apply_token(&mut out, &Token::Reference { length: 3, offset: WINDOW_SIZE }).unwrap();
    assert_eq!(&out[WINDOW_SIZE..], &[0, 1, 2]);
}

#[test]
fn invalid_offsets_leave_output_untouched() {
    let mut out = b"abc".to_vec();
    for offset in [0, 4, WINDOW_SIZE] {
        let err = apply_token(&mut out, &Token::Reference { length: 3, offset });
        assert_eq!(err, Err(FormatError::InvalidOffset));
        assert_eq!(out, b"abc");
    }
}

#[test]
fn decode_payload_mixes_all_token_kinds() {
    // "ab", RLE 4 x 'z', copy 3 from 6 back, filler, literal "!"
    let payload = [0x02, b'a', b'b', 0x40, 0x00, b'z', 0x80, 0x05, 0x00, 0x01, b'!'];
    assert_eq!(decode_payload(&payload, 10).unwrap(), b"abzzzzabz!");
}

#[test]
fn decode_payload_stops_mid_token_output() {
    // a reference longer than what remains is cut at the recorded size
    let payload = [0x01, b'q', 0xF8, 0x00];
    assert_eq!(decode_payload(&payload, 5).unwrap(), b"qqqqq");
}
