//! E2E suite: whole-buffer codec round trips
//!
//! Validates `compress` / `compress_with` / `decompress` on inputs chosen to
//! hit each token kind and its limits:
//! - empty and one-byte inputs
//! - runs longer than one RLE token can carry
//! - periodic data that must be rebuilt from back-references
//! - pseudo-random data that stays literal
//!
//! Every container produced here is also walked token by token to check
//! that no field leaves its wire range.

use lzp2::codec::{TokenReader, MAX_RLE, WINDOW_SIZE};
use lzp2::frame::HEADER_SIZE;
use lzp2::{compress, compress_with, decompress, ContainerHeader, Strategy, Token};

/// Deterministic xorshift bytes.
fn noise(len: usize, mut seed: u32) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            (seed >> 24) as u8
        })
        .collect()
}

/// Decode with both strategies' containers and check every token.
fn assert_round_trip(data: &[u8]) {
    for strategy in [Strategy::HashChain, Strategy::WindowScan] {
        let c = compress_with(data, strategy);
        assert_eq!(c.len() % 16, 0, "{strategy}: container not 16-aligned");
        let header = ContainerHeader::parse(&c).unwrap();
        assert_eq!(header.original_size as usize, data.len());
        assert_eq!(c.len(), HEADER_SIZE + header.payload_size as usize);

        let mut reader = TokenReader::new(&c[HEADER_SIZE..], data.len());
        for token in reader.by_ref() {
            let token = token.unwrap();
            assert!(token.is_within_bounds(), "{strategy}: {token:?}");
        }
        assert_eq!(reader.produced(), data.len());
        assert_eq!(decompress(&c).unwrap(), data, "{strategy}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Degenerate inputs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input_is_a_bare_header() {
    let c = compress(b"");
    assert_eq!(c.len(), HEADER_SIZE);
    assert_eq!(decompress(&c).unwrap(), b"");
}

#[test]
fn single_byte() {
    let c = compress(b"Q");
    // one literal token, padded to 16
    assert_eq!(c.len(), HEADER_SIZE + 16);
    assert_eq!(&c[HEADER_SIZE..HEADER_SIZE + 2], &[0x01, b'Q']);
    assert_round_trip(b"Q");
}

#[test]
fn short_periodic_input_stays_literal() {
    // nothing has been emitted yet when the literal is measured
    let c = compress(b"ABCABCABCABC");
    assert_eq!(c[HEADER_SIZE], 12);
    assert_eq!(&c[HEADER_SIZE + 1..HEADER_SIZE + 13], b"ABCABCABCABC");
    assert_round_trip(b"ABCABCABCABC");
}

// ─────────────────────────────────────────────────────────────────────────────
// Runs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn long_run_is_one_rle_token() {
    let data = vec![b'A'; 5000];
    let c = compress(&data);
    assert_eq!(c.len(), HEADER_SIZE + 16);
    let tokens: Vec<_> = TokenReader::new(&c[HEADER_SIZE..], data.len()).collect();
    assert_eq!(tokens, vec![Ok(Token::Rle { length: 5000, value: b'A' })]);
    assert_round_trip(&data);
}

#[test]
fn run_longer_than_one_token_splits() {
    let data = vec![0u8; MAX_RLE + 1000];
    let c = compress(&data);
    let tokens: Vec<_> = TokenReader::new(&c[HEADER_SIZE..], data.len())
        .map(Result::unwrap)
        .collect();
    assert_eq!(
        tokens,
        vec![Token::Rle { length: MAX_RLE, value: 0 }, Token::Rle { length: 1000, value: 0 }]
    );
    assert_round_trip(&data);
}

#[test]
fn alternating_runs() {
    let mut data = Vec::new();
    for i in 0..200u32 {
        data.extend(std::iter::repeat((i % 7) as u8).take(3 + (i as usize % 11)));
    }
    assert_round_trip(&data);
}

// ─────────────────────────────────────────────────────────────────────────────
// References
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn repeated_byte_ramp_compresses() {
    let data: Vec<u8> = (0..=255u8).cycle().take(2560).collect();
    let c = compress(&data);
    assert!(c.len() < 2576, "container is {} bytes", c.len());
    assert_round_trip(&data);
}

#[test]
fn repeats_at_the_window_edge() {
    let block = noise(WINDOW_SIZE, 7);
    let mut data = block.clone();
    data.extend_from_slice(&block);
    data.extend_from_slice(&block);
    let c = compress(&data);
    assert!(c.len() < data.len() / 2);
    assert_round_trip(&data);
}

#[test]
fn repeats_beyond_the_window_are_not_referenced() {
    let block = noise(WINDOW_SIZE + 500, 99);
    let mut data = block.clone();
    data.extend_from_slice(&block);
    for token in TokenReader::new(&compress(&data)[HEADER_SIZE..], data.len()) {
        if let Token::Reference { offset, .. } = token.unwrap() {
            assert!(offset <= WINDOW_SIZE);
        }
    }
    assert_round_trip(&data);
}

#[test]
fn text_like_data() {
    let data = b"The quick brown fox jumps over the lazy dog. ".repeat(300);
    let c = compress(&data);
    assert!(c.len() < data.len() / 4);
    assert_round_trip(&data);
}

// ─────────────────────────────────────────────────────────────────────────────
// Incompressible
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn noise_grows_by_literal_headers_only() {
    let data = noise(63 * 40, 12345);
    let c = compress(&data);
    // one header byte per 63 literal bytes, plus padding
    assert!(c.len() <= data.len() + data.len() / 63 + 2 * HEADER_SIZE);
    assert_round_trip(&data);
}

#[test]
fn mixed_content() {
    let mut data = noise(3000, 5);
    data.extend(vec![0xEE; 700]);
    let echo = data[100..1100].to_vec();
    data.extend_from_slice(&echo);
    data.extend(noise(10, 8));
    assert_round_trip(&data);
}
