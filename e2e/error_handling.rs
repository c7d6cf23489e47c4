//! E2E suite: malformed containers
//!
//! Every corruption must surface as exactly one of `BadMagic`, `Truncated`
//! or `InvalidOffset`, never as a panic or as partial output.

use lzp2::codec::decode_payload;
use lzp2::frame::{ContainerHeader, HEADER_SIZE, MAGIC};
use lzp2::{compress, decompress, FormatError};

fn container(original_size: u32, payload: &[u8]) -> Vec<u8> {
    let mut c = ContainerHeader { original_size, payload_size: payload.len() as u32 }
        .to_bytes()
        .to_vec();
    c.extend_from_slice(payload);
    c
}

// ─────────────────────────────────────────────────────────────────────────────
// Header
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn every_magic_byte_is_checked() {
    let good = compress(b"magic check");
    for i in 0..MAGIC.len() {
        let mut c = good.clone();
        c[i] ^= 0x01;
        assert_eq!(decompress(&c), Err(FormatError::BadMagic), "byte {i}");
    }
}

#[test]
fn short_inputs_are_truncated() {
    for len in 0..HEADER_SIZE {
        assert_eq!(decompress(&MAGIC.repeat(2)[..len]), Err(FormatError::Truncated), "len {len}");
    }
}

#[test]
fn empty_original_size_ignores_payload() {
    // nothing to produce, so the garbage is never read
    let c = container(0, &[0xFF, 0xFF, 0xFF]);
    assert_eq!(decompress(&c).unwrap(), b"");
}

// ─────────────────────────────────────────────────────────────────────────────
// Token stream
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn literal_running_past_the_end() {
    assert_eq!(decompress(&container(5, &[0x05, b'a', b'b'])), Err(FormatError::Truncated));
}

#[test]
fn rle_missing_its_value_byte() {
    assert_eq!(decompress(&container(4, &[0x40, 0x00])), Err(FormatError::Truncated));
}

#[test]
fn reference_missing_its_offset_byte() {
    assert_eq!(decompress(&container(6, &[0x03, b'a', b'b', b'c', 0x80])), Err(FormatError::Truncated));
}

#[test]
fn only_filler_bytes() {
    assert_eq!(decompress(&container(1, &[0u8; 16])), Err(FormatError::Truncated));
}

#[test]
fn reference_one_past_produced_output() {
    // 3 bytes produced, offset 4
    assert_eq!(
        decompress(&container(6, &[0x03, b'a', b'b', b'c', 0x80, 0x03])),
        Err(FormatError::InvalidOffset)
    );
}

#[test]
fn reference_exactly_to_start_is_fine() {
    // 3 bytes produced, offset 3
    assert_eq!(decompress(&container(6, &[0x03, b'a', b'b', b'c', 0x80, 0x02])).unwrap(), b"abcabc");
}

#[test]
fn overlapping_reference_repeats_pattern() {
    // "ab" then copy 18 from offset 2
    let out = decompress(&container(20, &[0x02, b'a', b'b', 0xF8, 0x01])).unwrap();
    assert_eq!(out, b"ab".repeat(10));
}

#[test]
fn overshooting_token_is_clipped_to_original_size() {
    // an RLE of 10 where only 6 bytes are wanted
    let out = decompress(&container(6, &[0x40, 0x06, b'z'])).unwrap();
    assert_eq!(out, b"zzzzzz");
}

#[test]
fn decode_payload_without_header() {
    assert_eq!(decode_payload(&[0x02, b'h', b'i'], 2).unwrap(), b"hi");
    assert_eq!(decode_payload(&[0x80, 0x00], 3), Err(FormatError::InvalidOffset));
}

// ─────────────────────────────────────────────────────────────────────────────
// Mutation sweep
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn byte_flips_never_panic() {
    let data = b"mutation sweep: some text, some runs 0000000000, some text again. ".repeat(8);
    let good = compress(&data);
    for i in HEADER_SIZE..good.len() {
        for mask in [0x01u8, 0x40, 0x80, 0xFF] {
            let mut c = good.clone();
            c[i] ^= mask;
            if let Ok(out) = decompress(&c) {
                assert_eq!(out.len(), data.len());
            }
        }
    }
}

#[test]
fn every_truncation_is_detected() {
    let data: Vec<u8> = (0..3000u32).map(|i| (i % 251) as u8 ^ (i / 500) as u8).collect();
    let good = compress(&data);
    let header = ContainerHeader::parse(&good).unwrap();
    let mut reached_end = None;
    for cut in HEADER_SIZE..=good.len() {
        match decompress(&good[..cut]) {
            Ok(out) => {
                assert_eq!(out, data);
                reached_end.get_or_insert(cut);
            }
            Err(e) => {
                assert_eq!(e, FormatError::Truncated, "cut {cut}");
                assert!(reached_end.is_none(), "cut {cut} failed after {reached_end:?} succeeded");
            }
        }
    }
    assert!(reached_end.unwrap() <= HEADER_SIZE + header.payload_size as usize);
}
