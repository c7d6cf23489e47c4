// Integration tests for src/frame/decompress.rs — whole-buffer decompression
//
// Covers the three failure kinds and the rule that only the recorded
// original size bounds the read.

use lzp2::frame::{compress, decompress, ContainerHeader, HEADER_SIZE};
use lzp2::FormatError;

fn container(original_size: u32, payload: &[u8]) -> Vec<u8> {
    let header = ContainerHeader { original_size, payload_size: payload.len() as u32 };
    let mut c = header.to_bytes().to_vec();
    c.extend_from_slice(payload);
    c
}

#[test]
fn handmade_container_decodes() {
    let c = container(7, &[0x03, b'a', b'b', b'c', 0x88, 0x02]);
    assert_eq!(decompress(&c).unwrap(), b"abcabca");
}

#[test]
fn payload_size_field_is_not_trusted() {
    // payload_size claims 0 but the tokens are there
    let mut c = container(3, &[0x03, b'x', b'y', b'z']);
    c[12..16].copy_from_slice(&0u32.to_le_bytes());
    assert_eq!(decompress(&c).unwrap(), b"xyz");
}

#[test]
fn trailing_garbage_is_ignored() {
    let mut c = compress(b"payload");
    c.extend_from_slice(&[0xFF; 40]);
    assert_eq!(decompress(&c).unwrap(), b"payload");
}

#[test]
fn reference_before_any_output_is_invalid() {
    let c = container(3, &[0x80, 0x00]);
    assert_eq!(decompress(&c), Err(FormatError::InvalidOffset));
}

#[test]
fn cut_container_is_truncated() {
    let data: Vec<u8> = (0..=255u8).cycle().take(600).collect();
    let c = compress(&data);
    for cut in [HEADER_SIZE - 1, HEADER_SIZE, HEADER_SIZE + 10, HEADER_SIZE + 200] {
        assert_eq!(decompress(&c[..cut]), Err(FormatError::Truncated), "cut at {cut}");
    }
}

#[test]
fn wrong_magic_is_bad_magic() {
    let mut c = compress(b"x");
    c[0] = b'Z';
    assert_eq!(decompress(&c), Err(FormatError::BadMagic));
}
