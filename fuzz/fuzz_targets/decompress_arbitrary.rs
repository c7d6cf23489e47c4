#![no_main]
use libfuzzer_sys::fuzz_target;
use lzp2::codec::{decode_payload, TokenReader};
use lzp2::frame::MAGIC;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a whole container. Errors are fine; panics are not.
    let _ = lzp2::decompress(data);

    // Bare payload: the first two bytes give the size to produce, which keeps
    // the token decoder reachable without a valid header.
    if data.len() >= 2 {
        let original_size = usize::from(u16::from_le_bytes([data[0], data[1]]));
        let payload = &data[2..];
        if let Ok(out) = decode_payload(payload, original_size) {
            assert_eq!(out.len(), original_size);
        }
        for token in TokenReader::new(payload, original_size) {
            match token {
                Ok(t) => assert!(t.is_within_bounds()),
                Err(_) => break,
            }
        }
    }

    // Behind a valid magic the header's size fields come from the input.
    let mut framed = MAGIC.to_vec();
    framed.extend_from_slice(data);
    let _ = lzp2::decompress(&framed);
});
