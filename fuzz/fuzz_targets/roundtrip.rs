#![no_main]
use libfuzzer_sys::fuzz_target;
use lzp2::{compress_with, decompress, Strategy};

fuzz_target!(|data: &[u8]| {
    // The first byte picks the strategy so both finders get coverage.
    let strategy = match data.first() {
        Some(b) if b & 1 == 1 => Strategy::WindowScan,
        _ => Strategy::HashChain,
    };

    let container = compress_with(data, strategy);
    assert_eq!(container.len() % 16, 0, "container not 16-byte aligned");

    let recovered = match decompress(&container) {
        Ok(v) => v,
        Err(e) => panic!(
            "round-trip: own container rejected ({e}); input {} bytes, container {} bytes",
            data.len(),
            container.len()
        ),
    };
    assert_eq!(recovered, data, "round-trip mismatch with {strategy}");
});
