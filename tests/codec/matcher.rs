// Integration tests for src/codec/matcher.rs — match finding
//
// Covers:
//   - rle_length capping
//   - HashChain: window bound, per-key candidate cap, eviction, tie-break
//   - WindowScan: sees candidates HashChain has dropped
//   - Strategy names and parsing

use lzp2::codec::{
    rle_length, HashChain, Match, MatchFinder, Strategy, WindowScan, MAX_CANDIDATES, MAX_MATCH,
    WINDOW_SIZE,
};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// `len` bytes in which no 3-byte sequence repeats within the window.
fn unique_bytes(len: usize) -> Vec<u8> {
    (0..len as u32)
        .flat_map(|i| [(i >> 8) as u8 | 0x80, i as u8])
        .take(len)
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// rle_length
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn rle_length_stops_at_different_byte() {
    assert_eq!(rle_length(b"xxxxyx", 0), 4);
    assert_eq!(rle_length(b"xxxxyx", 4), 1);
    assert_eq!(rle_length(b"xxxxyx", 6), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// HashChain
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn hash_chain_finds_longest_match_capped_at_18() {
    let block: Vec<u8> = (0..40u8).collect();
    let mut input = block.clone();
    input.extend_from_slice(&block);
    let mut hc = HashChain::new();
    hc.advance(&input, 40);
    assert_eq!(hc.find(&input, 40), Some(Match { length: MAX_MATCH, offset: 40 }));
}

#[test]
fn hash_chain_respects_window() {
    let mut input = b"QRS".to_vec();
    input.extend(unique_bytes(WINDOW_SIZE));
    input.extend_from_slice(b"QRS");
    let at = input.len() - 3;
    let mut hc = HashChain::new();
    hc.advance(&input, at);
    // "QRS" sits WINDOW_SIZE + 3 bytes back: out of reach
    assert_eq!(hc.find(&input, at), None);
}

#[test]
fn hash_chain_reaches_exactly_window_size_back() {
    let mut input = b"QRS".to_vec();
    input.extend(unique_bytes(WINDOW_SIZE - 3));
    input.extend_from_slice(b"QRS");
    let at = input.len() - 3;
    let mut hc = HashChain::new();
    hc.advance(&input, at);
    assert_eq!(hc.find(&input, at), Some(Match { length: 3, offset: WINDOW_SIZE }));
}

#[test]
fn hash_chain_evicts_positions_outside_window() {
    let input = unique_bytes(10 * WINDOW_SIZE);
    let mut hc = HashChain::new();
    for produced in (0..=input.len()).step_by(97) {
        hc.advance(&input, produced);
    }
    hc.advance(&input, input.len());
    assert!(hc.position_count() <= WINDOW_SIZE + 1);
    assert!(hc.oldest_position().unwrap() >= input.len() - WINDOW_SIZE);
}

#[test]
fn hash_chain_caps_candidates_per_key() {
    // The same 3-byte prefix at 60 positions, each followed by a distinct byte.
    let mut input = Vec::new();
    for i in 0..60u8 {
        input.extend_from_slice(b"key");
        input.push(i);
    }
    let mut hc = HashChain::new();
    hc.advance(&input, input.len());
    // 238 indexed positions, minus the "key" occurrences pushed out of its chain
    assert_eq!(hc.position_count(), 238 - (60 - MAX_CANDIDATES));
    assert_eq!(hc.key_count(), 1 + 60 + 59 + 59);

    // The query matches only the oldest occurrence ("key" + 0) which has
    // been pushed out of the capped chain, so only 3-byte matches remain.
    let mut query = input.clone();
    query.extend_from_slice(b"key\x00");
    let at = input.len();
    let mut hc = HashChain::new();
    hc.advance(&query, at);
    assert_eq!(hc.find(&query, at), Some(Match { length: 3, offset: 4 }));

    let mut ws = WindowScan::new();
    ws.advance(&query, at);
    assert_eq!(ws.find(&query, at), Some(Match { length: 4, offset: at }));
}

// ─────────────────────────────────────────────────────────────────────────────
// WindowScan
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn window_scan_only_sees_produced_prefix() {
    let input = b"abcabc";
    let mut ws = WindowScan::new();
    ws.advance(input, 0);
    assert_eq!(ws.find(input, 3), None);
    ws.advance(input, 3);
    assert_eq!(ws.find(input, 3), Some(Match { length: 3, offset: 3 }));
}

#[test]
fn finders_agree_on_small_inputs() {
    let input = b"the cat sat on the mat; the cat sat on the hat".to_vec();
    for at in 1..input.len() {
        let mut hc = HashChain::new();
        let mut ws = WindowScan::new();
        hc.advance(&input, at);
        ws.advance(&input, at);
        assert_eq!(hc.find(&input, at), ws.find(&input, at), "position {at}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Strategy
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn strategy_parses_aliases() {
    assert_eq!("fast".parse::<Strategy>(), Ok(Strategy::HashChain));
    assert_eq!("Exhaustive".parse::<Strategy>(), Ok(Strategy::WindowScan));
    assert!("best".parse::<Strategy>().is_err());
    assert_eq!(Strategy::WindowScan.to_string(), "window-scan");
    assert_eq!(Strategy::default(), Strategy::HashChain);
}
