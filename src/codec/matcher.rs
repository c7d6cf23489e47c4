//! Match finding for the LZP2 encoder.
//!
//! The encoder's dictionary is the output it has already produced. Because
//! every token reproduces input bytes exactly, that output is byte-identical
//! to the consumed input prefix, so finders read the dictionary straight out
//! of `input[..produced]` instead of keeping a second copy.
//!
//! Two [`MatchFinder`] implementations are provided:
//!
//! | Type           | Search                                   | Cost per position     |
//! |----------------|------------------------------------------|-----------------------|
//! | [`HashChain`]  | last [`MAX_CANDIDATES`] positions per key | bounded               |
//! | [`WindowScan`] | every position in the 2 KiB window        | O([`WINDOW_SIZE`])    |
//!
//! Both honour the same caps and tie-break (longest match, then nearest), so
//! they differ only in which candidates they get to see.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use super::types::{KEY_LEN, MAX_CANDIDATES, MAX_MATCH, MAX_RLE, MIN_MATCH, WINDOW_SIZE};

// ─────────────────────────────────────────────────────────────────────────────
// Match
// ─────────────────────────────────────────────────────────────────────────────

/// A qualifying back-reference: `length` in `MIN_MATCH..=MAX_MATCH`,
/// `offset` in `1..=WINDOW_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub length: usize,
    pub offset: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Length of the run of `input[at]` starting at `at`, capped at [`MAX_RLE`].
///
/// Returns 0 when `at` is past the end of `input`.
pub fn rle_length(input: &[u8], at: usize) -> usize {
    let Some(&value) = input.get(at) else {
        return 0;
    };
    let end = input.len().min(at + MAX_RLE);
    1 + input[at + 1..end].iter().take_while(|&&b| b == value).count()
}

/// Number of leading bytes `input[candidate..]` and `input[at..]` share.
///
/// The candidate side never reads at or past `produced`, so the matched
/// source bytes are always ones the decoder already holds.
#[inline]
fn common_length(input: &[u8], candidate: usize, at: usize, produced: usize) -> usize {
    let cap = MAX_MATCH.min(input.len() - at).min(produced - candidate);
    input[candidate..candidate + cap]
        .iter()
        .zip(&input[at..at + cap])
        .take_while(|(a, b)| a == b)
        .count()
}

/// Pack the [`KEY_LEN`]-byte prefix at `at` into an integer key.
#[inline]
fn prefix_key(input: &[u8], at: usize) -> u32 {
    (u32::from(input[at]) << 16) | (u32::from(input[at + 1]) << 8) | u32::from(input[at + 2])
}

/// Keep `candidate` if it beats `best`: longer wins, equal length goes to the
/// smaller offset.
#[inline]
fn consider(best: &mut Option<Match>, length: usize, offset: usize) {
    if length < MIN_MATCH {
        return;
    }
    let better = match *best {
        None => true,
        Some(b) => length > b.length || (length == b.length && offset < b.offset),
    };
    if better {
        *best = Some(Match { length, offset });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MatchFinder trait
// ─────────────────────────────────────────────────────────────────────────────

/// Back-reference search over the already-produced prefix of `input`.
pub trait MatchFinder {
    /// Best qualifying reference for the bytes starting at `at`, or `None`.
    ///
    /// `at` is at or after the produced length last passed to
    /// [`advance`](MatchFinder::advance). Offsets are measured from that
    /// produced length, not from `at`, and never exceed [`WINDOW_SIZE`]. The
    /// two differ only while a literal looks ahead, where just the length
    /// of the result matters.
    fn find(&self, input: &[u8], at: usize) -> Option<Match>;

    /// Record that `input[..produced]` is now part of the dictionary.
    fn advance(&mut self, input: &[u8], produced: usize);
}

// ─────────────────────────────────────────────────────────────────────────────
// HashChain
// ─────────────────────────────────────────────────────────────────────────────

/// Candidate index: 3-byte prefix → the most recent positions that start it.
///
/// Each key keeps at most [`MAX_CANDIDATES`] positions in ascending order.
/// Positions that fall more than [`WINDOW_SIZE`] bytes behind the produced
/// length are evicted from the index, so its size is bounded by the window no
/// matter how long the input is.
#[derive(Debug, Default)]
pub struct HashChain {
    chains: HashMap<u32, VecDeque<usize>>,
    /// Every live position with its key, oldest first; drives eviction.
    order: VecDeque<(usize, u32)>,
    /// First position whose prefix has not been indexed yet.
    next_unindexed: usize,
    produced: usize,
}

impl HashChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct prefixes currently indexed.
    pub fn key_count(&self) -> usize {
        self.chains.len()
    }

    /// Number of positions currently indexed across all keys.
    pub fn position_count(&self) -> usize {
        self.chains.values().map(VecDeque::len).sum()
    }

    /// Oldest position still present in the index.
    pub fn oldest_position(&self) -> Option<usize> {
        self.chains.values().filter_map(|c| c.front().copied()).min()
    }

    fn insert(&mut self, key: u32, pos: usize) {
        let chain = self.chains.entry(key).or_default();
        chain.push_back(pos);
        if chain.len() > MAX_CANDIDATES {
            chain.pop_front();
        }
        self.order.push_back((pos, key));
    }

    fn evict_before(&mut self, produced: usize) {
        while let Some(&(pos, key)) = self.order.front() {
            if produced - pos <= WINDOW_SIZE {
                break;
            }
            self.order.pop_front();
            if let Some(chain) = self.chains.get_mut(&key) {
                // the per-key cap may already have dropped it
                if chain.front() == Some(&pos) {
                    chain.pop_front();
                }
                if chain.is_empty() {
                    self.chains.remove(&key);
                }
            }
        }
    }
}

impl MatchFinder for HashChain {
    fn find(&self, input: &[u8], at: usize) -> Option<Match> {
        if input.len().saturating_sub(at) < KEY_LEN {
            return None;
        }
        let chain = self.chains.get(&prefix_key(input, at))?;

        let mut best = None;
        for &candidate in chain.iter().rev() {
            let offset = self.produced - candidate;
            if offset > WINDOW_SIZE {
                // chains are ascending: every remaining candidate is older
                break;
            }
            consider(&mut best, common_length(input, candidate, at, self.produced), offset);
            if best.is_some_and(|m| m.length == MAX_MATCH) {
                break;
            }
        }
        best
    }

    fn advance(&mut self, input: &[u8], produced: usize) {
        let last = produced.saturating_sub(KEY_LEN - 1);
        for pos in self.next_unindexed..last {
            self.insert(prefix_key(input, pos), pos);
        }
        self.next_unindexed = self.next_unindexed.max(last);
        self.produced = produced;
        self.evict_before(produced);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// WindowScan
// ─────────────────────────────────────────────────────────────────────────────

/// Exhaustive search of every dictionary position in the window, nearest
/// first.
///
/// Sees the same dictionary as [`HashChain`] (positions whose 3-byte prefix is
/// fully produced) but without the per-key cap, at O(window) cost per lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowScan {
    produced: usize,
}

impl WindowScan {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchFinder for WindowScan {
    fn find(&self, input: &[u8], at: usize) -> Option<Match> {
        if input.len().saturating_sub(at) < MIN_MATCH {
            return None;
        }
        let newest = self.produced.saturating_sub(KEY_LEN - 1);
        let mut best = None;
        for candidate in (self.produced.saturating_sub(WINDOW_SIZE)..newest).rev() {
            let offset = self.produced - candidate;
            consider(&mut best, common_length(input, candidate, at, self.produced), offset);
            if best.is_some_and(|m| m.length == MAX_MATCH) {
                break;
            }
        }
        best
    }

    fn advance(&mut self, _input: &[u8], produced: usize) {
        self.produced = produced;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Strategy selection
// ─────────────────────────────────────────────────────────────────────────────

/// Which [`MatchFinder`] the encoder drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Bounded candidate index (default).
    #[default]
    HashChain,
    /// Brute-force window scan.
    WindowScan,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::HashChain => "hash-chain",
            Strategy::WindowScan => "window-scan",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hash-chain" | "hashchain" | "fast" => Ok(Strategy::HashChain),
            "window-scan" | "windowscan" | "exhaustive" => Ok(Strategy::WindowScan),
            other => Err(format!("unknown match strategy: {other}")),
        }
    }
}
