//! Greedy LZP2 token-stream encoder.
//!
//! At each input position the encoder measures the RLE run and asks the
//! [`MatchFinder`] for the best back-reference, then emits exactly one token:
//!
//! 1. RLE, when the run is at least [`MIN_RLE`] and no shorter than the best
//!    reference;
//! 2. otherwise the reference, when one qualifies;
//! 3. otherwise a literal run, grown byte by byte until the next position
//!    would itself start an RLE or reference, or the run hits [`MAX_LITERAL`].
//!
//! The parse is deterministic: the same input and strategy always yield the
//! same bytes.

use super::matcher::{rle_length, HashChain, MatchFinder, Strategy, WindowScan};
use super::token::encode_token;
use super::types::{Token, MAX_LITERAL, MIN_RLE};

// ─────────────────────────────────────────────────────────────────────────────
// Statistics
// ─────────────────────────────────────────────────────────────────────────────

/// Token counts gathered while encoding one buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenStats {
    pub literals: usize,
    pub literal_bytes: usize,
    pub rles: usize,
    pub references: usize,
}

impl TokenStats {
    fn record(&mut self, token: &Token<'_>) {
        match token {
            Token::Literal(bytes) => {
                self.literals += 1;
                self.literal_bytes += bytes.len();
            }
            Token::Rle { .. } => self.rles += 1,
            Token::Reference { .. } => self.references += 1,
        }
    }

    /// Total number of tokens emitted.
    pub fn tokens(&self) -> usize {
        self.literals + self.rles + self.references
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public entry points
// ─────────────────────────────────────────────────────────────────────────────

/// Encode `input` as an unpadded token stream appended to `dst`.
pub fn encode_payload(input: &[u8], strategy: Strategy, dst: &mut Vec<u8>) -> TokenStats {
    match strategy {
        Strategy::HashChain => greedy_parse(input, &mut HashChain::new(), dst),
        Strategy::WindowScan => greedy_parse(input, &mut WindowScan::new(), dst),
    }
}

/// Convenience wrapper around [`encode_payload`] returning a fresh buffer.
pub fn encode_payload_to_vec(input: &[u8], strategy: Strategy) -> Vec<u8> {
    let mut dst = Vec::with_capacity(input.len() / 2 + 16);
    encode_payload(input, strategy, &mut dst);
    dst
}

// ─────────────────────────────────────────────────────────────────────────────
// Parser
// ─────────────────────────────────────────────────────────────────────────────

/// Drive `finder` over the whole of `input`, emitting one token per step.
pub fn greedy_parse<F: MatchFinder>(input: &[u8], finder: &mut F, dst: &mut Vec<u8>) -> TokenStats {
    let mut stats = TokenStats::default();
    let mut pos = 0usize;

    while pos < input.len() {
        let token = select_token(input, pos, finder);
        encode_token(&token, dst);
        stats.record(&token);

        pos += token.output_len();
        finder.advance(input, pos);
    }
    stats
}

/// Choose the token for position `pos`.
fn select_token<'a, F: MatchFinder>(input: &'a [u8], pos: usize, finder: &F) -> Token<'a> {
    let run = rle_length(input, pos);
    let reference = finder.find(input, pos);
    let ref_len = reference.map_or(0, |m| m.length);

    if run >= MIN_RLE && run >= ref_len {
        return Token::Rle { length: run, value: input[pos] };
    }
    if let Some(m) = reference {
        return Token::Reference { length: m.length, offset: m.offset };
    }
    let len = literal_run(input, pos, finder);
    Token::Literal(&input[pos..pos + len])
}

/// Length of the literal run starting at `pos` (at least 1).
fn literal_run<F: MatchFinder>(input: &[u8], pos: usize, finder: &F) -> usize {
    let max = MAX_LITERAL.min(input.len() - pos);
    let mut len = 1;
    while len < max {
        let next = pos + len;
        if rle_length(input, next) >= MIN_RLE || finder.find(input, next).is_some() {
            break;
        }
        len += 1;
    }
    len
}
