//! LZP2 token codec: wire grammar, match finding, greedy encoder, and decoder.
//!
//! The container around the token stream (magic, sizes, padding) lives in
//! [`crate::frame`]; this module only deals with raw payload bytes.

pub mod compress;
pub mod decompress;
pub mod matcher;
pub mod token;
pub mod types;

// Re-export the most important public API items at the module level.
pub use compress::{encode_payload, encode_payload_to_vec, greedy_parse, TokenStats};
pub use decompress::{apply_token, decode_payload};
pub use matcher::{rle_length, HashChain, Match, MatchFinder, Strategy, WindowScan};
pub use token::{decode_token, encode_token, TokenReader};
pub use types::{
    EncodeError, FormatError, Token, MAX_CANDIDATES, MAX_LITERAL, MAX_MATCH, MAX_RLE, MIN_MATCH,
    MIN_RLE, WINDOW_SIZE,
};
