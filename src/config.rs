// config.rs — Compile-time defaults for the lzp2 tool.
//
// Codec limits (window size, token ranges) are fixed by the container format
// and live in `codec::types`; only tool behaviour is configurable here.

use crate::codec::Strategy;

// File-name suffix of LZP2 containers.
// Used for mode auto-detection and default output names.
pub const LZP2_EXTENSION: &str = ".lzp2";

// Default notification level (2 = results and warnings).
// Raised by -v, lowered by -q.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Match strategy used when neither --exhaustive nor LZP2_STRATEGY is given.
pub const STRATEGY_DEFAULT: Strategy = Strategy::HashChain;

// Environment variable overriding the default match strategy.
pub const ENV_STRATEGY: &str = "LZP2_STRATEGY";
