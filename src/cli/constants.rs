// cli/constants.rs — Program identity and display infrastructure.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::DISPLAY_LEVEL_DEFAULT;

// ── String / identity constants ──────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "lzp2";
pub const AUTHOR: &str = "the lzp2 authors";

// ── Display level global ─────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = results and warnings; 3 = per-file progress;
// 4 = verbose (paths, strategy, token statistics)
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Renders the welcome banner shown at display level 3 and above.
pub fn welcome_message() -> String {
    format!(
        "*** {} v{} {}-bit, by {} ***\n",
        COMPRESSOR_NAME,
        crate::version_string(),
        usize::BITS,
        AUTHOR
    )
}

// ── Display helpers ──────────────────────────────────────────────────────────
//
//   displayout!(...)      → stdout
//   display!(...)         → stderr
//   displaylevel!(l, ...) → stderr when display_level() >= l

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
