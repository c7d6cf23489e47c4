//! Operation mode selection and startup defaults for the CLI.
//!
//! This module provides:
//! - [`OpMode`]: what the CLI should do with its inputs.
//! - [`determine_op_mode`]: infers compress vs. decompress from a filename's extension.
//! - [`init_strategy`]: reads the default match strategy from the environment.

use crate::codec::Strategy;
use crate::config::{ENV_STRATEGY, LZP2_EXTENSION, STRATEGY_DEFAULT};

/// What the CLI should do with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpMode {
    /// Mode inferred from the filename extension: decompress if `.lzp2`, compress otherwise.
    #[default]
    Auto,
    /// Compress input into an LZP2 container.
    Compress,
    /// Decompress an LZP2 container.
    Decompress,
    /// Decode and verify containers without writing output.
    Test,
    /// Print header information about LZP2 containers.
    List,
}

/// Infer the operation mode from `filename`'s extension.
///
/// Returns [`OpMode::Decompress`] if `filename` ends with `.lzp2`,
/// [`OpMode::Compress`] otherwise.
pub fn determine_op_mode(filename: &str) -> OpMode {
    if filename.ends_with(LZP2_EXTENSION) {
        OpMode::Decompress
    } else {
        OpMode::Compress
    }
}

/// Read the default match strategy from the `LZP2_STRATEGY` environment variable.
pub fn init_strategy() -> Strategy {
    init_strategy_from(std::env::var(ENV_STRATEGY).ok().as_deref())
}

/// Testable core of [`init_strategy`]: parse an optional `LZP2_STRATEGY` value.
///
/// Unrecognised values print a warning at display level 2 and fall back to
/// [`STRATEGY_DEFAULT`].
pub fn init_strategy_from(env_val: Option<&str>) -> Strategy {
    if let Some(env) = env_val {
        match env.trim().parse::<Strategy>() {
            Ok(strategy) => return strategy,
            Err(_) => crate::displaylevel!(
                2,
                "Ignore environment variable setting {}={}: not a known strategy \n",
                ENV_STRATEGY,
                env
            ),
        }
    }
    STRATEGY_DEFAULT
}
