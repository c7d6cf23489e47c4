//! Command-line interface for the `lzp2` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, the shared `DISPLAY_LEVEL` atomic and the display macros. |
//! | [`op_mode`]   | `OpMode`, extension-based mode detection, environment defaults. |
//! | [`args`]      | `clap` definition and `ParsedArgs`, the validated runtime options. |
//!
//! Typical call sequence: `parse_args` → dispatch to the [`crate::io`] layer.

pub mod constants;
pub mod op_mode;
pub mod args;
