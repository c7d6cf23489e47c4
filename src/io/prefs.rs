//! Runtime preferences for the file-level compression pipeline.
//!
//! [`Prefs`] is a plain value owned by the caller. The CLI fills it from
//! command-line flags; library users can build one directly and pass it to
//! [`crate::io::compress_filename`] and friends.

use std::path::{Path, PathBuf};

use crate::codec::Strategy;
use crate::config::STRATEGY_DEFAULT;

/// All tunable parameters for file compression and decompression.
#[derive(Clone, Debug)]
pub struct Prefs {
    /// Overwrite existing destination files without prompting. Default: false.
    pub overwrite: bool,
    /// Test mode: decode and verify, write nothing. Default: false.
    pub test_mode: bool,
    /// Remove the source file after a successful operation. Default: false.
    pub remove_src_file: bool,
    /// Match strategy used by the encoder.
    pub strategy: Strategy,
    /// Directory receiving batch outputs; `None` writes next to each input.
    pub output_dir: Option<PathBuf>,
    /// Copy the source's modification time and permissions to the output. Default: true.
    pub preserve_file_stat: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            overwrite: false,
            test_mode: false,
            remove_src_file: false,
            strategy: STRATEGY_DEFAULT,
            output_dir: None,
            preserve_file_stat: true,
        }
    }
}

impl Prefs {
    /// Creates a new `Prefs` with all defaults applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables destination-file overwrite. Returns the new value.
    pub fn set_overwrite(&mut self, yes: bool) -> bool {
        self.overwrite = yes;
        yes
    }

    /// Enables or disables test mode. Returns the new value.
    pub fn set_test_mode(&mut self, yes: bool) -> bool {
        self.test_mode = yes;
        yes
    }

    /// Enables or disables source-file removal. Returns the new value.
    pub fn set_remove_src_file(&mut self, yes: bool) -> bool {
        self.remove_src_file = yes;
        yes
    }

    /// Selects the encoder's match strategy. Returns the new value.
    pub fn set_strategy(&mut self, strategy: Strategy) -> Strategy {
        self.strategy = strategy;
        strategy
    }

    /// Sets or clears the batch output directory. Returns true if one is now set.
    pub fn set_output_dir(&mut self, dir: Option<&Path>) -> bool {
        self.output_dir = dir.map(Path::to_path_buf);
        self.output_dir.is_some()
    }

    /// Enables or disables copying file metadata to outputs. Returns the new value.
    pub fn set_preserve_file_stat(&mut self, yes: bool) -> bool {
        self.preserve_file_stat = yes;
        yes
    }
}
