//! Command-line argument parsing for the `lzp2` binary.
//!
//! [`Cli`] is the raw `clap` definition. [`parse_args`] (reads
//! `std::env::args()`) and [`parse_args_from`] (takes an explicit iterator,
//! suitable for unit-testing) validate it and produce a [`ParsedArgs`] with
//! the final [`Prefs`], operation mode and file names.
//!
//! A lone `-` names stdin as an input and stdout as an output.

use std::path::PathBuf;

use anyhow::bail;
use clap::{ArgAction, Parser};

use crate::cli::op_mode::{init_strategy, OpMode};
use crate::codec::Strategy;
use crate::config::DISPLAY_LEVEL_DEFAULT;
use crate::io::file_io::{STDIN_MARK, STDOUT_MARK};
use crate::io::prefs::Prefs;

/// Highest meaningful display level.
const DISPLAY_LEVEL_MAX: u32 = 4;

// ── clap definition ──────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "lzp2",
    about = "Compress and decompress LZP2 containers",
    version,
    after_help = "Without -z/-d, a .lzp2 input is decompressed and anything else is compressed."
)]
pub struct Cli {
    /// Force compression
    #[arg(short = 'z', long, conflicts_with_all = ["decompress", "test", "list"])]
    pub compress: bool,
    /// Decompress .lzp2 containers
    #[arg(short, long, conflicts_with_all = ["test", "list"])]
    pub decompress: bool,
    /// Decode and verify containers without writing anything
    #[arg(short, long, conflicts_with = "list")]
    pub test: bool,
    /// Print header information of containers
    #[arg(short, long)]
    pub list: bool,
    /// Write to standard output
    #[arg(short = 'c', long)]
    pub stdout: bool,
    /// Overwrite existing output files without asking
    #[arg(short, long)]
    pub force: bool,
    /// Keep source files (default)
    #[arg(short, long, overrides_with = "rm")]
    pub keep: bool,
    /// Remove source files after success
    #[arg(long, overrides_with = "keep")]
    pub rm: bool,
    /// Treat every FILE as an input; directories are walked recursively
    #[arg(short, long)]
    pub multiple: bool,
    /// Directory receiving the outputs (created if missing)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
    /// Search the whole window for matches (slower, same format)
    #[arg(long)]
    pub exhaustive: bool,
    /// Increase verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Decrease verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Input file, then optional output file; with -m, all inputs
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

// ── Public output type ───────────────────────────────────────────────────────

/// Complete set of options and filenames produced by argument parsing.
#[derive(Debug)]
pub struct ParsedArgs {
    /// File-level preferences.
    pub prefs: Prefs,
    /// Requested operation mode; [`OpMode::Auto`] is resolved at dispatch.
    pub op_mode: OpMode,
    /// Display level after -v / -q.
    pub display_level: u32,
    /// Send every output to stdout.
    pub to_stdout: bool,
    /// Multiple-input mode (`-m`).
    pub multiple_inputs: bool,
    /// Single-file mode: the input (possibly [`STDIN_MARK`]).
    pub input_filename: Option<String>,
    /// Single-file mode: explicit output (possibly [`STDOUT_MARK`]).
    pub output_filename: Option<String>,
    /// Multiple-input mode, and `--list`: every input.
    pub in_file_names: Vec<String>,
}

/// Parse `std::env::args()`.
///
/// `--help` and `--version` print and exit from within `clap`.
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    ParsedArgs::from_cli(Cli::parse())
}

/// Parse an explicit argument list; the first item is the program name.
pub fn parse_args_from<I, T>(args: I) -> anyhow::Result<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    ParsedArgs::from_cli(Cli::try_parse_from(args)?)
}

fn input_name(arg: &str) -> String {
    if arg == "-" { STDIN_MARK.to_owned() } else { arg.to_owned() }
}

fn output_name(arg: &str) -> String {
    if arg == "-" { STDOUT_MARK.to_owned() } else { arg.to_owned() }
}

impl ParsedArgs {
    /// Validate a raw [`Cli`] and resolve it into runtime options.
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let op_mode = if cli.list {
            OpMode::List
        } else if cli.test {
            OpMode::Test
        } else if cli.decompress {
            OpMode::Decompress
        } else if cli.compress {
            OpMode::Compress
        } else {
            OpMode::Auto
        };

        let display_level = (DISPLAY_LEVEL_DEFAULT + u32::from(cli.verbose))
            .saturating_sub(u32::from(cli.quiet))
            .min(DISPLAY_LEVEL_MAX);

        let mut prefs = Prefs::new();
        prefs.set_overwrite(cli.force);
        prefs.set_remove_src_file(cli.rm);
        prefs.set_test_mode(op_mode == OpMode::Test);
        prefs.set_output_dir(cli.output_dir.as_deref());
        prefs.set_strategy(if cli.exhaustive { Strategy::WindowScan } else { init_strategy() });

        if cli.stdout && cli.output_dir.is_some() {
            bail!("bad usage: --stdout and --output-dir cannot be combined");
        }

        let multiple_inputs = cli.multiple || op_mode == OpMode::List;
        let mut parsed = ParsedArgs {
            prefs,
            op_mode,
            display_level,
            to_stdout: cli.stdout,
            multiple_inputs,
            input_filename: None,
            output_filename: None,
            in_file_names: Vec::new(),
        };

        if multiple_inputs {
            if cli.files.is_empty() {
                bail!("bad usage: no input files");
            }
            parsed.in_file_names = cli.files.iter().map(|f| input_name(f)).collect();
            return Ok(parsed);
        }

        match cli.files.as_slice() {
            [] => parsed.input_filename = Some(STDIN_MARK.to_owned()),
            [input] => parsed.input_filename = Some(input_name(input)),
            [input, output] => {
                if cli.stdout {
                    bail!("bad usage: an output file cannot be combined with --stdout");
                }
                parsed.input_filename = Some(input_name(input));
                parsed.output_filename = Some(output_name(output));
            }
            _ => bail!("bad usage: too many file names; use -m for several inputs"),
        }
        if parsed.to_stdout {
            parsed.output_filename = Some(STDOUT_MARK.to_owned());
        }
        Ok(parsed)
    }
}
