//! Binary entry point for the `lzp2` command-line tool.
//!
//! # Control flow
//!
//! 1. [`parse_args`] processes all flags and builds a [`ParsedArgs`] value.
//! 2. [`run`] resolves the operation mode and output names, dispatches to the
//!    file layer and returns an exit code.

use std::io::IsTerminal;
use std::path::Path;

use anyhow::{bail, Context};

use lzp2::cli::args::{parse_args, ParsedArgs};
use lzp2::cli::constants::{display_level, set_display_level, welcome_message};
use lzp2::cli::op_mode::{determine_op_mode, OpMode};
use lzp2::config::LZP2_EXTENSION;
use lzp2::io::{
    compress_filename, compress_multiple_filenames, compressed_name, decompress_filename,
    decompress_multiple_filenames, decompressed_name, display_compressed_files_info, BatchSummary,
    NUL_MARK, STDIN_MARK, STDOUT_MARK,
};
use lzp2::util::create_file_list;

// ── Dispatch ─────────────────────────────────────────────────────────────────

/// Execute the operation selected by argument parsing.
///
/// Returns the process exit code (0 = success, 1 = any failure).
fn run(args: ParsedArgs) -> i32 {
    set_display_level(args.display_level);
    lzp2::displaylevel!(3, "{}", welcome_message());
    lzp2::displaylevel!(4, "Match strategy : {}\n", args.prefs.strategy);

    let result = if args.op_mode == OpMode::List {
        list(&args)
    } else if args.multiple_inputs {
        run_multiple(&args)
    } else {
        run_single(&args)
    };

    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            lzp2::displaylevel!(1, "lzp2: {:#}\n", e);
            1
        }
    }
}

/// Resolve [`OpMode::Auto`] from the name of the (first) input.
fn resolve_mode(mode: OpMode, first_input: &str) -> OpMode {
    match mode {
        OpMode::Auto => determine_op_mode(first_input),
        other => other,
    }
}

fn list(args: &ParsedArgs) -> anyhow::Result<bool> {
    let names: Vec<&str> = args.in_file_names.iter().map(String::as_str).collect();
    let failed = display_compressed_files_info(&names).context("cannot list files")?;
    Ok(failed == 0)
}

fn run_single(args: &ParsedArgs) -> anyhow::Result<bool> {
    let input = args.input_filename.as_deref().unwrap_or(STDIN_MARK);
    let mode = resolve_mode(args.op_mode, input);

    if input == STDIN_MARK && std::io::stdin().is_terminal() {
        bail!("refusing to read from a console");
    }

    let output = match (&args.output_filename, mode) {
        (_, OpMode::Test) => NUL_MARK.to_owned(),
        (Some(out), _) => out.clone(),
        (None, _) if input == STDIN_MARK => STDOUT_MARK.to_owned(),
        (None, OpMode::Decompress) => decompressed_name(input, &args.prefs)?,
        (None, _) => compressed_name(input, &args.prefs),
    };

    if output == STDOUT_MARK && mode == OpMode::Compress && std::io::stdout().is_terminal() {
        bail!("refusing to write compressed data to a console; use -c with a redirect");
    }
    if let Some(dir) = &args.prefs.output_dir {
        if args.output_filename.is_none() && mode != OpMode::Test {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create directory {}", dir.display()))?;
        }
    }

    match mode {
        OpMode::Decompress | OpMode::Test => {
            decompress_filename(input, &output, &args.prefs)
                .with_context(|| format!("cannot decompress {}", input))?;
        }
        _ => {
            compress_filename(input, &output, &args.prefs)
                .with_context(|| format!("cannot compress {}", input))?;
        }
    }
    Ok(true)
}

fn run_multiple(args: &ParsedArgs) -> anyhow::Result<bool> {
    let first = args.in_file_names.first().map(String::as_str).unwrap_or_default();
    let mode = resolve_mode(args.op_mode, first);
    let decoding = matches!(mode, OpMode::Decompress | OpMode::Test);

    let paths: Vec<&Path> = args.in_file_names.iter().map(Path::new).collect();
    let suffix = if decoding { Some(LZP2_EXTENSION) } else { None };
    let files = create_file_list(&paths, suffix).context("cannot expand input list")?;
    if display_level() >= 4 {
        for (u, p) in files.iter().enumerate() {
            lzp2::displaylevel!(4, "{} {}\n", u, p.display());
        }
    }
    let names: Vec<String> = files.iter().map(|p| p.to_string_lossy().into_owned()).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();

    let summary: BatchSummary = if decoding {
        decompress_multiple_filenames(&names, args.to_stdout, &args.prefs)?
    } else {
        compress_multiple_filenames(&names, args.to_stdout, &args.prefs)?
    };
    if summary.failed > 0 {
        lzp2::displaylevel!(1, "lzp2: {} of {} files failed\n", summary.failed, names.len());
    }
    Ok(summary.is_success())
}

// ── Entry point ──────────────────────────────────────────────────────────────

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("lzp2: {:#}", e);
            std::process::exit(1);
        }
    };
    std::process::exit(run(args));
}
