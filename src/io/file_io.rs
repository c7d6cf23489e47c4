//! Sources and destinations for the file layer.
//!
//! Paths are plain strings so the `"stdin"` / `"stdout"` sentinels and the
//! null device can travel through the same code as ordinary file names.
//! Containers record their original size up front, so callers read a whole
//! source with [`read_src_file`] and write a whole result with
//! [`write_dst_file`]; nothing here streams.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};
use std::path::Path;

use crate::io::prefs::Prefs;
use crate::util::is_directory;

// ── Sentinels ────────────────────────────────────────────────────────────────

/// Input name meaning standard input.
pub const STDIN_MARK: &str = "stdin";

/// Output name meaning standard output.
pub const STDOUT_MARK: &str = "stdout";

/// Output name whose writes are discarded (test mode).
#[cfg(windows)]
pub const NUL_MARK: &str = "nul";
#[cfg(not(windows))]
pub const NUL_MARK: &str = "/dev/null";

#[inline]
pub(crate) fn is_stdin(name: &str) -> bool {
    name == STDIN_MARK
}

#[inline]
pub(crate) fn is_stdout(name: &str) -> bool {
    name == STDOUT_MARK
}

#[inline]
pub(crate) fn is_dev_null(name: &str) -> bool {
    name == NUL_MARK
}

/// Attach `name` to an I/O error so the CLI can report which file failed.
fn with_name(name: &str, e: io::Error) -> io::Error {
    io::Error::new(e.kind(), format!("{}: {}", name, e))
}

// ── Sources ──────────────────────────────────────────────────────────────────

/// Open `name` for reading.
///
/// Directories are refused with [`io::ErrorKind::InvalidInput`].
pub fn open_src_file(name: &str) -> io::Result<Box<dyn Read>> {
    if is_stdin(name) {
        crate::displaylevel!(4, "Using stdin for input\n");
        return Ok(Box::new(io::stdin().lock()));
    }
    if is_directory(Path::new(name)) {
        crate::displaylevel!(1, "lzp2: {} is a directory -- ignored\n", name);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("{}: is a directory", name)));
    }
    let file = File::open(name).map_err(|e| with_name(name, e))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Read all of `name` into memory.
pub fn read_src_file(name: &str) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    open_src_file(name)?
        .read_to_end(&mut data)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: read error: {}", name, e)))?;
    Ok(data)
}

// ── Destinations ─────────────────────────────────────────────────────────────

/// Where [`open_dst_file`] sends output.
pub enum Destination {
    Stdout(io::Stdout),
    Discard,
    File(BufWriter<File>),
}

impl Destination {
    pub fn is_stdout(&self) -> bool {
        matches!(self, Destination::Stdout(_))
    }
}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Destination::Stdout(out) => out.write(buf),
            Destination::Discard => Ok(buf.len()),
            Destination::File(f) => f.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Destination::Stdout(out) => out.flush(),
            Destination::Discard => Ok(()),
            Destination::File(f) => f.flush(),
        }
    }
}

/// Whether a prompt can be answered: display level above 1 and a terminal
/// on stdin.
fn can_prompt() -> bool {
    crate::cli::constants::display_level() > 1 && io::stdin().is_terminal()
}

/// Decide whether the existing file `name` may be replaced.
///
/// Without `ask` this refuses outright. Otherwise the user is asked on the
/// terminal, and anything but an answer starting with `y` refuses.
fn confirm_overwrite(name: &str, ask: bool) -> io::Result<()> {
    let refused = |why: &str| io::Error::new(io::ErrorKind::AlreadyExists, format!("{}: {}", name, why));

    if !ask {
        return Err(refused("already exists; not overwritten"));
    }
    crate::display!("{} already exists; overwrite (y/N) ? ", name);
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    if answer.trim_start().starts_with(|c: char| c == 'y' || c == 'Y') {
        Ok(())
    } else {
        crate::display!("    not overwritten\n");
        Err(refused("not overwritten"))
    }
}

/// Open `name` for writing.
///
/// The stdout and null-device sentinels never touch the filesystem. An
/// existing file is replaced only with `prefs.overwrite` or after the user
/// agrees; otherwise the result is [`io::ErrorKind::AlreadyExists`].
pub fn open_dst_file(name: &str, prefs: &Prefs) -> io::Result<Destination> {
    if is_stdout(name) {
        crate::displaylevel!(4, "Using stdout for output\n");
        return Ok(Destination::Stdout(io::stdout()));
    }
    if is_dev_null(name) {
        return Ok(Destination::Discard);
    }
    if !prefs.overwrite && Path::new(name).exists() {
        confirm_overwrite(name, can_prompt())?;
    }
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(name)
        .map_err(|e| with_name(name, e))?;
    Ok(Destination::File(BufWriter::new(file)))
}

/// Write all of `data` to `name` and flush.
pub fn write_dst_file(name: &str, data: &[u8], prefs: &Prefs) -> io::Result<()> {
    let mut dst = open_dst_file(name, prefs)?;
    dst.write_all(data)
        .and_then(|()| dst.flush())
        .map_err(|e| io::Error::new(e.kind(), format!("{}: write error: {}", name, e)))
}
