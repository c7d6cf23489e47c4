//! Input list construction with recursive directory expansion.
//!
//! [`create_file_list`] turns the positional arguments of a batch run into a
//! flat list of files. Directories are walked with [`walkdir`] in file-name
//! order so batch output is reproducible; symlinks inside a walked directory
//! are neither followed nor listed.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Expand a mixed list of file and directory paths into a flat list of files.
///
/// - Non-directory inputs are forwarded unchanged, whatever their name; a
///   missing file is reported later when it is opened.
/// - Directories are walked recursively. When `suffix` is `Some`, only files
///   whose name ends with it are collected from the walk.
/// - An unreadable directory entry aborts the walk with its `io::Error`.
pub fn create_file_list(inputs: &[&Path], suffix: Option<&str>) -> io::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            result.push(input.to_path_buf());
            continue;
        }
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                e.io_error()
                    .map(|io| io::Error::new(io.kind(), io.to_string()))
                    .unwrap_or_else(|| io::Error::other(e.to_string()))
            })?;
            if entry.file_type().is_file() && has_suffix(entry.file_name(), suffix) {
                result.push(entry.into_path());
            }
        }
    }
    Ok(result)
}

fn has_suffix(name: &OsStr, suffix: Option<&str>) -> bool {
    match suffix {
        None => true,
        Some(s) => name.to_string_lossy().ends_with(s),
    }
}
