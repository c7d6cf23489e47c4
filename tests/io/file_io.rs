// Integration tests for src/io/file_io.rs — source/destination primitives

use std::fs;
use std::io::{ErrorKind, Write};

use lzp2::io::file_io::{open_dst_file, open_src_file, read_src_file, write_dst_file};
use lzp2::io::{Prefs, NUL_MARK, STDIN_MARK, STDOUT_MARK};
use tempfile::TempDir;

#[test]
fn sentinels() {
    assert_eq!(STDIN_MARK, "stdin");
    assert_eq!(STDOUT_MARK, "stdout");
    assert!(!NUL_MARK.is_empty());
}

#[test]
fn null_device_swallows_writes() {
    let mut dst = open_dst_file(NUL_MARK, &Prefs::default()).unwrap();
    dst.write_all(&[1u8; 4096]).unwrap();
    dst.flush().unwrap();
}

#[test]
fn written_file_reads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.bin");
    let p = path.to_str().unwrap();
    write_dst_file(p, b"contents", &Prefs::default()).unwrap();
    assert_eq!(read_src_file(p).unwrap(), b"contents");
    assert_eq!(fs::read(&path).unwrap(), b"contents");
}

#[test]
fn overwrite_truncates_longer_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.bin");
    fs::write(&path, vec![9u8; 100]).unwrap();
    let mut prefs = Prefs::default();
    prefs.set_overwrite(true);
    write_dst_file(path.to_str().unwrap(), b"xy", &prefs).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"xy");
}

#[test]
fn missing_parent_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no/such/dir/out");
    let err = open_dst_file(path.to_str().unwrap(), &Prefs::default()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn directory_source_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = open_src_file(dir.path().to_str().unwrap()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
