// Integration tests for src/io/compress_file.rs — file compression
//
// Covers single-file compression, metadata propagation, batch runs with
// failures and output directories, and the stats returned to callers.

use std::fs;
use std::path::Path;

use filetime::FileTime;
use lzp2::cli::constants::set_display_level;
use lzp2::io::{compress_filename, compress_multiple_filenames, compressed_name, Prefs};
use lzp2::{decompress, ContainerHeader};
use tempfile::TempDir;

fn quiet() {
    set_display_level(0);
}

#[test]
fn stats_match_container_on_disk() {
    quiet();
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("tex.tm2");
    let data: Vec<u8> = b"TIM2".iter().copied().chain((0..4000u32).map(|i| (i / 7) as u8)).collect();
    fs::write(&src, &data).unwrap();
    let dst = dir.path().join("tex.tm2.lzp2");

    let stats = compress_filename(src.to_str().unwrap(), dst.to_str().unwrap(), &Prefs::default()).unwrap();
    let on_disk = fs::read(&dst).unwrap();
    assert_eq!(stats.bytes_out as usize, on_disk.len());
    assert!(stats.ratio_percent() < 100.0);
    let header = ContainerHeader::parse(&on_disk).unwrap();
    assert_eq!(header.original_size as usize, data.len());
    assert_eq!(decompress(&on_disk).unwrap(), data);
}

#[test]
fn mtime_is_copied_to_output() {
    quiet();
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("old.bin");
    fs::write(&src, b"dated").unwrap();
    let stamp = FileTime::from_unix_time(1_234_567_890, 0);
    filetime::set_file_mtime(&src, stamp).unwrap();
    let dst = dir.path().join("old.bin.lzp2");

    compress_filename(src.to_str().unwrap(), dst.to_str().unwrap(), &Prefs::default()).unwrap();
    let got = FileTime::from_last_modification_time(&fs::metadata(&dst).unwrap());
    assert_eq!(got, stamp);
}

#[test]
fn existing_output_is_not_overwritten_by_default() {
    quiet();
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("a");
    let dst = dir.path().join("a.lzp2");
    fs::write(&src, b"new data").unwrap();
    fs::write(&dst, b"keep me").unwrap();

    assert!(compress_filename(src.to_str().unwrap(), dst.to_str().unwrap(), &Prefs::default()).is_err());
    assert_eq!(fs::read(&dst).unwrap(), b"keep me");
}

#[test]
fn empty_file_gives_header_only_container() {
    quiet();
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("empty");
    fs::write(&src, b"").unwrap();
    let dst = compressed_name(src.to_str().unwrap(), &Prefs::default());

    let stats = compress_filename(src.to_str().unwrap(), &dst, &Prefs::default()).unwrap();
    assert_eq!(stats.bytes_in, 0);
    assert_eq!(stats.bytes_out, 16);
    assert_eq!(fs::read(&dst).unwrap().len(), 16);
}

#[test]
fn batch_with_output_dir_names_by_file_name() {
    quiet();
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("in")).unwrap();
    let a = dir.path().join("in/a.tm2");
    let b = dir.path().join("in/b.tm2");
    fs::write(&a, vec![1u8; 300]).unwrap();
    fs::write(&b, vec![2u8; 300]).unwrap();
    let out = dir.path().join("out");
    let mut prefs = Prefs::default();
    prefs.set_output_dir(Some(out.as_path()));

    let summary =
        compress_multiple_filenames(&[a.to_str().unwrap(), b.to_str().unwrap()], false, &prefs).unwrap();
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.bytes_in, 600);
    assert!(summary.is_success());
    for name in ["a.tm2.lzp2", "b.tm2.lzp2"] {
        assert!(Path::new(&out).join(name).is_file(), "{name}");
    }
}

#[test]
fn batch_continues_after_failure() {
    quiet();
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good");
    fs::write(&good, b"fine").unwrap();
    let subdir = dir.path().join("subdir");
    fs::create_dir(&subdir).unwrap();

    let summary =
        compress_multiple_filenames(&[subdir.to_str().unwrap(), good.to_str().unwrap()], false, &Prefs::default())
            .unwrap();
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.processed, 1);
    assert!(dir.path().join("good.lzp2").is_file());
}
