//! E2E suite: file-level API
//!
//! Drives `lzp2::io` the way the CLI does: expand inputs, compress a batch,
//! list it, test it, then decompress into a separate directory and compare
//! against the originals.

use std::fs;
use std::path::{Path, PathBuf};

use lzp2::cli::constants::set_display_level;
use lzp2::io::{
    compress_filename, compress_multiple_filenames, decompress_filename, decompress_multiple_filenames,
    display_compressed_files_info, get_compressed_file_info, Prefs, NUL_MARK,
};
use lzp2::util::create_file_list;
use lzp2::Strategy;
use tempfile::TempDir;

fn sample(i: usize) -> Vec<u8> {
    let mut v = format!("sample file {i}\n").repeat(50 + i * 10).into_bytes();
    v.extend(std::iter::repeat(i as u8).take(300 * i));
    v
}

/// Source tree: `src/f0.bin`, `src/nested/f1.bin`, ... with known contents.
fn make_tree(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let src = root.join("src");
    fs::create_dir_all(src.join("nested")).unwrap();
    (0..4)
        .map(|i| {
            let path = if i % 2 == 0 { src.join(format!("f{i}.bin")) } else { src.join(format!("nested/f{i}.bin")) };
            let data = sample(i);
            fs::write(&path, &data).unwrap();
            (path, data)
        })
        .collect()
}

fn as_strs(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.to_string_lossy().into_owned()).collect()
}

#[test]
fn directory_batch_round_trip() {
    set_display_level(0);
    let dir = TempDir::new().unwrap();
    let files = make_tree(dir.path());

    // compress next to the sources
    let inputs = create_file_list(&[dir.path().join("src").as_path()], None).unwrap();
    assert_eq!(inputs.len(), files.len());
    let names = as_strs(&inputs);
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let summary = compress_multiple_filenames(&refs, false, &Prefs::default()).unwrap();
    assert_eq!(summary.processed, files.len());
    assert!(summary.bytes_out < summary.bytes_in);

    // only the containers are picked up for decoding
    let containers = create_file_list(&[dir.path().join("src").as_path()], Some(".lzp2")).unwrap();
    assert_eq!(containers.len(), files.len());
    let names = as_strs(&containers);
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();

    assert_eq!(display_compressed_files_info(&refs).unwrap(), 0);

    let mut test_prefs = Prefs::default();
    test_prefs.set_test_mode(true);
    assert!(decompress_multiple_filenames(&refs, false, &test_prefs).unwrap().is_success());

    let out = dir.path().join("restored");
    let mut prefs = Prefs::default();
    prefs.set_output_dir(Some(out.as_path()));
    let summary = decompress_multiple_filenames(&refs, false, &prefs).unwrap();
    assert!(summary.is_success());

    for (path, data) in &files {
        let restored = out.join(path.file_name().unwrap());
        assert_eq!(&fs::read(&restored).unwrap(), data, "{}", restored.display());
    }
}

#[test]
fn strategies_produce_interchangeable_files() {
    set_display_level(0);
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("input");
    let data = sample(3);
    fs::write(&src, &data).unwrap();

    for strategy in [Strategy::HashChain, Strategy::WindowScan] {
        let mut prefs = Prefs::default();
        prefs.set_strategy(strategy);
        prefs.set_overwrite(true);
        let packed = dir.path().join(format!("{strategy}.lzp2"));
        let unpacked = dir.path().join(format!("{strategy}.out"));
        compress_filename(src.to_str().unwrap(), packed.to_str().unwrap(), &prefs).unwrap();
        // decoding never depends on how the container was produced
        decompress_filename(packed.to_str().unwrap(), unpacked.to_str().unwrap(), &Prefs::default()).unwrap();
        assert_eq!(fs::read(&unpacked).unwrap(), data, "{strategy}");

        let info = get_compressed_file_info(packed.to_str().unwrap()).unwrap();
        assert_eq!(info.header.original_size as usize, data.len());
    }
}

#[test]
fn decompress_to_null_device_writes_nothing() {
    set_display_level(0);
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("x.lzp2");
    fs::write(&src, lzp2::compress(b"discard")).unwrap();
    let stats = decompress_filename(src.to_str().unwrap(), NUL_MARK, &Prefs::default()).unwrap();
    assert_eq!(stats.decompressed_bytes, 7);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
