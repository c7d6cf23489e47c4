// Integration tests for src/util/file_list.rs — batch input expansion

use std::fs;
use std::path::{Path, PathBuf};

use lzp2::util::create_file_list;
use tempfile::TempDir;

#[test]
fn files_pass_through_in_argument_order() {
    let list = create_file_list(&[Path::new("z"), Path::new("a"), Path::new("m")], None).unwrap();
    assert_eq!(list, vec![PathBuf::from("z"), PathBuf::from("a"), PathBuf::from("m")]);
}

#[test]
fn missing_paths_are_kept_for_later_reporting() {
    let list = create_file_list(&[Path::new("/no/such/file.lzp2")], Some(".lzp2")).unwrap();
    assert_eq!(list.len(), 1);
}

#[test]
fn nested_directories_are_walked() {
    let dir = TempDir::new().unwrap();
    let deep = dir.path().join("a/b/c");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("x.lzp2"), b"").unwrap();
    fs::write(dir.path().join("a/y.lzp2"), b"").unwrap();
    fs::write(dir.path().join("a/skip.txt"), b"").unwrap();

    let list = create_file_list(&[dir.path()], Some(".lzp2")).unwrap();
    assert_eq!(list, vec![dir.path().join("a/b/c/x.lzp2"), dir.path().join("a/y.lzp2")]);
}

#[test]
fn empty_directory_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    assert!(create_file_list(&[dir.path()], None).unwrap().is_empty());
}
