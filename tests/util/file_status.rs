// Integration tests for src/util/file_status.rs — metadata propagation

use std::fs;

use filetime::FileTime;
use lzp2::util::{copy_file_stat, set_file_stat};
use tempfile::TempDir;

#[test]
fn copy_from_missing_source_fails() {
    let dir = TempDir::new().unwrap();
    let dst = dir.path().join("dst");
    fs::write(&dst, b"x").unwrap();
    assert!(copy_file_stat(&dir.path().join("missing"), &dst).is_err());
}

#[test]
fn set_file_stat_applies_mtime() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("f");
    fs::write(&path, b"x").unwrap();
    let stamp = FileTime::from_unix_time(1_500_000_000, 0);
    let (uid, gid) = current_owner(&path);
    set_file_stat(&path, stamp, uid, gid, 0o644).unwrap();
    let got = FileTime::from_last_modification_time(&fs::metadata(&path).unwrap());
    assert_eq!(got, stamp);
}

#[cfg(unix)]
#[test]
fn permission_bits_are_copied() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let dst = dir.path().join("dst");
    fs::write(&src, b"a").unwrap();
    fs::write(&dst, b"b").unwrap();
    fs::set_permissions(&src, fs::Permissions::from_mode(0o640)).unwrap();

    copy_file_stat(&src, &dst).unwrap();
    assert_eq!(fs::metadata(&dst).unwrap().permissions().mode() & 0o777, 0o640);
}

#[cfg(unix)]
fn current_owner(path: &std::path::Path) -> (u32, u32) {
    use std::os::unix::fs::MetadataExt;
    let m = fs::metadata(path).unwrap();
    (m.uid(), m.gid())
}

#[cfg(not(unix))]
fn current_owner(_path: &std::path::Path) -> (u32, u32) {
    (0, 0)
}
