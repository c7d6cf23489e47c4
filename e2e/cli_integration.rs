// e2e/cli_integration.rs — CLI integration tests
//
// Runs the `lzp2` binary as a black box with std::process::Command.
// Covers:
//   - compress / decompress dispatch, by flag and by suffix
//   - stdin / stdout streaming
//   - overwrite policy, --rm, -o
//   - test and list modes
//   - exit codes for usage errors and corrupt input

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn lzp2_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lzp2"))
}

/// Run `lzp2` with `args` in `dir`, stdin closed.
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(lzp2_bin())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run lzp2")
}

/// Run `lzp2` with `input` piped to stdin.
fn run_piped(dir: &Path, args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(lzp2_bin())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn lzp2");
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

fn make_input(dir: &Path, name: &str) -> Vec<u8> {
    let data = "Hello, LZP2!\n".repeat(300).into_bytes();
    fs::write(dir.join(name), &data).unwrap();
    data
}

// ── 1. Round trip by suffix ──────────────────────────────────────────────────

#[test]
fn compress_then_decompress_by_suffix() {
    let dir = TempDir::new().unwrap();
    let data = make_input(dir.path(), "tex.tm2");

    let out = run(dir.path(), &["tex.tm2"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let container = fs::read(dir.path().join("tex.tm2.lzp2")).unwrap();
    assert_eq!(&container[..4], b"LZP2");

    fs::remove_file(dir.path().join("tex.tm2")).unwrap();
    let out = run(dir.path(), &["tex.tm2.lzp2"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.path().join("tex.tm2")).unwrap(), data);
    // source kept by default
    assert!(dir.path().join("tex.tm2.lzp2").exists());
}

#[test]
fn explicit_output_names() {
    let dir = TempDir::new().unwrap();
    let data = make_input(dir.path(), "in");

    assert!(run(dir.path(), &["-z", "in", "packed"]).status.success());
    assert!(run(dir.path(), &["-d", "packed", "unpacked"]).status.success());
    assert_eq!(fs::read(dir.path().join("unpacked")).unwrap(), data);
}

// ── 2. Streams ───────────────────────────────────────────────────────────────

#[test]
fn stdin_to_stdout_round_trip() {
    let dir = TempDir::new().unwrap();
    let data: Vec<u8> = (0..10_000u32).map(|i| (i % 97) as u8).collect();

    let packed = run_piped(dir.path(), &["-z", "-c"], &data);
    assert!(packed.status.success());
    assert_eq!(packed.stdout.len() % 16, 0);

    let unpacked = run_piped(dir.path(), &["-d", "-c"], &packed.stdout);
    assert!(unpacked.status.success());
    assert_eq!(unpacked.stdout, data);
}

#[test]
fn dash_names_standard_streams() {
    let dir = TempDir::new().unwrap();
    let packed = run_piped(dir.path(), &["-z", "-", "-"], b"dash");
    assert!(packed.status.success());
    assert_eq!(lzp2::decompress(&packed.stdout).unwrap(), b"dash");
}

// ── 3. Overwrite, --rm, -o ───────────────────────────────────────────────────

#[test]
fn existing_output_needs_force() {
    let dir = TempDir::new().unwrap();
    make_input(dir.path(), "a");
    fs::write(dir.path().join("a.lzp2"), b"old").unwrap();

    let out = run(dir.path(), &["a"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read(dir.path().join("a.lzp2")).unwrap(), b"old");

    assert!(run(dir.path(), &["-f", "a"]).status.success());
    assert_ne!(fs::read(dir.path().join("a.lzp2")).unwrap(), b"old");
}

#[test]
fn rm_removes_source() {
    let dir = TempDir::new().unwrap();
    make_input(dir.path(), "gone");
    assert!(run(dir.path(), &["--rm", "gone"]).status.success());
    assert!(!dir.path().join("gone").exists());
    assert!(dir.path().join("gone.lzp2").exists());
}

#[test]
fn multiple_inputs_into_output_dir() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("in")).unwrap();
    let a = make_input(&dir.path().join("in"), "a.tm2");
    make_input(&dir.path().join("in"), "b.tm2");

    let out = run(dir.path(), &["-m", "-o", "packed", "in"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(dir.path().join("packed/a.tm2.lzp2").is_file());
    assert!(dir.path().join("packed/b.tm2.lzp2").is_file());

    let out = run(dir.path(), &["-d", "-m", "-o", "restored", "packed"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.path().join("restored/a.tm2")).unwrap(), a);
}

// ── 4. Test and list ─────────────────────────────────────────────────────────

#[test]
fn test_mode_accepts_good_and_rejects_corrupt() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("good.lzp2"), lzp2::compress(b"good data")).unwrap();
    let mut bad = lzp2::compress(b"bad data");
    bad[0] = 0;
    fs::write(dir.path().join("bad.lzp2"), bad).unwrap();

    assert!(run(dir.path(), &["-t", "good.lzp2"]).status.success());
    assert!(!dir.path().join("good").exists());

    let out = run(dir.path(), &["-t", "bad.lzp2"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("bad magic"));
}

#[test]
fn list_prints_one_row_per_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("x.lzp2"), lzp2::compress(&[7u8; 4096])).unwrap();
    fs::write(dir.path().join("y.lzp2"), lzp2::compress(b"")).unwrap();

    let out = run(dir.path(), &["-l", "x.lzp2", "y.lzp2"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "{stdout}");
    assert!(lines[0].contains("Uncompressed"));
    assert!(lines[1].ends_with("x.lzp2") && lines[1].contains("4.00 KiB"));
    assert!(lines[2].ends_with("y.lzp2"));
}

// ── 5. Usage and failures ────────────────────────────────────────────────────

#[test]
fn version_and_help() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--version"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(env!("CARGO_PKG_VERSION")));

    let out = run(dir.path(), &["--help"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).to_lowercase().contains("usage"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--frobnicate"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn too_many_files_fails() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["a", "b", "c"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["does-not-exist"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("does-not-exist"));
}

#[test]
fn decompressing_unknown_suffix_fails() {
    let dir = TempDir::new().unwrap();
    make_input(dir.path(), "plain.txt");
    let out = run(dir.path(), &["-d", "plain.txt"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn quiet_suppresses_diagnostics() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["-qq", "does-not-exist"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stderr.is_empty());
}
