// Integration tests for src/io/prefs.rs — file-layer preferences

use std::path::Path;

use lzp2::io::Prefs;
use lzp2::Strategy;

#[test]
fn default_equals_new() {
    let a = Prefs::default();
    let b = Prefs::new();
    assert_eq!(a.overwrite, b.overwrite);
    assert_eq!(a.strategy, b.strategy);
    assert_eq!(a.output_dir, b.output_dir);
}

#[test]
fn clone_is_independent() {
    let mut a = Prefs::new();
    a.set_output_dir(Some(Path::new("first")));
    let mut b = a.clone();
    b.set_output_dir(Some(Path::new("second")));
    b.set_strategy(Strategy::WindowScan);
    assert_eq!(a.output_dir.as_deref(), Some(Path::new("first")));
    assert_eq!(a.strategy, Strategy::HashChain);
}
