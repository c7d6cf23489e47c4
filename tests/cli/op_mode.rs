// Integration tests for src/cli/op_mode.rs — mode inference and strategy defaults

use lzp2::cli::op_mode::{determine_op_mode, init_strategy_from, OpMode};
use lzp2::config::STRATEGY_DEFAULT;
use lzp2::Strategy;

#[test]
fn default_mode_is_auto() {
    assert_eq!(OpMode::default(), OpMode::Auto);
}

#[test]
fn only_exact_suffix_decompresses() {
    assert_eq!(determine_op_mode("dir.lzp2/file"), OpMode::Compress);
    assert_eq!(determine_op_mode("file.LZP2"), OpMode::Compress);
    assert_eq!(determine_op_mode("dir/file.lzp2"), OpMode::Decompress);
}

#[test]
fn strategy_aliases() {
    for name in ["hash-chain", "hashchain", "fast"] {
        assert_eq!(init_strategy_from(Some(name)), Strategy::HashChain, "{name}");
    }
    for name in ["window-scan", "windowscan", "exhaustive"] {
        assert_eq!(init_strategy_from(Some(name)), Strategy::WindowScan, "{name}");
    }
}

#[test]
fn empty_value_falls_back() {
    lzp2::cli::constants::set_display_level(0);
    assert_eq!(init_strategy_from(Some("")), STRATEGY_DEFAULT);
    assert_eq!(init_strategy_from(Some("   ")), STRATEGY_DEFAULT);
}
