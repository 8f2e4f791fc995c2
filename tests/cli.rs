//! Command-line behaviour of the compare2d binary.

use std::process::{Command, Output};

use compare2d::config::{parse_config, SourceFormat};
use compare2d::PlotConfig;

mod common;

fn compare2d(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_compare2d"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_print_json_defaults() {
    let output = compare2d(&["--print", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let config = parse_config(&stdout, SourceFormat::Json).unwrap();
    assert_eq!(config, PlotConfig::default());
}

#[test]
fn test_print_toml_defaults() {
    let output = compare2d(&["--print", "toml"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let config = parse_config(&stdout, SourceFormat::Toml).unwrap();
    assert_eq!(config, PlotConfig::default());
}

#[test]
fn test_incomplete_config_fails() {
    let (_dir, path) = common::write_config("bad.toml", "dpi = 1\n");
    let output = compare2d(&["-c", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing field"), "stderr was: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_custom_config_accepted() {
    let (_dir, path) = common::write_config("custom.toml", common::CUSTOM_TOML);
    let output = compare2d(&["-c", path.to_str().unwrap(), "--print", "toml"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let config = parse_config(&stdout, SourceFormat::Toml).unwrap();
    assert_eq!(config.dpi, 300);
    assert_eq!(config.ylabel, None);
}

#[test]
fn test_bad_log_level_rejected() {
    let output = compare2d(&["--log-level", "bogus"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--log-level"), "stderr was: {}", stderr);
}

#[test]
fn test_log_level_accepts_names() {
    for level in ["trace", "debug", "info", "warn", "error"] {
        let output = compare2d(&["--log-level", level]);
        assert!(output.status.success(), "level {} rejected", level);
    }
}
