//! Shared utilities for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A complete, valid TOML source that differs from the defaults in every field.
pub const CUSTOM_TOML: &str = r#"
dpi = 300
dotsize = 20.0
title = "FLINT vs NTL multiplication"
tolerance = 10.0
xscale = "log10"
yscale = "none"
xlabel = "Degree"
ylabel = ""
truncate = 8.0
min_intensity = 0.5
"#;

/// Write `content` to `name` inside a fresh temporary directory.
///
/// The directory lives as long as the returned guard.
pub fn write_config(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Path to the default configuration file shipped with the crate.
#[allow(dead_code)]
pub fn shipped_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/compare2d.toml")
}
