//! Tests for CLI argument handling against the built binary.
//!
//! Every case here fails before the terminal is touched.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn counterview_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_counterview"))
}

#[test]
fn test_help_lists_options() {
    let output = counterview_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--tick-rate-ms"));
    assert!(stdout.contains("--log-level"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_version_flag() {
    let output = counterview_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_zero_tick_rate_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = counterview_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .arg("--tick-rate-ms")
        .arg("0")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("tick_rate_ms"));
}

#[test]
fn test_broken_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "not = [valid").unwrap();

    let output = counterview_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}

#[test]
fn test_non_numeric_tick_rate_is_rejected_by_parser() {
    let output = counterview_cmd()
        .arg("--tick-rate-ms")
        .arg("fast")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_tick_rate_flag_overrides_invalid_file_value() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    // A directory as log file makes startup stop right after validation,
    // before the terminal is set up.
    let output = counterview_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--tick-rate-ms")
        .arg("50")
        .arg("--log-file")
        .arg(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("tick_rate_ms"), "override ignored: {stderr}");
    assert!(!stderr.contains("Failed to load configuration"));
    assert!(stderr.contains("failed to open log file"));
}
