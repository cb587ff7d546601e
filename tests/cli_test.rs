//! Command line front end tests.
//!
//! Run: cargo test --test cli_test

#![cfg(feature = "cli")]
#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    // Pin the config so a user file cannot change the output.
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "grid:\n  margin: 0").unwrap();

    Command::new(env!("CARGO_BIN_EXE_lattice-raster"))
        .args(args)
        .arg("--config")
        .arg(config.path())
        .output()
        .unwrap()
}

#[test]
fn test_line_grid() {
    let out = run(&["line", "0", "0", "2", "1", "--format", "grid"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), ". # E\nS . .\n");
}

#[test]
fn test_line_negative_coordinates() {
    let out = run(&["line", "-2", "-1", "0", "0", "--format", "table"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 2 + 3);
}

#[test]
fn test_circle_both_formats() {
    let out = run(&["circle", "1"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with(". # .\n# O #\n. # .\n\n"));
    assert!(stdout.contains("p_k"));
}

#[test]
fn test_circle_rejects_zero_radius() {
    let out = run(&["circle", "0"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("positive integer"), "{stderr}");
}

#[test]
fn test_line_rejects_fractional_coordinate() {
    let out = run(&["line", "0", "0", "2.5", "1"]);
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr).unwrap().contains("not an integer"));
}

#[test]
fn test_animate_reveals_one_point_per_frame() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "grid:\n  margin: 0\nplayback:\n  line_step_ms: 0").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_lattice-raster"))
        .args(["line", "0", "0", "2", "0", "--format", "grid", "--animate", "--config"])
        .arg(config.path())
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let clear = "\x1b[2J\x1b[H";
    assert!(stdout.starts_with(clear));
    let frames: Vec<&str> = stdout.split(clear).skip(1).collect();
    assert_eq!(frames, vec!["S . E\n", "S # E\n", "S # E\n"]);
}

#[test]
fn test_malformed_config_is_reported() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "grid:\n  margin: wide").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_lattice-raster"))
        .args(["circle", "1", "--format", "grid", "--config"])
        .arg(config.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8(out.stderr).unwrap().contains("configuration error"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_malformed_default_config_is_reported() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("lattice-raster");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yaml"), "grid:\n  margin: wide\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_lattice-raster"))
        .args(["circle", "1", "--format", "grid"])
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr).unwrap().contains("configuration error"));
}
