//! `fnplot` binary tests.
//!
//! Run: cargo test --test cli_test

#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output};

fn fnplot(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fnplot"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("fnplot should launch")
}

#[test]
fn cosine_prints_requested_grid() {
    let out = fnplot(&["cosine", "--scale", "3.14159265", "--width", "6", "--height", "3"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).expect("utf-8 output");
    assert_eq!(stdout, "* * * \n      \n * * *\n");
}

#[test]
fn poly_with_negative_shift_and_symbol() {
    let out = fnplot(&[
        "poly", "--coeffs", "0,1", "--shift", "-2", "--width", "4", "--height", "4",
        "--symbol", "o",
    ]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).expect("utf-8 output");
    assert_eq!(stdout, "   o\n  o \n o  \no   \n");
}

#[test]
fn poly_rejects_too_many_coefficients() {
    let out = fnplot(&["poly", "--coeffs", "1,2,3,4,5"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8(out.stderr).expect("utf-8 output");
    assert!(stderr.contains("Error:"));
}

#[test]
fn zero_height_is_an_error() {
    let out = fnplot(&["cosine", "--height", "0"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn demo_prints_both_plots() {
    let out = fnplot(&["demo"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).expect("utf-8 output");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2 * 61);
    assert_eq!(lines[0], "Cosine");
    assert_eq!(lines[61], "Cubic");
}

#[test]
fn config_file_sets_dimensions_and_title() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "width: 5\nheight: 2\ntitle: Flat").expect("write config");
    let path = file.path().to_str().expect("utf-8 path");

    let out = fnplot(&["poly", "--coeffs", "3", "--config", path]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).expect("utf-8 output");
    assert_eq!(stdout, "Flat\n     \n*****\n");
}

#[test]
fn cli_flags_override_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "width: 5\nheight: 2").expect("write config");
    let path = file.path().to_str().expect("utf-8 path");

    let out = fnplot(&["poly", "--coeffs", "3", "--config", path, "--width", "3"]);
    let stdout = String::from_utf8(out.stdout).expect("utf-8 output");
    assert_eq!(stdout, "   \n***\n");
}
