//! CLI interface end-to-end tests: invoke the built `sharpcc` binary
//! against fixture files on disk and assert on its exit code and output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("e2e")
        .join("fixtures")
}

fn sharpcc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sharpcc"))
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(sharpcc_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage").or(predicate::str::contains("sharpcc")));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(sharpcc_bin());
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sharpcc").or(predicate::str::contains("0.")));
}

#[test]
fn test_cli_lexes_clean_file_successfully() {
    let mut cmd = Command::new(sharpcc_bin());
    cmd.arg(fixtures_dir().join("hello.cs"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ok:"));
}

#[test]
fn test_cli_verbose_prints_token_stream() {
    let mut cmd = Command::new(sharpcc_bin());
    cmd.arg("--verbose").arg(fixtures_dir().join("hello.cs"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Keyword").or(predicate::str::contains("Identifier")));
}

#[test]
fn test_cli_exits_nonzero_on_lex_error() {
    let mut cmd = Command::new(sharpcc_bin());
    cmd.arg(fixtures_dir().join("broken.cs"));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_cli_walks_directory_for_cs_files() {
    let mut cmd = Command::new(sharpcc_bin());
    cmd.arg(fixtures_dir());

    // the fixtures directory contains both a clean file and a broken one,
    // so the whole-directory run must fail on the broken one.
    cmd.assert().failure();
}

#[test]
fn test_cli_reports_no_matching_files() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");

    let mut cmd = Command::new(sharpcc_bin());
    cmd.arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no .cs source files"));
}
