//! End-to-end tests for the cryptogram binary
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests
//!
//! Drives `repl` through stdin and `compute-logprobs` through temp files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// repl
// ============================================================================

#[test]
fn test_repl_substitute_and_quit() {
    let dir = TempDir::new().unwrap();
    let puzzle = write_file(&dir, "puzzle.txt", "GSV JFRXP YILDM ULC\n");

    let mut cmd = Command::cargo_bin("cryptogram").unwrap();
    cmd.arg("--no-color")
        .arg("repl")
        .arg(&puzzle)
        .write_stdin("s GSV THE\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Puzzle    : GSV JFRXP YILDM ULC"))
        .stdout(predicate::str::contains("Solution  : THE JFRXP YILDM ULC"))
        .stdout(predicate::str::contains("Quitting"));
}

#[test]
fn test_repl_reports_bad_command_and_continues() {
    let dir = TempDir::new().unwrap();
    let puzzle = write_file(&dir, "puzzle.txt", "AB");

    let mut cmd = Command::cargo_bin("cryptogram").unwrap();
    cmd.arg("--no-color")
        .arg("repl")
        .arg(&puzzle)
        .write_stdin("sub AB C\nsub A Z\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not the same length"))
        .stdout(predicate::str::contains("Solution  : ZB"));
}

#[test]
fn test_repl_export_json() {
    let dir = TempDir::new().unwrap();
    let puzzle = write_file(&dir, "puzzle.txt", "AB");

    let mut cmd = Command::cargo_bin("cryptogram").unwrap();
    cmd.arg("--no-color")
        .arg("repl")
        .arg(&puzzle)
        .write_stdin("s A Q\nx json\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"source":"A","target":"Q"}"#));
}

#[test]
fn test_repl_missing_puzzle_file() {
    let mut cmd = Command::cargo_bin("cryptogram").unwrap();
    cmd.arg("repl")
        .arg("/nonexistent/puzzle.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read puzzle"));
}

// ============================================================================
// compute-logprobs
// ============================================================================

#[test]
fn test_logprobs_sorted_text_output() {
    let dir = TempDir::new().unwrap();
    let corpus = write_file(&dir, "corpus.txt", "cd ab\n");

    let mut cmd = Command::cargo_bin("cryptogram").unwrap();
    cmd.arg("compute-logprobs")
        .arg(&corpus)
        .arg("-n")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^AB -0\.693147\d+\nCD -0\.693147\d+\n$").unwrap());
}

#[test]
fn test_logprobs_single_ngram() {
    let dir = TempDir::new().unwrap();
    let corpus = write_file(&dir, "corpus.txt", "AAAA");

    let mut cmd = Command::cargo_bin("cryptogram").unwrap();
    cmd.arg("compute-logprobs")
        .arg(&corpus)
        .arg("-n")
        .arg("2")
        .assert()
        .success()
        .stdout("AA 0.0\n");
}

#[test]
fn test_logprobs_default_window_is_four() {
    let dir = TempDir::new().unwrap();
    let corpus = write_file(&dir, "corpus.txt", "ABCDE\n");

    let mut cmd = Command::cargo_bin("cryptogram").unwrap();
    cmd.arg("compute-logprobs")
        .arg(&corpus)
        .assert()
        .success()
        .stdout(predicate::str::contains("ABCD "))
        .stdout(predicate::str::contains("BCDE "));
}

#[test]
fn test_logprobs_window_from_config() {
    let dir = TempDir::new().unwrap();
    let corpus = write_file(&dir, "corpus.txt", "ABC\n");
    let config = write_file(&dir, "cryptogram.toml", "[ngram]\ndefault_n = 3\n");

    let mut cmd = Command::cargo_bin("cryptogram").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("compute-logprobs")
        .arg(&corpus)
        .assert()
        .success()
        .stdout("ABC 0.0\n");
}

#[test]
fn test_logprobs_json_output() {
    let dir = TempDir::new().unwrap();
    let corpus = write_file(&dir, "corpus.txt", "AAAA");

    let output = Command::cargo_bin("cryptogram")
        .unwrap()
        .arg("compute-logprobs")
        .arg(&corpus)
        .arg("-n")
        .arg("2")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["AA"], 0.0);
}

#[test]
fn test_logprobs_empty_corpus_fails() {
    let dir = TempDir::new().unwrap();
    let corpus = write_file(&dir, "corpus.txt", "1 2 3\n");

    let mut cmd = Command::cargo_bin("cryptogram").unwrap();
    cmd.arg("compute-logprobs")
        .arg(&corpus)
        .arg("-n")
        .arg("2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty corpus"));
}

#[test]
fn test_logprobs_zero_window_rejected() {
    let dir = TempDir::new().unwrap();
    let corpus = write_file(&dir, "corpus.txt", "ABC\n");

    let mut cmd = Command::cargo_bin("cryptogram").unwrap();
    cmd.arg("compute-logprobs")
        .arg(&corpus)
        .arg("-n")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be >= 1"));
}

#[test]
fn test_logprobs_missing_corpus() {
    let mut cmd = Command::cargo_bin("cryptogram").unwrap();
    cmd.arg("compute-logprobs")
        .arg("/nonexistent/corpus.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open corpus"));
}
