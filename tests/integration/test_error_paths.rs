//! Error path integration tests.
//!
//! These tests verify that invalid arguments and missing inputs are rejected with clear
//! messages before any tool runs.

use tempfile::TempDir;

use crate::helpers::{assert_failure_contains, create_read_dir, run_readqc};

#[test]
fn test_missing_input_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("missing");

    let output = run_readqc(["pairs", "-i", missing.to_str().unwrap()]);
    assert_failure_contains(&output, "Invalid input directory");
}

#[test]
fn test_input_is_a_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let files = create_read_dir(temp_dir.path(), &["s.fastq"]);

    let output = run_readqc(["pairs", "-i", files[0].to_str().unwrap()]);
    assert_failure_contains(&output, "Invalid input directory");
}

#[test]
fn test_compound_extension_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output =
        run_readqc(["pairs", "-i", temp_dir.path().to_str().unwrap(), "-x", "fastq.gz"]);
    assert_failure_contains(&output, "Invalid parameter 'extension'");
}

#[test]
fn test_zero_threads_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    create_read_dir(temp_dir.path(), &["s.fastq"]);

    let output = run_readqc([
        "qc",
        "-i",
        temp_dir.path().to_str().unwrap(),
        "-q",
        temp_dir.path().join("qc").to_str().unwrap(),
        "-s",
        temp_dir.path().join("summary").to_str().unwrap(),
        "-t",
        "0",
        "--dry-run",
    ]);
    assert_failure_contains(&output, "Invalid parameter 'threads'");
}

#[test]
fn test_zero_column_width_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_readqc([
        "report",
        "-i",
        temp_dir.path().to_str().unwrap(),
        "-o",
        temp_dir.path().join("table.html").to_str().unwrap(),
        "--max-col-width",
        "0",
    ]);
    assert_failure_contains(&output, "Invalid parameter 'max-col-width'");
}

#[test]
fn test_legacy_prefix_conflicts_with_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_readqc([
        "pairs",
        "-i",
        temp_dir.path().to_str().unwrap(),
        "--legacy-prefix",
        "-o",
        temp_dir.path().join("s.tsv").to_str().unwrap(),
    ]);
    assert_failure_contains(&output, "cannot be used with");
}
