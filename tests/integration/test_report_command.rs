//! Integration tests for the report command.

use std::fs;

use tempfile::TempDir;

use crate::helpers::{assert_failure_contains, assert_success, run_readqc, write_report};

#[test]
fn test_report_paired_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let qc = temp_dir.path().join("qc");
    let r1 = write_report(&qc, "s1_R1_fastqc.html");
    let r2 = write_report(&qc, "s1_R2_fastqc.html");
    write_report(&qc, "s2_R1_fastqc.html");
    write_report(&qc, "multiqc_report.html");
    let table = temp_dir.path().join("table.html");

    let output = run_readqc([
        "report",
        "-i",
        qc.to_str().unwrap(),
        "-o",
        table.to_str().unwrap(),
    ]);
    assert_success(&output, "report");

    let html = fs::read_to_string(&table).expect("Failed to read table");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<th>ID</th><th>Forward Reads</th><th>Reverse Reads</th>"));
    assert!(html.contains(&format!(
        "<td>s1</td><td><a href=\"https://localhost:8888/files/{}\">s1_R1_fastqc.html</a></td>\
         <td><a href=\"https://localhost:8888/files/{}\">s1_R2_fastqc.html</a></td>",
        r1.display(),
        r2.display()
    )));
    assert!(html.contains("s2_R1_fastqc.html</a></td><td></td></tr>"));
    assert!(!html.contains("multiqc_report"));
}

#[test]
fn test_report_single_fragment_with_options() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let qc = temp_dir.path().join("qc");
    write_report(&qc, "control_sample_fastqc.html");
    let table = temp_dir.path().join("table.html");

    let output = run_readqc([
        "report",
        "-i",
        qc.to_str().unwrap(),
        "-o",
        table.to_str().unwrap(),
        "--base-url",
        "http://example.org/",
        "--max-col-width",
        "10",
        "--fragment",
    ]);
    assert_success(&output, "report --fragment");

    let html = fs::read_to_string(&table).expect("Failed to read table");
    assert!(html.starts_with("<table"));
    assert!(html.contains("<th>ID</th><th>Reads</th></tr>"));
    assert!(html.contains("href=\"http://example.org/"));
    assert!(html.contains(">control...</a>"));
}

#[test]
fn test_report_missing_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_readqc([
        "report",
        "-i",
        temp_dir.path().join("missing").to_str().unwrap(),
        "-o",
        temp_dir.path().join("table.html").to_str().unwrap(),
    ]);
    assert_failure_contains(&output, "Invalid QC output directory");
}
