//! Integration tests for the trim command.

use tempfile::TempDir;

use crate::helpers::{
    assert_failure_contains, assert_success, create_read_dir, run_readqc, stdout_lines,
};

const PARAMS: &str = "ILLUMINACLIP:TruSeq3-PE.fa:2:30:10 LEADING:3 TRAILING:3 MINLEN:36";

#[test]
fn test_trim_dry_run_prints_one_command_per_sample() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    let files = create_read_dir(
        &reads,
        &["a_R2.fastq", "a_R1.fastq", "b.fastq", "a_R1.junk.trimmed.fastq", "notes.txt"],
    );
    let out = temp_dir.path().join("trimmed");

    let output = run_readqc([
        "trim",
        "-i",
        reads.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "-p",
        PARAMS,
        "--trimmomatic",
        "/opt/trimmomatic",
        "--dry-run",
    ]);
    assert_success(&output, "trim --dry-run");

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        format!(
            "/opt/trimmomatic PE {} {} {} {} {} {} {PARAMS}",
            files[1].display(),
            files[0].display(),
            out.join("a_R1.trimmed.fastq").display(),
            out.join("a_R1.junk.trimmed.fastq").display(),
            out.join("a_R2.trimmed.fastq").display(),
            out.join("a_R2.junk.trimmed.fastq").display(),
        )
    );
    assert_eq!(
        lines[1],
        format!(
            "/opt/trimmomatic SE {} {} {PARAMS}",
            files[2].display(),
            out.join("b.trimmed.fastq").display()
        )
    );
    assert!(!out.exists());
}

#[test]
fn test_trim_malformed_sample_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    create_read_dir(&reads, &["s_R1.fastq", "s_R2.fastq", "s_2.fastq"]);

    let output = run_readqc([
        "trim",
        "-i",
        reads.to_str().unwrap(),
        "-o",
        temp_dir.path().join("trimmed").to_str().unwrap(),
        "-p",
        "MINLEN:36",
        "--dry-run",
    ]);
    assert_failure_contains(&output, "Unexpected fastq structure. Files: [");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_trim_blank_parameters_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    create_read_dir(&reads, &["s.fastq"]);

    let output = run_readqc([
        "trim",
        "-i",
        reads.to_str().unwrap(),
        "-o",
        temp_dir.path().join("trimmed").to_str().unwrap(),
        "-p",
        "  ",
    ]);
    assert_failure_contains(&output, "Invalid parameter 'parameters'");
}

#[cfg(unix)]
#[test]
fn test_trim_runs_tool_and_creates_output_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    create_read_dir(&reads, &["s_1.fastq", "s_2.fastq"]);
    let out = temp_dir.path().join("trimmed");

    let output = run_readqc([
        "trim",
        "-i",
        reads.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "-p",
        "MINLEN:36",
        "--trimmomatic",
        "true",
    ]);
    assert_success(&output, "trim");
    assert!(out.is_dir());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Running trimmomatic: true PE"), "stderr: {stderr}");
}
