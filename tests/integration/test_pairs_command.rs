//! Integration tests for the pairs command.

use fgoxide::io::DelimFile;
use readqc_lib::metrics::{ResolutionMetrics, SampleLayout, SampleSheetRecord};
use tempfile::TempDir;

use crate::helpers::{assert_failure_contains, assert_success, create_read_dir, run_readqc};

#[test]
fn test_pairs_writes_sample_sheet() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    let files = create_read_dir(
        &reads,
        &["tumor_R1.fastq", "tumor_R2.fastq", "normal.fastq", "tumor_R1.junk.fastq"],
    );
    let sheet = temp_dir.path().join("samples.tsv");
    let summary = temp_dir.path().join("resolution.tsv");

    let output = run_readqc([
        "pairs",
        "-i",
        reads.to_str().unwrap(),
        "-o",
        sheet.to_str().unwrap(),
        "--summary",
        summary.to_str().unwrap(),
    ]);
    assert_success(&output, "pairs");

    let records: Vec<SampleSheetRecord> =
        DelimFile::default().read_tsv(&sheet).expect("Failed to read sample sheet");
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].sample, "normal");
    assert_eq!(records[0].layout, SampleLayout::SingleEnd);
    assert_eq!(records[0].forward, files[2].display().to_string());
    assert_eq!(records[0].reverse, "");

    assert_eq!(records[1].sample, "tumor");
    assert_eq!(records[1].layout, SampleLayout::PairedEnd);
    assert_eq!(records[1].forward, files[0].display().to_string());
    assert_eq!(records[1].reverse, files[1].display().to_string());

    let metrics: Vec<ResolutionMetrics> =
        DelimFile::default().read_tsv(&summary).expect("Failed to read summary");
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].total_files, 4);
    assert_eq!(metrics[0].excluded_files, 1);
    assert_eq!(metrics[0].paired_end_samples, 1);
    assert_eq!(metrics[0].single_end_samples, 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Resolved files: 3"), "stderr: {stderr}");
    assert!(stderr.contains("Samples: 2 (1 paired-end, 1 single-end)"), "stderr: {stderr}");
}

#[test]
fn test_pairs_custom_extension_and_no_exclusion() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    create_read_dir(&reads, &["a.junk_1.fq", "a.junk_2.fq", "b.fastq"]);
    let sheet = temp_dir.path().join("samples.tsv");

    let output = run_readqc([
        "pairs",
        "-i",
        reads.to_str().unwrap(),
        "-x",
        ".fq",
        "-e",
        "",
        "-o",
        sheet.to_str().unwrap(),
    ]);
    assert_success(&output, "pairs");

    let records: Vec<SampleSheetRecord> =
        DelimFile::default().read_tsv(&sheet).expect("Failed to read sample sheet");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].sample, "a.junk");
    assert_eq!(records[0].layout, SampleLayout::PairedEnd);
}

#[test]
fn test_pairs_legacy_prefix_logs_groups() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    create_read_dir(&reads, &["sample1.R1.fastq", "sample1.R2.fastq"]);

    let output = run_readqc(["pairs", "-i", reads.to_str().unwrap(), "--legacy-prefix"]);
    assert_success(&output, "pairs --legacy-prefix");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Found 2 prefix group(s)"), "stderr: {stderr}");
    assert!(stderr.contains("sample1.R1: sample1.R1.fastq"), "stderr: {stderr}");
    assert!(stderr.contains("sample1.R2: sample1.R2.fastq"), "stderr: {stderr}");
}

#[test]
fn test_pairs_ambiguous_sample_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    create_read_dir(&reads, &["s_R1.fastq", "s.R1.fastq"]);

    let output = run_readqc(["pairs", "-i", reads.to_str().unwrap()]);
    assert_failure_contains(&output, "Unexpected fastq structure. Files: [");
}
