//! Integration tests for the qc command.

use tempfile::TempDir;

use crate::helpers::{
    assert_failure_contains, assert_success, create_read_dir, run_readqc, stdout_lines,
};

#[test]
fn test_qc_dry_run_prints_commands() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    let files = create_read_dir(&reads, &["s_R1.fastq", "s_R2.fastq", "nested/t.fastq"]);
    let qc = temp_dir.path().join("qc");
    let summary = temp_dir.path().join("summary");

    let output = run_readqc([
        "qc",
        "-i",
        reads.to_str().unwrap(),
        "-q",
        qc.to_str().unwrap(),
        "-s",
        summary.to_str().unwrap(),
        "-t",
        "4",
        "--dry-run",
    ]);
    assert_success(&output, "qc --dry-run");

    assert_eq!(
        stdout_lines(&output),
        vec![
            format!(
                "fastqc --outdir {} -t 4 {} {}",
                qc.display(),
                files[0].display(),
                files[1].display()
            ),
            format!("multiqc -f --interactive --outdir {} {}", summary.display(), qc.display()),
        ]
    );
    assert!(!qc.exists(), "Dry run should not create output directories");
}

#[test]
fn test_qc_no_matching_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    create_read_dir(&reads, &["s.fq"]);

    let output = run_readqc([
        "qc",
        "-i",
        reads.to_str().unwrap(),
        "-q",
        temp_dir.path().join("qc").to_str().unwrap(),
        "-s",
        temp_dir.path().join("summary").to_str().unwrap(),
        "--dry-run",
    ]);
    assert_failure_contains(&output, "No files matching '*.fastq'");
}

#[test]
fn test_qc_missing_program() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    create_read_dir(&reads, &["s.fastq"]);

    let output = run_readqc([
        "qc",
        "-i",
        reads.to_str().unwrap(),
        "-q",
        temp_dir.path().join("qc").to_str().unwrap(),
        "-s",
        temp_dir.path().join("summary").to_str().unwrap(),
        "--fastqc",
        "/nonexistent/readqc-fastqc",
    ]);
    assert_failure_contains(&output, "Failed to start fastqc ('/nonexistent/readqc-fastqc')");
}

#[cfg(unix)]
#[test]
fn test_qc_runs_tools_and_creates_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    create_read_dir(&reads, &["s.fastq"]);
    let qc = temp_dir.path().join("out/qc");
    let summary = temp_dir.path().join("out/summary");

    let output = run_readqc([
        "qc",
        "-i",
        reads.to_str().unwrap(),
        "-q",
        qc.to_str().unwrap(),
        "-s",
        summary.to_str().unwrap(),
        "--fastqc",
        "true",
        "--multiqc",
        "true",
    ]);
    assert_success(&output, "qc");
    assert!(qc.is_dir());
    assert!(summary.is_dir());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Running fastqc: true --outdir"), "stderr: {stderr}");
    assert!(stderr.contains("Running multiqc: true -f --interactive"), "stderr: {stderr}");
    let missing = format!("FastQC report not found: {}", qc.join("s_fastqc.html").display());
    assert!(stderr.contains(&missing), "stderr: {stderr}");
}

#[cfg(unix)]
#[test]
fn test_qc_failed_tool_exit() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reads = temp_dir.path().join("reads");
    create_read_dir(&reads, &["s.fastq"]);
    let args = |keep_going: bool| {
        let mut args = vec![
            "qc".to_string(),
            "-i".to_string(),
            reads.display().to_string(),
            "-q".to_string(),
            temp_dir.path().join("qc").display().to_string(),
            "-s".to_string(),
            temp_dir.path().join("summary").display().to_string(),
            "--fastqc".to_string(),
            "false".to_string(),
            "--multiqc".to_string(),
            "true".to_string(),
        ];
        if keep_going {
            args.push("--keep-going".to_string());
        }
        args
    };

    let output = run_readqc(args(false));
    assert_failure_contains(&output, "fastqc failed with exit status");

    let output = run_readqc(args(true));
    assert_success(&output, "qc --keep-going");
}
