//! Builders for directories of small FASTQ files.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Writes a FASTQ file with `reads` identical 8-base records, creating parent directories.
pub fn write_fastq(dir: &Path, name: &str, reads: usize) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directory");
    }
    let mut content = String::new();
    for i in 0..reads {
        content.push_str(&format!("@read{i}\nACGTACGT\n+\nIIIIIIII\n"));
    }
    fs::write(&path, content).expect("Failed to write FASTQ");
    path
}

/// Writes one small FASTQ file per name.
pub fn create_read_dir(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|name| write_fastq(dir, name, 2)).collect()
}

/// Writes an empty file standing in for a FastQC HTML report.
pub fn write_report(dir: &Path, name: &str) -> PathBuf {
    fs::create_dir_all(dir).expect("Failed to create directory");
    let path = dir.join(name);
    fs::write(&path, "<html></html>").expect("Failed to write report");
    path
}

/// Runs the readqc binary with the given arguments.
pub fn run_readqc<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_readqc"))
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to run readqc")
}
