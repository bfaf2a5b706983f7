//! Run FastQC and MultiQC over a directory of reads.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use readqc_lib::pairs::FileFilter;
use readqc_lib::tools::{Fastqc, Multiqc};
use readqc_lib::validation::{validate_directory_exists, validate_positive};
use readqc_lib::workflow::QcWorkflow;

use crate::commands::command::Command;
use crate::commands::common::ExecutionOptions;

/// Run FastQC on every read file in a directory, then summarize with MultiQC.
#[derive(Debug, Parser)]
#[command(
    name = "qc",
    about = "\x1b[38;5;72m[QC]\x1b[0m             \x1b[36mRun FastQC and MultiQC over a directory\x1b[0m",
    long_about = r#"
Run FastQC and MultiQC over the read files in a directory.

FastQC is run once over every file directly inside the input directory whose extension matches
(subdirectories are not searched). MultiQC then aggregates the FastQC reports into a single
summary. Both programs must be installed; their paths can be overridden. Output directories are
created if missing.

EXAMPLES:

  # QC of raw reads
  readqc qc -i raw_reads -q qc -s qc_summary

  # Gzipped reads with 8 FastQC threads
  readqc qc -i raw_reads -x gz -t 8 -q qc -s qc_summary

  # Show the commands without running them
  readqc qc -i raw_reads -q qc -s qc_summary --dry-run
"#
)]
pub struct Qc {
    /// Directory containing the read files
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output directory for the per-file FastQC reports
    #[arg(short = 'q', long = "qc-output")]
    pub qc_output: PathBuf,

    /// Output directory for the MultiQC summary
    #[arg(short = 's', long = "summary-output")]
    pub summary_output: PathBuf,

    /// Read file extension, with or without the leading dot
    #[arg(short = 'x', long = "extension", default_value = "fastq")]
    pub extension: String,

    /// Number of files FastQC processes at once
    #[arg(short = 't', long = "threads", default_value = "20")]
    pub threads: usize,

    /// FastQC program
    #[arg(long = "fastqc", default_value = "fastqc")]
    pub fastqc: PathBuf,

    /// MultiQC program
    #[arg(long = "multiqc", default_value = "multiqc")]
    pub multiqc: PathBuf,

    #[command(flatten)]
    pub execution: ExecutionOptions,
}

impl Command for Qc {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        validate_directory_exists(&self.input, "input")?;
        validate_positive(self.threads, "threads")?;

        info!("Input: {}", self.input.display());
        info!("QC output: {}", self.qc_output.display());
        info!("Summary output: {}", self.summary_output.display());
        info!("Threads: {}", self.threads);

        let workflow = QcWorkflow {
            input_dir: self.input.clone(),
            filter: FileFilter::new(&self.extension, String::new())?,
            fastqc: Fastqc {
                program: self.fastqc.clone(),
                output_dir: self.qc_output.clone(),
                threads: self.threads,
            },
            multiqc: Multiqc {
                program: self.multiqc.clone(),
                output_dir: self.summary_output.clone(),
            },
        };

        let executor = self.execution.executor();
        workflow
            .run(executor.as_ref(), self.execution.create_dirs())
            .with_context(|| format!("Quality control of {} failed", self.input.display()))?;

        if !self.execution.dry_run {
            for report in workflow.missing_reports()? {
                warn!("FastQC report not found: {}", report.display());
            }
        }
        Ok(())
    }
}
