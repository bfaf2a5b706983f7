//! Resolve read files into samples.
//!
//! Scans a directory for read files and reports how they group into single-end and paired-end
//! samples, optionally as a TSV sample sheet.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use readqc_lib::logging::{OperationTimer, log_prefix_groups, log_resolution_summary, log_samples};
use readqc_lib::metrics::write_metrics_auto;
use readqc_lib::pairs::PairResolver;
use readqc_lib::samples::SampleResolver;

use crate::commands::command::Command;
use crate::commands::common::InputOptions;

/// Resolve read files into single-end and paired-end samples.
#[derive(Debug, Parser)]
#[command(
    name = "pairs",
    about = "\x1b[38;5;180m[DISCOVERY]\x1b[0m      \x1b[36mResolve read files into samples\x1b[0m",
    long_about = r#"
Resolve the read files under a directory into samples.

The directory is scanned recursively for files with the given extension, skipping files whose
names contain the exclusion substring. Each file name is parsed into a sample name and a read
direction (R1/R2, _1/_2, or Illumina style S1_L001_R1_001). A sample is either one read file
(single-end) or one forward and one reverse file (paired-end); anything else is an error.

With --legacy-prefix the files are instead grouped by the text before the first .fastq/.fq in
their names, and the groups are logged without validation.

EXAMPLES:

  # Write a sample sheet
  readqc pairs -i raw_reads -o samples.tsv

  # Include gzipped reads and write a summary
  readqc pairs -i raw_reads -x gz -o samples.tsv --summary resolution.tsv

  # Show prefix groups
  readqc pairs -i raw_reads --legacy-prefix
"#
)]
pub struct Pairs {
    #[command(flatten)]
    pub input: InputOptions,

    /// Output sample sheet (TSV)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output file for resolution summary counts (TSV)
    #[arg(long = "summary")]
    pub summary: Option<PathBuf>,

    /// Group files by name prefix instead of resolving samples
    #[arg(
        long = "legacy-prefix",
        default_value = "false",
        conflicts_with_all = ["output", "summary"]
    )]
    pub legacy_prefix: bool,
}

impl Command for Pairs {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        let filter = self.input.validate()?;

        info!("Input: {}", self.input.input.display());
        info!("Extension: {}", filter.extension());
        info!("Exclude: '{}'", filter.exclude());

        if self.legacy_prefix {
            let groups = PairResolver::new(filter).resolve(&self.input.input).with_context(|| {
                format!("Failed to group files in {}", self.input.input.display())
            })?;
            log_prefix_groups(&groups);
            return Ok(());
        }

        let timer = OperationTimer::new("Resolving samples");
        let resolution = SampleResolver::new(filter).resolve(&self.input.input).with_context(|| {
            format!("Failed to resolve samples in {}", self.input.input.display())
        })?;
        log_samples(&resolution.samples);
        log_resolution_summary(&resolution.metrics);

        if let Some(output) = &self.output {
            write_metrics_auto(output, &resolution.records())?;
            info!("Wrote sample sheet to {}", output.display());
        }
        if let Some(summary) = &self.summary {
            write_metrics_auto(summary, &[resolution.metrics.clone()])?;
            info!("Wrote resolution summary to {}", summary.display());
        }

        timer.log_completion(resolution.samples.len() as u64, "samples");
        Ok(())
    }
}
