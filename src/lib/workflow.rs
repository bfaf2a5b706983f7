//! End-to-end QC and trimming workflows.
//!
//! A workflow resolves its inputs, builds the tool commands and hands them to an [`Executor`]
//! one at a time. Nothing runs concurrently; the tools parallelize internally.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::errors::{ReadQcError, Result};
use crate::executor::Executor;
use crate::logging::{OperationTimer, log_resolution_summary, log_samples};
use crate::pairs::FileFilter;
use crate::samples::SampleResolver;
use crate::tools::{Fastqc, Multiqc, ToolCommand, Trimmomatic};

/// Creates `dir` (and parents) unless it already exists.
fn create_output_dir(dir: &Path, description: &str) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| ReadQcError::Output {
        description: format!("{description} directory"),
        source,
    })?;
    info!("Created {description} directory {}", dir.display());
    Ok(())
}

/// FastQC over every read file in a directory followed by a MultiQC summary.
#[derive(Debug, Clone)]
pub struct QcWorkflow {
    /// Directory holding the read files. Only its top level is scanned.
    pub input_dir: PathBuf,
    /// Read file extension, e.g. `.fastq`.
    pub filter: FileFilter,
    /// FastQC settings; its output directory receives the per-file reports.
    pub fastqc: Fastqc,
    /// MultiQC settings; its output directory receives the summary.
    pub multiqc: Multiqc,
}

impl QcWorkflow {
    /// Builds the FastQC and MultiQC commands, in run order.
    ///
    /// # Errors
    /// Returns an error if the input directory is unreadable, holds no matching files, or the
    /// FastQC settings are invalid
    pub fn commands(&self) -> Result<Vec<ToolCommand>> {
        let inputs = self.inputs()?;
        info!("Found {} read file(s) in {}", inputs.len(), self.input_dir.display());

        let fastqc = self.fastqc.command(&inputs)?;
        let multiqc = self.multiqc.command(&self.fastqc.output_dir);
        Ok(vec![fastqc, multiqc])
    }

    /// FastQC reports that should exist for the input files but do not.
    ///
    /// # Errors
    /// Returns an error if the input directory is unreadable or holds no matching files
    pub fn missing_reports(&self) -> Result<Vec<PathBuf>> {
        Ok(self
            .inputs()?
            .iter()
            .map(|input| self.fastqc.report_path(input))
            .filter(|report| !report.is_file())
            .collect())
    }

    fn inputs(&self) -> Result<Vec<PathBuf>> {
        let scanned = self.filter.scan_flat(&self.input_dir)?;
        if scanned.files.is_empty() {
            return Err(ReadQcError::NoInputFiles {
                directory: self.input_dir.clone(),
                extension: self.filter.extension().to_string(),
            });
        }
        Ok(scanned.files)
    }

    /// Runs the workflow.
    ///
    /// Output directories are created first when `create_dirs` is set.
    ///
    /// # Errors
    /// Returns an error if the commands cannot be built, a directory cannot be created, or the
    /// executor fails
    pub fn run(&self, executor: &dyn Executor, create_dirs: bool) -> Result<()> {
        let timer = OperationTimer::new("Running quality control");
        let commands = self.commands()?;
        if create_dirs {
            create_output_dir(&self.fastqc.output_dir, "QC output")?;
            create_output_dir(&self.multiqc.output_dir, "QC summary")?;
        }
        for command in &commands {
            executor.run(command)?;
        }
        timer.log_completion(commands.len() as u64, "commands");
        Ok(())
    }
}

/// Trimmomatic over every sample resolved from a directory.
#[derive(Debug, Clone)]
pub struct TrimWorkflow {
    /// Directory scanned recursively for read files.
    pub input_dir: PathBuf,
    /// Resolves the files under `input_dir` into samples.
    pub resolver: SampleResolver,
    /// Trimmomatic settings.
    pub trimmomatic: Trimmomatic,
}

impl TrimWorkflow {
    /// Builds one Trimmomatic command per sample, in sample order.
    ///
    /// # Errors
    /// Returns an error if the input directory cannot be resolved into samples
    pub fn commands(&self) -> Result<Vec<ToolCommand>> {
        let resolution = self.resolver.resolve(&self.input_dir)?;
        log_resolution_summary(&resolution.metrics);
        log_samples(&resolution.samples);
        if resolution.samples.is_empty() {
            return Err(ReadQcError::NoInputFiles {
                directory: self.input_dir.clone(),
                extension: self.resolver.filter().extension().to_string(),
            });
        }
        Ok(resolution.samples.iter().map(|sample| self.trimmomatic.command_for(sample)).collect())
    }

    /// Runs the workflow.
    ///
    /// # Errors
    /// Returns an error if the commands cannot be built, the output directory cannot be created,
    /// or the executor fails
    pub fn run(&self, executor: &dyn Executor, create_dirs: bool) -> Result<()> {
        let timer = OperationTimer::new("Trimming reads");
        let commands = self.commands()?;
        if create_dirs {
            create_output_dir(&self.trimmomatic.output_dir, "trimmed output")?;
        }
        for command in &commands {
            executor.run(command)?;
        }
        timer.log_completion(commands.len() as u64, "samples");
        Ok(())
    }
}
