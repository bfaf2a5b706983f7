//! Common CLI options shared across commands.
//!
//! This module provides shared argument structures that can be composed into
//! command structs using `#[command(flatten)]`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use readqc_lib::executor::{DryRunExecutor, Executor, ProcessExecutor};
use readqc_lib::pairs::{DEFAULT_EXCLUDE, FileFilter};
use readqc_lib::validation::validate_directory_exists;

/// Input directory and read file filters.
#[derive(Debug, Clone, Args)]
pub struct InputOptions {
    /// Directory containing the read files
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Read file extension, with or without the leading dot
    #[arg(short = 'x', long = "extension", default_value = "fastq")]
    pub extension: String,

    /// Ignore files whose names contain this substring (empty to keep all files)
    #[arg(short = 'e', long = "exclude", default_value = DEFAULT_EXCLUDE)]
    pub exclude: String,
}

impl InputOptions {
    /// Validates that the input directory exists and builds the file filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist or the extension is invalid.
    pub fn validate(&self) -> Result<FileFilter> {
        validate_directory_exists(&self.input, "input")?;
        Ok(FileFilter::new(&self.extension, self.exclude.clone())?)
    }
}

/// Options controlling how external tools are run.
#[derive(Debug, Clone, Default, Args)]
pub struct ExecutionOptions {
    /// Print the commands instead of running them
    #[arg(short = 'n', long = "dry-run", default_value = "false")]
    pub dry_run: bool,

    /// Continue when a tool exits unsuccessfully
    #[arg(long = "keep-going", default_value = "false")]
    pub keep_going: bool,
}

impl ExecutionOptions {
    /// Returns the executor selected by these options.
    #[must_use]
    pub fn executor(&self) -> Box<dyn Executor> {
        if self.dry_run {
            Box::new(DryRunExecutor::stdout())
        } else {
            Box::new(ProcessExecutor::new().keep_going(self.keep_going))
        }
    }

    /// Output directories are created only when commands actually run.
    #[must_use]
    pub fn create_dirs(&self) -> bool {
        !self.dry_run
    }
}
