//! Trim reads with Trimmomatic, one invocation per sample.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use readqc_lib::samples::SampleResolver;
use readqc_lib::tools::Trimmomatic;
use readqc_lib::validation::validate_not_blank;
use readqc_lib::workflow::TrimWorkflow;

use crate::commands::command::Command;
use crate::commands::common::{ExecutionOptions, InputOptions};

/// Trim every sample in a directory with Trimmomatic.
#[derive(Debug, Parser)]
#[command(
    name = "trim",
    about = "\x1b[38;5;166m[TRIMMING]\x1b[0m       \x1b[36mTrim reads with Trimmomatic\x1b[0m",
    long_about = r#"
Trim the reads of every sample under a directory with Trimmomatic.

Samples are resolved as by `readqc pairs`. Paired-end samples run in PE mode and single-end
samples in SE mode. For an input s_R1.fastq the outputs are s_R1.trimmed.fastq and, in PE mode,
s_R1.junk.trimmed.fastq holding reads whose mate was dropped. The trimming steps given with -p
are appended verbatim to every command.

The trimmomatic program is executed directly, so it must be an executable (for example a
wrapper script around `java -jar trimmomatic.jar`).

EXAMPLES:

  # Standard paired-end trimming
  readqc trim -i raw_reads -o trimmed \
    -p "ILLUMINACLIP:TruSeq3-PE.fa:2:30:10 LEADING:3 TRAILING:3 SLIDINGWINDOW:4:15 MINLEN:36"

  # Show the commands without running them
  readqc trim -i raw_reads -o trimmed -p "MINLEN:36" --dry-run
"#
)]
pub struct Trim {
    #[command(flatten)]
    pub input: InputOptions,

    /// Output directory for the trimmed reads
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Trimming steps passed to Trimmomatic
    #[arg(short = 'p', long = "parameters", allow_hyphen_values = true)]
    pub parameters: String,

    /// Trimmomatic program
    #[arg(long = "trimmomatic", default_value = "trimmomatic")]
    pub trimmomatic: PathBuf,

    #[command(flatten)]
    pub execution: ExecutionOptions,
}

impl Command for Trim {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        let filter = self.input.validate()?;
        validate_not_blank(&self.parameters, "parameters")?;

        info!("Input: {}", self.input.input.display());
        info!("Output: {}", self.output.display());
        info!("Parameters: {}", self.parameters);

        let workflow = TrimWorkflow {
            input_dir: self.input.input.clone(),
            resolver: SampleResolver::new(filter),
            trimmomatic: Trimmomatic {
                program: self.trimmomatic.clone(),
                output_dir: self.output.clone(),
                parameters: self.parameters.clone(),
            },
        };

        let executor = self.execution.executor();
        workflow
            .run(executor.as_ref(), self.execution.create_dirs())
            .with_context(|| format!("Trimming reads in {} failed", self.input.input.display()))
    }
}
