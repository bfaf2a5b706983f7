//! Trimmomatic invocations.
//!
//! Paired-end samples run in `PE` mode and produce a trimmed and an unpaired ("junk") output per
//! input file. Single-end samples run in `SE` mode with one trimmed output. Output files are named
//! after the inputs:
//!
//! ```text
//! s_R1.fastq  ->  <out>/s_R1.trimmed.fastq  +  <out>/s_R1.junk.trimmed.fastq
//! ```
//!
//! The `junk` infix matches the default exclusion substring used when resolving samples, so a
//! re-scan of the output directory ignores the unpaired reads.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use readqc_metrics::SampleLayout;

use crate::errors::{ReadQcError, Result};
use crate::samples::{Reads, SampleGroup};
use crate::tools::ToolCommand;

/// Tool label used in logs.
pub const TOOL_NAME: &str = "trimmomatic";

/// Output files for one trimmed input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedOutputs {
    /// Reads that survived trimming (and, in paired mode, whose mate survived too).
    pub trimmed: PathBuf,
    /// Reads whose mate was dropped (paired mode only).
    pub junk: PathBuf,
}

impl TrimmedOutputs {
    /// Derives output paths for `input` inside `output_dir`.
    ///
    /// Only the last extension of the input's file name is kept at the end:
    /// `a.fastq.gz` becomes `a.fastq.trimmed.gz`.
    #[must_use]
    pub fn for_input(output_dir: &Path, input: &Path) -> Self {
        let stem = input.file_stem().unwrap_or_else(|| OsStr::new("")).to_string_lossy();
        let ext =
            input.extension().map(|e| format!(".{}", e.to_string_lossy())).unwrap_or_default();
        Self {
            trimmed: output_dir.join(format!("{stem}.trimmed{ext}")),
            junk: output_dir.join(format!("{stem}.junk.trimmed{ext}")),
        }
    }
}

/// Builds a paired-end (`PE`) command.
///
/// Argument order: `PE <in1> <in2> <out1> <junk1> <out2> <junk2> <parameters>`.
#[must_use]
pub fn trimmomatic_paired_command(
    trimmed_output: &Path,
    forward: &Path,
    reverse: &Path,
    trimmomatic: &Path,
    parameters: &str,
) -> ToolCommand {
    let fwd = TrimmedOutputs::for_input(trimmed_output, forward);
    let rev = TrimmedOutputs::for_input(trimmed_output, reverse);
    ToolCommand::new(TOOL_NAME, trimmomatic)
        .arg(SampleLayout::PairedEnd.mode())
        .arg(forward)
        .arg(reverse)
        .arg(&fwd.trimmed)
        .arg(&fwd.junk)
        .arg(&rev.trimmed)
        .arg(&rev.junk)
        .parameters(parameters)
}

/// Builds a single-end (`SE`) command.
///
/// Argument order: `SE <in> <out> <parameters>`.
#[must_use]
pub fn trimmomatic_single_command(
    trimmed_output: &Path,
    input: &Path,
    trimmomatic: &Path,
    parameters: &str,
) -> ToolCommand {
    let outputs = TrimmedOutputs::for_input(trimmed_output, input);
    ToolCommand::new(TOOL_NAME, trimmomatic)
        .arg(SampleLayout::SingleEnd.mode())
        .arg(input)
        .arg(&outputs.trimmed)
        .parameters(parameters)
}

/// Builds the command for a sample's read files: one file runs single-end, two files run
/// paired-end with the first file treated as the forward read.
///
/// # Errors
/// Returns [`ReadQcError::MalformedSampleGroup`] naming the files when there are not one or two
///
/// # Example
/// ```
/// use readqc_lib::tools::trimmomatic_command;
/// use std::path::{Path, PathBuf};
///
/// let files = vec![PathBuf::from("s_R1.fastq"), PathBuf::from("s_R2.fastq")];
/// let cmd = trimmomatic_command(Path::new("out"), &files, Path::new("trimmomatic"), "MINLEN:36")
///     .unwrap();
/// assert!(cmd.to_string().starts_with("trimmomatic PE s_R1.fastq s_R2.fastq"));
/// assert!(cmd.to_string().ends_with("MINLEN:36"));
///
/// assert!(trimmomatic_command(Path::new("out"), &[], Path::new("trimmomatic"), "").is_err());
/// ```
pub fn trimmomatic_command(
    trimmed_output: &Path,
    fastq_files: &[PathBuf],
    trimmomatic: &Path,
    parameters: &str,
) -> Result<ToolCommand> {
    match fastq_files {
        [forward, reverse] => Ok(trimmomatic_paired_command(
            trimmed_output,
            forward,
            reverse,
            trimmomatic,
            parameters,
        )),
        [single] => Ok(trimmomatic_single_command(trimmed_output, single, trimmomatic, parameters)),
        _ => Err(ReadQcError::MalformedSampleGroup { files: fastq_files.to_vec() }),
    }
}

/// Trimmomatic settings shared by every sample of a run.
#[derive(Debug, Clone)]
pub struct Trimmomatic {
    /// Program to execute.
    pub program: PathBuf,
    /// Directory receiving the trimmed reads.
    pub output_dir: PathBuf,
    /// Free-form trimming steps appended to every command (e.g. `LEADING:3 MINLEN:36`).
    pub parameters: String,
}

impl Trimmomatic {
    /// Builds the command for one resolved sample.
    #[must_use]
    pub fn command_for(&self, sample: &SampleGroup) -> ToolCommand {
        match &sample.reads {
            Reads::Paired { forward, reverse } => trimmomatic_paired_command(
                &self.output_dir,
                &forward.path,
                &reverse.path,
                &self.program,
                &self.parameters,
            ),
            Reads::Single(file) => trimmomatic_single_command(
                &self.output_dir,
                &file.path,
                &self.program,
                &self.parameters,
            ),
        }
    }
}
