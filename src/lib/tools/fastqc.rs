//! FastQC invocations and report naming.

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::tools::ToolCommand;
use crate::validation::validate_positive;

/// Tool label used in logs.
pub const TOOL_NAME: &str = "fastqc";

/// Suffix FastQC appends to the HTML report of each input file.
pub const REPORT_SUFFIX: &str = "_fastqc.html";

/// Extensions FastQC strips, in order, before appending [`REPORT_SUFFIX`].
const STRIPPED_EXTENSIONS: [&str; 8] =
    [".gz", ".bz2", ".txt", ".fastq", ".fq", ".csfastq", ".sam", ".bam"];

/// FastQC settings.
#[derive(Debug, Clone)]
pub struct Fastqc {
    /// Program to execute.
    pub program: PathBuf,
    /// Directory receiving one report per input file.
    pub output_dir: PathBuf,
    /// Number of files FastQC processes concurrently.
    pub threads: usize,
}

impl Fastqc {
    /// Builds `fastqc --outdir <output_dir> -t <threads> <inputs...>`.
    ///
    /// # Errors
    /// Returns an error if `threads` is zero
    pub fn command(&self, inputs: &[PathBuf]) -> Result<ToolCommand> {
        validate_positive(self.threads, "threads")?;
        Ok(ToolCommand::new(TOOL_NAME, &self.program)
            .arg("--outdir")
            .arg(&self.output_dir)
            .arg("-t")
            .arg(self.threads.to_string())
            .args(inputs))
    }

    /// Path of the HTML report FastQC writes for `input`.
    #[must_use]
    pub fn report_path(&self, input: &Path) -> PathBuf {
        let file_name = input.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        self.output_dir.join(report_name(&file_name))
    }
}

/// File name of the HTML report FastQC writes for an input file name.
///
/// # Example
/// ```
/// use readqc_lib::tools::fastqc::report_name;
///
/// assert_eq!(report_name("s_R1.fastq.gz"), "s_R1_fastqc.html");
/// assert_eq!(report_name("s.fq"), "s_fastqc.html");
/// ```
#[must_use]
pub fn report_name(file_name: &str) -> String {
    let mut stem = file_name;
    for ext in STRIPPED_EXTENSIONS {
        stem = stem.strip_suffix(ext).unwrap_or(stem);
    }
    format!("{stem}{REPORT_SUFFIX}")
}
