//! MultiQC invocations.

use std::path::{Path, PathBuf};

use crate::tools::ToolCommand;

/// Tool label used in logs.
pub const TOOL_NAME: &str = "multiqc";

/// MultiQC settings.
#[derive(Debug, Clone)]
pub struct Multiqc {
    /// Program to execute.
    pub program: PathBuf,
    /// Directory receiving the aggregated report.
    pub output_dir: PathBuf,
}

impl Multiqc {
    /// Builds `multiqc -f --interactive --outdir <output_dir> <reports_dir>`.
    ///
    /// `-f` overwrites an existing report; `--interactive` forces interactive plots.
    #[must_use]
    pub fn command(&self, reports_dir: &Path) -> ToolCommand {
        ToolCommand::new(TOOL_NAME, &self.program)
            .arg("-f")
            .arg("--interactive")
            .arg("--outdir")
            .arg(&self.output_dir)
            .arg(reports_dir)
    }
}
