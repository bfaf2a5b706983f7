//! Invocations of the external QC and trimming tools.
//!
//! - [`fastqc`] - per-file quality reports
//! - [`multiqc`] - aggregation of the per-file reports
//! - [`trimmomatic`] - adapter and quality trimming
//!
//! Each builder produces a [`ToolCommand`], which renders as a shell-like command line for
//! logging and converts into a [`std::process::Command`] for execution without a shell.

pub mod fastqc;
pub mod multiqc;
pub mod trimmomatic;

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::Command;

pub use fastqc::Fastqc;
pub use multiqc::Multiqc;
pub use trimmomatic::{Trimmomatic, TrimmedOutputs, trimmomatic_command};

/// A fully built invocation of an external program.
///
/// Tool-specific parameters given as one free-form string are kept verbatim and appended after
/// all other arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    tool: String,
    program: OsString,
    args: Vec<OsString>,
    parameters: Option<String>,
}

impl ToolCommand {
    /// Starts a command for `program`, labelled `tool` in logs and errors.
    #[must_use]
    pub fn new(tool: impl Into<String>, program: impl AsRef<OsStr>) -> Self {
        Self {
            tool: tool.into(),
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            parameters: None,
        }
    }

    /// Appends one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Appends several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Sets the trailing free-form parameter string.
    #[must_use]
    pub fn parameters(mut self, parameters: impl Into<String>) -> Self {
        let parameters = parameters.into();
        self.parameters = if parameters.trim().is_empty() { None } else { Some(parameters) };
        self
    }

    /// Tool label, e.g. `fastqc`.
    #[must_use]
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Program to execute.
    #[must_use]
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// All arguments passed to the program: the structured arguments followed by the parameter
    /// string split on whitespace.
    #[must_use]
    pub fn arguments(&self) -> Vec<OsString> {
        let mut all = self.args.clone();
        if let Some(parameters) = &self.parameters {
            all.extend(parameters.split_whitespace().map(OsString::from));
        }
        all
    }

    /// Builds a [`Command`] ready to spawn.
    #[must_use]
    pub fn to_process(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.arguments());
        command
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        if let Some(parameters) = &self.parameters {
            write!(f, " {parameters}")?;
        }
        Ok(())
    }
}
