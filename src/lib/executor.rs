//! Execution of built tool commands.
//!
//! Workflows hand every [`ToolCommand`] to an [`Executor`]. [`ProcessExecutor`] runs the program
//! and waits for it; [`DryRunExecutor`] only prints the command lines.

use std::io::Write;
use std::sync::Mutex;
use std::time::Instant;

use log::{info, warn};

use crate::errors::{ReadQcError, Result};
use crate::logging::format_duration;
use crate::tools::ToolCommand;

/// Runs tool commands.
pub trait Executor {
    /// Runs one command to completion.
    fn run(&self, command: &ToolCommand) -> Result<()>;
}

/// Spawns each command as a child process (no shell) and blocks until it exits.
///
/// The child inherits stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor {
    keep_going: bool,
}

impl ProcessExecutor {
    /// Creates an executor that fails on the first unsuccessful exit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs unsuccessful exits as warnings instead of failing.
    ///
    /// Programs that cannot be started still fail.
    #[must_use]
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }
}

impl Executor for ProcessExecutor {
    fn run(&self, command: &ToolCommand) -> Result<()> {
        info!("Running {}: {}", command.tool(), command);
        let start = Instant::now();

        let status = command.to_process().status().map_err(|source| ReadQcError::ToolSpawn {
            tool: command.tool().to_string(),
            program: command.program().to_string_lossy().into_owned(),
            source,
        })?;

        let elapsed = format_duration(start.elapsed());
        if status.success() {
            info!("{} finished in {elapsed}", command.tool());
            return Ok(());
        }
        if self.keep_going {
            warn!("{} exited with {status} after {elapsed}; continuing", command.tool());
            return Ok(());
        }
        Err(ReadQcError::ToolFailed {
            tool: command.tool().to_string(),
            status,
            command: command.to_string(),
        })
    }
}

/// Writes each command line to a sink instead of running it.
pub struct DryRunExecutor<W: Write> {
    out: Mutex<W>,
}

impl DryRunExecutor<std::io::Stdout> {
    /// Dry run printing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> DryRunExecutor<W> {
    /// Dry run writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Returns the sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write> Executor for DryRunExecutor<W> {
    fn run(&self, command: &ToolCommand) -> Result<()> {
        info!("Dry run, not executing {}", command.tool());
        let mut out = self.out.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        writeln!(out, "{command}")
            .map_err(|source| ReadQcError::Output { description: "dry run".to_string(), source })
    }
}
