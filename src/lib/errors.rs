//! Custom error types for readqc operations.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for readqc operations
pub type Result<T> = std::result::Result<T, ReadQcError>;

/// Error type for readqc operations
#[derive(Error, Debug)]
pub enum ReadQcError {
    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// A directory that must exist is missing or is not a directory
    #[error("Invalid {description} directory '{path}': {reason}")]
    InvalidDirectory {
        /// Human-readable role of the directory (e.g. "input")
        description: String,
        /// Path to the directory
        path: PathBuf,
        /// Explanation of the problem
        reason: String,
    },

    /// A sample resolved to a set of read files that is neither single-end nor paired-end
    #[error("Unexpected fastq structure. Files: {}", format_files(.files))]
    MalformedSampleGroup {
        /// The offending files, in the order they were resolved
        files: Vec<PathBuf>,
    },

    /// No read files matched the input filters
    #[error("No files matching '*{extension}' found in '{directory}'")]
    NoInputFiles {
        /// Directory that was searched
        directory: PathBuf,
        /// Extension that was searched for
        extension: String,
    },

    /// An external tool could not be started
    #[error("Failed to start {tool} ('{program}'): {source}")]
    ToolSpawn {
        /// Tool name used in logs
        tool: String,
        /// Program that was executed
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An external tool exited unsuccessfully
    #[error("{tool} failed with {status}: {command}")]
    ToolFailed {
        /// Tool name used in logs
        tool: String,
        /// Exit status of the process
        status: ExitStatus,
        /// The rendered command line
        command: String,
    },

    /// Failed to write output
    #[error("Failed to write {description}: {source}")]
    Output {
        /// What was being written
        description: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error while walking a directory
    #[error("Failed to read directory '{path}': {source}")]
    Walk {
        /// Directory being traversed
        path: PathBuf,
        /// Underlying traversal error
        #[source]
        source: walkdir::Error,
    },
}

/// Renders a file list as `['a', 'b']`.
fn format_files(files: &[PathBuf]) -> String {
    let quoted: Vec<String> = files.iter().map(|f| format!("'{}'", f.display())).collect();
    format!("[{}]", quoted.join(", "))
}
