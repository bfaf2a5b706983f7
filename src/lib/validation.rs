//! Input validation utilities
//!
//! This module provides common validation functions for command-line parameters
//! and paths with consistent error messages.
//!
//! All validation functions use structured error types from [`crate::errors`].

use crate::errors::{ReadQcError, Result};
use std::fmt::Display;
use std::path::Path;

/// Validate that a directory exists
///
/// # Arguments
/// * `path` - Path to validate
/// * `description` - Human-readable role of the directory (e.g., "input", "QC output")
///
/// # Errors
/// Returns an error if the path does not exist or is not a directory
///
/// # Example
/// ```
/// use readqc_lib::validation::validate_directory_exists;
///
/// let result = validate_directory_exists("/nonexistent/reads", "input");
/// assert!(result.is_err());
/// ```
pub fn validate_directory_exists<P: AsRef<Path>>(path: P, description: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let reason = if !path_ref.exists() {
        "Directory does not exist"
    } else if !path_ref.is_dir() {
        "Path is not a directory"
    } else {
        return Ok(());
    };
    Err(ReadQcError::InvalidDirectory {
        description: description.to_string(),
        path: path_ref.to_path_buf(),
        reason: reason.to_string(),
    })
}

/// Validate that a value is positive (> 0)
///
/// # Arguments
/// * `value` - Value to validate
/// * `name` - Name of the parameter for error messages
///
/// # Errors
/// Returns an error if the value is not positive
///
/// # Example
/// ```
/// use readqc_lib::validation::validate_positive;
///
/// validate_positive(20, "threads").unwrap();
///
/// let result = validate_positive(0, "threads");
/// assert!(result.is_err());
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn validate_positive<T: Ord + Display + Default>(value: T, name: &str) -> Result<()> {
    if value <= T::default() {
        return Err(ReadQcError::InvalidParameter {
            parameter: name.to_string(),
            reason: format!("Must be positive (> 0), got: {value}"),
        });
    }
    Ok(())
}

/// Normalize a file extension to its dotted form.
///
/// `fastq` and `.fastq` both become `.fastq`.
///
/// # Errors
/// Returns an error if the extension is empty, is only a dot, or contains a path separator
///
/// # Example
/// ```
/// use readqc_lib::validation::normalize_extension;
///
/// assert_eq!(normalize_extension("fastq").unwrap(), ".fastq");
/// assert_eq!(normalize_extension(".fq").unwrap(), ".fq");
/// assert!(normalize_extension("").is_err());
/// ```
pub fn normalize_extension(extension: &str) -> Result<String> {
    let bare = extension.strip_prefix('.').unwrap_or(extension);
    if bare.is_empty() || bare.contains('.') || bare.contains(['/', '\\']) {
        return Err(ReadQcError::InvalidParameter {
            parameter: "extension".to_string(),
            reason: format!("Expected a single file extension such as 'fastq', got: '{extension}'"),
        });
    }
    Ok(format!(".{bare}"))
}

/// Validate that a free-form parameter string is not blank.
///
/// # Errors
/// Returns an error if the value is empty or whitespace only
pub fn validate_not_blank(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReadQcError::InvalidParameter {
            parameter: name.to_string(),
            reason: "Must not be empty".to_string(),
        });
    }
    Ok(())
}
