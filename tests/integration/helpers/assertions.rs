//! Custom assertion helpers for integration tests.

#![allow(dead_code)]

use std::process::Output;

/// Asserts that the command succeeded, showing its stderr otherwise.
///
/// # Panics
///
/// Panics if the command exited unsuccessfully.
pub fn assert_success(output: &Output, what: &str) {
    assert!(
        output.status.success(),
        "{what} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Asserts that the command failed with an error message containing `expected`.
///
/// # Panics
///
/// Panics if the command succeeded or its stderr lacks `expected`.
pub fn assert_failure_contains(output: &Output, expected: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "Command should have failed, stderr: {stderr}");
    assert!(stderr.contains(expected), "Expected '{expected}' in stderr: {stderr}");
}

/// Returns stdout as lines.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect()
}
