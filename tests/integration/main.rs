//! Integration tests for the readqc command line.
//!
//! These tests run the compiled binary against read directories built in temporary
//! directories.

mod helpers;
mod test_error_paths;
mod test_pairs_command;
mod test_qc_command;
mod test_report_command;
mod test_trim_command;
