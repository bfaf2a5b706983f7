//! CLI command implementations for readqc.
//!
//! Each submodule implements one subcommand.
//!
//! # Command Categories
//!
//! ## Discovery
//! - [`pairs`] - Resolve read files into samples and write a sample sheet
//!
//! ## Quality control
//! - [`qc`] - Run FastQC and MultiQC over a directory of reads
//! - [`report`] - Render an HTML table linking the FastQC reports
//!
//! ## Trimming
//! - [`trim`] - Run Trimmomatic once per sample

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::uninlined_format_args
)]

pub mod command;
pub mod common;
pub mod pairs;
pub mod qc;
pub mod report;
pub mod trim;
