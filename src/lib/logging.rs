//! Enhanced logging utilities for formatted output.
//!
//! This module provides consistent, user-friendly logging for resolution summaries
//! and operation timing.

use std::time::{Duration, Instant};

use itertools::Itertools;
use readqc_metrics::{ResolutionMetrics, format_count};

use crate::pairs::PrefixGroups;
use crate::samples::SampleGroup;

/// Formats a duration in human-readable form.
///
/// # Examples
///
/// ```
/// use readqc_lib::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(45)), "45s");
/// assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
/// assert_eq!(format_duration(Duration::from_secs(5400)), "1h 30m");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        if remaining_secs == 0 { format!("{mins}m") } else { format!("{mins}m {remaining_secs}s") }
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        if mins == 0 { format!("{hours}h") } else { format!("{hours}h {mins}m") }
    }
}

/// Logs a summary of resolving a directory into samples.
pub fn log_resolution_summary(metrics: &ResolutionMetrics) {
    log::info!("Sample Resolution Summary:");
    log::info!("  Matching files: {}", format_count(metrics.total_files));
    log::info!("  Excluded files: {}", format_count(metrics.excluded_files));
    if metrics.unrecognized_files > 0 {
        log::warn!("  Unrecognized files: {}", format_count(metrics.unrecognized_files));
    }
    log::info!("  Resolved files: {}", format_count(metrics.resolved_files()));
    log::info!(
        "  Samples: {} ({} paired-end, {} single-end)",
        format_count(metrics.total_samples()),
        format_count(metrics.paired_end_samples),
        format_count(metrics.single_end_samples)
    );
}

/// Logs each resolved sample with its files, forward first.
pub fn log_samples(samples: &[SampleGroup]) {
    for sample in samples {
        let files = sample.files().iter().map(|f| &f.file_name).join(", ");
        log::info!("  {} [{}]: {files}", sample.id, sample.layout().mode());
    }
}

/// Logs prefix groups, flagging groups that are neither single-end nor paired-end sized.
pub fn log_prefix_groups(groups: &PrefixGroups) {
    log::info!("Found {} prefix group(s):", format_count(groups.len() as u64));
    for (prefix, paths) in groups.iter() {
        let label = prefix.unwrap_or("<none>");
        let names = paths
            .iter()
            .map(|p| p.file_name().map_or_else(String::new, |n| n.to_string_lossy().into_owned()))
            .join(", ");
        if (1..=2).contains(&paths.len()) {
            log::info!("  {label}: {names}");
        } else {
            log::warn!("  {label}: {} files: {names}", paths.len());
        }
    }
}

/// Operation timing and summary helper.
///
/// # Examples
///
/// ```no_run
/// use readqc_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Running QC");
///
/// // ... do work ...
///
/// timer.log_completion(2, "commands");
/// ```
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Logs the completion with a count of processed items.
    pub fn log_completion(&self, count: u64, noun: &str) {
        log::info!(
            "{} completed: {} {} in {}",
            self.operation,
            format_count(count),
            noun,
            format_duration(self.start_time.elapsed())
        );
    }
}
