#![deny(unsafe_code)]

//! Structured metric records and TSV writer for readqc.
//!
//! This crate provides:
//! - [`Metric`] trait for record types written to TSV files
//! - [`sample_sheet`] records describing resolved samples
//! - [`resolution`] summary counts for a directory resolution
//! - [`writer`] module for TSV file output

pub mod resolution;
pub mod sample_sheet;
pub mod writer;

use serde::{Deserialize, Serialize};

/// A record type that can be serialized to TSV files.
///
/// All metric types in readqc implement this trait, providing a consistent
/// interface for serialization and identification.
pub trait Metric: Serialize + for<'de> Deserialize<'de> + Clone + Default {
    /// Human-readable name for this metric type.
    ///
    /// Used in error messages and logging when writing metrics files.
    fn metric_name() -> &'static str;
}

/// Formats a count with thousands separators.
///
/// # Examples
///
/// ```
/// use readqc_metrics::format_count;
///
/// assert_eq!(format_count(1234567), "1,234,567");
/// assert_eq!(format_count(123), "123");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub use resolution::ResolutionMetrics;
pub use sample_sheet::{SampleLayout, SampleSheetRecord};
pub use writer::{write_metrics, write_metrics_auto};
