//! Sample sheet records.
//!
//! One [`SampleSheetRecord`] is written per resolved sample. Single-end samples
//! leave the `reverse` column empty.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Metric;

/// Sequencing layout of a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleLayout {
    /// One read file with no mate.
    #[default]
    SingleEnd,
    /// A forward and a reverse read file.
    PairedEnd,
}

impl SampleLayout {
    /// Returns the short label used in logs and the trimmer's mode argument.
    #[must_use]
    pub fn mode(&self) -> &'static str {
        match self {
            Self::SingleEnd => "SE",
            Self::PairedEnd => "PE",
        }
    }
}

impl fmt::Display for SampleLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleEnd => write!(f, "single-end"),
            Self::PairedEnd => write!(f, "paired-end"),
        }
    }
}

/// A single row of the sample sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSheetRecord {
    /// Sample identifier derived from the file names.
    pub sample: String,
    /// Single-end or paired-end.
    pub layout: SampleLayout,
    /// Path to the forward (or only) read file.
    pub forward: String,
    /// Path to the reverse read file; empty for single-end samples.
    pub reverse: String,
}

impl Metric for SampleSheetRecord {
    fn metric_name() -> &'static str {
        "sample sheet"
    }
}
