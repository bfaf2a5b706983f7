//! Summary counts for resolving a directory of read files into samples.

use serde::{Deserialize, Serialize};

use crate::Metric;

/// Counts collected while resolving one input directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionMetrics {
    /// Files with the target extension, before the exclusion filter.
    pub total_files: u64,
    /// Files dropped because their name contains the exclusion substring.
    pub excluded_files: u64,
    /// Files kept by the filters but without a recognized sequence extension.
    pub unrecognized_files: u64,
    /// Samples with a single read file.
    pub single_end_samples: u64,
    /// Samples with a forward and reverse read file.
    pub paired_end_samples: u64,
}

impl ResolutionMetrics {
    /// Total number of samples resolved.
    #[must_use]
    pub fn total_samples(&self) -> u64 {
        self.single_end_samples + self.paired_end_samples
    }

    /// Number of read files assigned to a sample.
    #[must_use]
    pub fn resolved_files(&self) -> u64 {
        self.single_end_samples + 2 * self.paired_end_samples
    }
}

impl Metric for ResolutionMetrics {
    fn metric_name() -> &'static str {
        "resolution"
    }
}
