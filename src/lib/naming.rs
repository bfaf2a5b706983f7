//! Read file naming conventions.
//!
//! Sequencing read files carry the sample they belong to and, for paired-end data, the read
//! direction in their names. This module parses those names into a [`ReadName`]:
//!
//! | File name                          | Sample        | Direction |
//! |------------------------------------|---------------|-----------|
//! | `tumor_R1.fastq`                   | `tumor`       | forward   |
//! | `tumor.R2.fq.gz`                   | `tumor`       | reverse   |
//! | `S7_S7_L001_R1_001.fastq.gz`       | `S7_S7_L001`  | forward   |
//! | `SRR390728_2.fastq`                | `SRR390728`   | reverse   |
//! | `control.fastq`                    | `control`     | none      |
//!
//! Tokens are delimited by `_` and `.`; direction tags are matched case-insensitively.

use std::fmt;

/// Compression suffixes that may follow a sequence extension.
const COMPRESSION_SUFFIXES: [&str; 2] = [".gz", ".bz2"];

/// Recognized sequence file extensions.
pub const SEQUENCE_MARKERS: [&str; 2] = [".fastq", ".fq"];

/// Direction of a read within a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReadDirection {
    /// First read of the pair (R1).
    Forward,
    /// Second read of the pair (R2).
    Reverse,
}

impl ReadDirection {
    /// Parses an `R1`/`R2` tag (case-insensitive).
    #[must_use]
    pub fn from_tag(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("r1") {
            Some(Self::Forward)
        } else if token.eq_ignore_ascii_case("r2") {
            Some(Self::Reverse)
        } else {
            None
        }
    }

    /// Parses a bare `1`/`2` mate number.
    #[must_use]
    pub fn from_mate_number(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Forward),
            "2" => Some(Self::Reverse),
            _ => None,
        }
    }
}

impl fmt::Display for ReadDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "R1"),
            Self::Reverse => write!(f, "R2"),
        }
    }
}

/// A read file name split into sample identity and read direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReadName {
    /// The sample the file belongs to.
    pub sample: String,
    /// Read direction, if the name carries one.
    pub direction: Option<ReadDirection>,
}

impl ReadName {
    /// Parses a file stem (a file name with its sequence extension removed).
    ///
    /// Never fails: a stem without a recognizable direction tag is a sample on its own.
    ///
    /// # Example
    /// ```
    /// use readqc_lib::naming::{ReadDirection, ReadName};
    ///
    /// let name = ReadName::parse("S1_L001_R2_001");
    /// assert_eq!(name.sample, "S1_L001");
    /// assert_eq!(name.direction, Some(ReadDirection::Reverse));
    /// ```
    #[must_use]
    pub fn parse(stem: &str) -> Self {
        let tokens = tokenize(stem);
        let n = tokens.len();

        let found = if n < 2 {
            None
        } else if let Some(direction) = ReadDirection::from_tag(tokens[n - 1].1) {
            Some((tokens[n - 1].0, direction))
        } else if n >= 3
            && is_chunk_number(tokens[n - 1].1)
            && let Some(direction) = ReadDirection::from_tag(tokens[n - 2].1)
        {
            Some((tokens[n - 2].0, direction))
        } else {
            ReadDirection::from_mate_number(tokens[n - 1].1).map(|d| (tokens[n - 1].0, d))
        };

        match found {
            // The tag starts right after a delimiter, so `start - 1` is the delimiter itself.
            Some((start, direction)) if start > 1 => {
                Self { sample: stem[..start - 1].to_string(), direction: Some(direction) }
            }
            _ => Self { sample: stem.to_string(), direction: None },
        }
    }
}

/// Splits a file name into its stem and sequence extension (including any compression suffix).
///
/// Matching is case-insensitive. Returns `None` if the name does not end in `.fastq` or `.fq`,
/// optionally followed by `.gz` or `.bz2`, or if nothing precedes the extension.
///
/// # Example
/// ```
/// use readqc_lib::naming::strip_sequence_extension;
///
/// assert_eq!(strip_sequence_extension("a_R1.fastq.gz"), Some(("a_R1", ".fastq.gz")));
/// assert_eq!(strip_sequence_extension("a.FQ"), Some(("a", ".FQ")));
/// assert_eq!(strip_sequence_extension("a.bam"), None);
/// ```
#[must_use]
pub fn strip_sequence_extension(file_name: &str) -> Option<(&str, &str)> {
    // ASCII lowercasing keeps byte offsets identical to the input name.
    let lower = file_name.to_ascii_lowercase();

    let end = COMPRESSION_SUFFIXES
        .iter()
        .find(|suffix| lower.ends_with(*suffix))
        .map_or(lower.len(), |suffix| lower.len() - suffix.len());

    let marker = SEQUENCE_MARKERS.iter().find(|marker| lower[..end].ends_with(*marker))?;
    let stem_end = end - marker.len();
    if stem_end == 0 {
        return None;
    }
    Some((&file_name[..stem_end], &file_name[stem_end..]))
}

/// Returns whether an extension string (as produced by [`strip_sequence_extension`]) is compressed.
#[must_use]
pub fn is_compressed(extension: &str) -> bool {
    let lower = extension.to_ascii_lowercase();
    COMPRESSION_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// Splits on `_` and `.`, returning each token with its byte offset.
fn tokenize(stem: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (idx, _) in stem.match_indices(['_', '.']) {
        tokens.push((start, &stem[start..idx]));
        start = idx + 1;
    }
    tokens.push((start, &stem[start..]));
    tokens
}

/// Illumina chunk numbers such as the `001` in `_R1_001`.
fn is_chunk_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
