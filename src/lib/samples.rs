//! Resolution of read files into samples.
//!
//! Each file name is parsed with [`ReadName`] into a sample name and an optional read
//! direction. Files are grouped by sample name and every group is checked to be either a single
//! read file or one forward and one reverse file. Paired groups always hold the forward file
//! first, whatever order the files were discovered in.

use std::path::{Path, PathBuf};

use ahash::AHashMap;
use log::{debug, warn};
use readqc_metrics::{ResolutionMetrics, SampleLayout, SampleSheetRecord};

use crate::errors::{ReadQcError, Result};
use crate::naming::{ReadDirection, ReadName, is_compressed, strip_sequence_extension};
use crate::pairs::{FileFilter, derive_prefix};

/// A read file and everything derived from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceFile {
    /// Path as discovered.
    pub path: PathBuf,
    /// Final path component.
    pub file_name: String,
    /// The last `.`-suffix of the file name, including the dot (empty if none).
    pub extension: String,
    /// Recognized sequence extension (e.g. `.fastq.gz`), if any.
    pub sequence_extension: Option<String>,
    /// Prefix as computed by [`derive_prefix`].
    pub prefix: Option<String>,
    /// Parsed sample name and direction; `None` without a recognized sequence extension.
    pub name: Option<ReadName>,
}

impl SequenceFile {
    /// Builds a `SequenceFile` from a path, parsing its file name.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let file_name =
            path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        let stripped = strip_sequence_extension(&file_name);
        let sequence_extension = stripped.map(|(_, ext)| ext.to_string());
        let name = stripped.map(|(stem, _)| ReadName::parse(stem));
        let prefix = derive_prefix(&file_name).map(str::to_string);
        Self { path, file_name, extension, sequence_extension, prefix, name }
    }

    /// Read direction parsed from the file name.
    #[must_use]
    pub fn direction(&self) -> Option<ReadDirection> {
        self.name.as_ref().and_then(|name| name.direction)
    }

    /// Returns true if the file carries a compression suffix.
    #[must_use]
    pub fn is_compressed(&self) -> bool {
        self.sequence_extension.as_deref().is_some_and(is_compressed)
    }
}

/// The read files of one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reads {
    /// One read file.
    Single(SequenceFile),
    /// Forward and reverse read files.
    Paired {
        /// R1
        forward: SequenceFile,
        /// R2
        reverse: SequenceFile,
    },
}

/// A sample and its read files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGroup {
    /// Sample name shared by the read files.
    pub id: String,
    /// The read files.
    pub reads: Reads,
}

impl SampleGroup {
    /// Builds a group from the files of one sample, resolving read direction.
    ///
    /// # Errors
    /// Returns [`ReadQcError::MalformedSampleGroup`] unless `files` is a single file or exactly
    /// one forward and one reverse file
    pub fn from_files(id: impl Into<String>, files: Vec<SequenceFile>) -> Result<Self> {
        let id = id.into();
        let mut files = files.into_iter();
        let reads = match (files.next(), files.next(), files.next()) {
            (Some(file), None, None) => {
                if file.direction() == Some(ReadDirection::Reverse) {
                    warn!("Sample '{id}' only has a reverse read file: {}", file.path.display());
                }
                Reads::Single(file)
            }
            (Some(a), Some(b), None) => match (a.direction(), b.direction()) {
                (Some(ReadDirection::Forward), Some(ReadDirection::Reverse)) => {
                    Reads::Paired { forward: a, reverse: b }
                }
                (Some(ReadDirection::Reverse), Some(ReadDirection::Forward)) => {
                    Reads::Paired { forward: b, reverse: a }
                }
                _ => {
                    return Err(ReadQcError::MalformedSampleGroup { files: vec![a.path, b.path] });
                }
            },
            (first, second, third) => {
                let files = first.into_iter().chain(second).chain(third).chain(files);
                return Err(ReadQcError::MalformedSampleGroup {
                    files: files.map(|f| f.path).collect(),
                });
            }
        };
        Ok(Self { id, reads })
    }

    /// Single-end or paired-end.
    #[must_use]
    pub fn layout(&self) -> SampleLayout {
        match self.reads {
            Reads::Single(_) => SampleLayout::SingleEnd,
            Reads::Paired { .. } => SampleLayout::PairedEnd,
        }
    }

    /// The read files, forward first.
    #[must_use]
    pub fn files(&self) -> Vec<&SequenceFile> {
        match &self.reads {
            Reads::Single(file) => vec![file],
            Reads::Paired { forward, reverse } => vec![forward, reverse],
        }
    }

    /// The read file paths, forward first.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files().into_iter().map(|file| file.path.clone()).collect()
    }

    /// Converts the group into a sample sheet row.
    #[must_use]
    pub fn to_record(&self) -> SampleSheetRecord {
        let (forward, reverse) = match &self.reads {
            Reads::Single(file) => (display(&file.path), String::new()),
            Reads::Paired { forward, reverse } => (display(&forward.path), display(&reverse.path)),
        };
        SampleSheetRecord { sample: self.id.clone(), layout: self.layout(), forward, reverse }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Outcome of resolving a directory into samples.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Samples in order of first appearance (sorted file-name order).
    pub samples: Vec<SampleGroup>,
    /// Files that passed the filters but have no recognized sequence extension.
    pub unrecognized: Vec<PathBuf>,
    /// Counts for reporting.
    pub metrics: ResolutionMetrics,
}

impl Resolution {
    /// Sample sheet rows for all samples.
    #[must_use]
    pub fn records(&self) -> Vec<SampleSheetRecord> {
        self.samples.iter().map(SampleGroup::to_record).collect()
    }
}

/// Resolves read files under a directory into [`SampleGroup`]s.
#[derive(Debug, Clone, Default)]
pub struct SampleResolver {
    filter: FileFilter,
}

impl SampleResolver {
    /// Creates a resolver using the given file filter.
    #[must_use]
    pub fn new(filter: FileFilter) -> Self {
        Self { filter }
    }

    /// The file filter applied during the scan.
    #[must_use]
    pub fn filter(&self) -> &FileFilter {
        &self.filter
    }

    /// Recursively scans `root` and resolves the kept files into samples.
    ///
    /// # Errors
    /// Returns an error if `root` cannot be traversed or a sample's files are neither
    /// single-end nor a forward/reverse pair
    ///
    /// # Example
    /// ```no_run
    /// use readqc_lib::pairs::FileFilter;
    /// use readqc_lib::samples::SampleResolver;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let resolver = SampleResolver::new(FileFilter::new("fastq", "junk")?);
    /// let resolution = resolver.resolve("raw_reads")?;
    /// for sample in &resolution.samples {
    ///     println!("{} ({})", sample.id, sample.layout());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn resolve<P: AsRef<Path>>(&self, root: P) -> Result<Resolution> {
        let scanned = self.filter.scan(root)?;
        let (samples, unrecognized) = group_files(scanned.files)?;

        let paired = samples.iter().filter(|s| s.layout() == SampleLayout::PairedEnd).count();
        let metrics = ResolutionMetrics {
            total_files: scanned.matched,
            excluded_files: scanned.excluded,
            unrecognized_files: unrecognized.len() as u64,
            single_end_samples: (samples.len() - paired) as u64,
            paired_end_samples: paired as u64,
        };
        Ok(Resolution { samples, unrecognized, metrics })
    }
}

/// Groups files by parsed sample name, preserving the order of first appearance.
///
/// Files whose names carry no recognized sequence extension are returned separately.
///
/// # Errors
/// Returns an error if any sample's files do not form a single-end or paired-end group
pub fn group_files(files: Vec<PathBuf>) -> Result<(Vec<SampleGroup>, Vec<PathBuf>)> {
    let mut buckets: Vec<(String, Vec<SequenceFile>)> = Vec::new();
    let mut index: AHashMap<String, usize> = AHashMap::new();
    let mut unrecognized = Vec::new();

    for path in files {
        let file = SequenceFile::new(path);
        let Some(sample) = file.name.as_ref().map(|name| name.sample.clone()) else {
            warn!("Skipping file without a .fastq/.fq extension: {}", file.path.display());
            unrecognized.push(file.path);
            continue;
        };
        debug!("{} -> sample '{}' ({:?})", file.file_name, sample, file.direction());
        match index.get(&sample) {
            Some(&i) => buckets[i].1.push(file),
            None => {
                index.insert(sample.clone(), buckets.len());
                buckets.push((sample, vec![file]));
            }
        }
    }

    let samples = buckets
        .into_iter()
        .map(|(id, files)| SampleGroup::from_files(id, files))
        .collect::<Result<Vec<_>>>()?;
    Ok((samples, unrecognized))
}
