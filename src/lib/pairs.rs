//! Prefix-based grouping of read files.
//!
//! [`PairResolver`] walks a directory, keeps files with the target extension whose names do not
//! contain an exclusion substring, and groups them by the *prefix* of their name: everything
//! before the first `.fastq` or `.fq`. Files sharing a prefix are assumed to belong together.
//!
//! Prefix equality is a weak notion of sample identity: `s1.R1.fastq` and `s1.R2.fastq` have the
//! prefixes `s1.R1` and `s1.R2` and are **not** grouped. Names without either marker all share
//! the `None` prefix. Both behaviors are kept as-is here; [`crate::samples::SampleResolver`]
//! parses names into sample and read direction instead.

use std::path::{Path, PathBuf};

use ahash::AHashMap;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::errors::{ReadQcError, Result};
use crate::naming::SEQUENCE_MARKERS;
use crate::validation::{normalize_extension, validate_directory_exists};

/// Substring marking files that should be ignored (e.g. unpaired trimmer output).
pub const DEFAULT_EXCLUDE: &str = "junk";

/// Default read file extension.
pub const DEFAULT_EXTENSION: &str = ".fastq";

/// Derives the prefix of a file name: the text before the first `.fastq` or `.fq`.
///
/// Matching is case-sensitive. Returns `None` if neither marker occurs.
///
/// # Example
/// ```
/// use readqc_lib::pairs::derive_prefix;
///
/// assert_eq!(derive_prefix("sample1.R1.fastq"), Some("sample1.R1"));
/// assert_eq!(derive_prefix("s2_R1.fq.gz"), Some("s2_R1"));
/// assert_eq!(derive_prefix("reads.txt"), None);
/// ```
#[must_use]
pub fn derive_prefix(file_name: &str) -> Option<&str> {
    let start = SEQUENCE_MARKERS.iter().filter_map(|marker| file_name.find(marker)).min()?;
    Some(&file_name[..start])
}

/// Extension and exclusion filters applied to file names during a directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    extension: String,
    exclude: String,
}

/// Files kept by a [`FileFilter`] scan, with counts for reporting.
#[derive(Debug, Clone, Default)]
pub struct ScannedFiles {
    /// Kept files, sorted by file name (ties broken by full path).
    pub files: Vec<PathBuf>,
    /// Files with the target extension, before exclusion.
    pub matched: u64,
    /// Files dropped by the exclusion substring.
    pub excluded: u64,
}

impl FileFilter {
    /// Creates a filter for `extension` (with or without a leading dot) and an exclusion substring.
    ///
    /// An empty exclusion substring excludes nothing.
    ///
    /// # Errors
    /// Returns an error if the extension is not a single file extension
    pub fn new(extension: &str, exclude: impl Into<String>) -> Result<Self> {
        Ok(Self { extension: normalize_extension(extension)?, exclude: exclude.into() })
    }

    /// The dotted target extension, e.g. `.fastq`.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The exclusion substring.
    #[must_use]
    pub fn exclude(&self) -> &str {
        &self.exclude
    }

    /// Returns true if the last extension of `file_name` is the target extension.
    ///
    /// Only the final `.`-suffix counts, so `a.fastq.gz` has extension `.gz`.
    #[must_use]
    pub fn has_extension(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == &self.extension[1..])
    }

    /// Returns true if `file_name` contains the exclusion substring.
    #[must_use]
    pub fn is_excluded(&self, file_name: &str) -> bool {
        !self.exclude.is_empty() && file_name.contains(&self.exclude)
    }

    /// Recursively scans `root` and returns the files passing both filters.
    ///
    /// Unreadable subdirectories are not skipped: the first traversal error aborts the scan.
    ///
    /// # Errors
    /// Returns an error if `root` is not a directory or cannot be traversed
    pub fn scan<P: AsRef<Path>>(&self, root: P) -> Result<ScannedFiles> {
        self.scan_with_depth(root.as_ref(), usize::MAX)
    }

    /// Scans only the files directly inside `dir`.
    ///
    /// # Errors
    /// Returns an error if `dir` is not a directory or cannot be read
    pub fn scan_flat<P: AsRef<Path>>(&self, dir: P) -> Result<ScannedFiles> {
        self.scan_with_depth(dir.as_ref(), 1)
    }

    fn scan_with_depth(&self, root: &Path, max_depth: usize) -> Result<ScannedFiles> {
        validate_directory_exists(root, "input")?;

        let mut scanned = ScannedFiles::default();
        let mut kept: Vec<(String, PathBuf)> = Vec::new();

        for entry in WalkDir::new(root).min_depth(1).max_depth(max_depth) {
            let entry =
                entry.map_err(|source| ReadQcError::Walk { path: root.to_path_buf(), source })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                warn!("Skipping file with a non UTF-8 name: {}", path.display());
                continue;
            };
            if !self.has_extension(file_name) {
                continue;
            }
            scanned.matched += 1;
            if self.is_excluded(file_name) {
                debug!("Excluding {} (contains '{}')", path.display(), self.exclude);
                scanned.excluded += 1;
                continue;
            }
            kept.push((file_name.to_string(), path.to_path_buf()));
        }

        kept.sort();
        scanned.files = kept.into_iter().map(|(_, path)| path).collect();
        Ok(scanned)
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self { extension: DEFAULT_EXTENSION.to_string(), exclude: DEFAULT_EXCLUDE.to_string() }
    }
}

/// Paths grouped by prefix, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixGroups {
    groups: Vec<(Option<String>, Vec<PathBuf>)>,
}

impl PrefixGroups {
    /// Returns the paths for a prefix, if any.
    #[must_use]
    pub fn get(&self, prefix: Option<&str>) -> Option<&[PathBuf]> {
        self.groups.iter().find(|(p, _)| p.as_deref() == prefix).map(|(_, paths)| paths.as_slice())
    }

    /// Iterates over `(prefix, paths)` in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &[PathBuf])> {
        self.groups.iter().map(|(prefix, paths)| (prefix.as_deref(), paths.as_slice()))
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of paths across all groups.
    #[must_use]
    pub fn total_paths(&self) -> usize {
        self.groups.iter().map(|(_, paths)| paths.len()).sum()
    }
}

impl FromIterator<(Option<String>, PathBuf)> for PrefixGroups {
    fn from_iter<I: IntoIterator<Item = (Option<String>, PathBuf)>>(iter: I) -> Self {
        let mut groups = Self::default();
        let mut index: AHashMap<Option<String>, usize> = AHashMap::new();
        for (prefix, path) in iter {
            match index.get(&prefix) {
                Some(&i) => groups.groups[i].1.push(path),
                None => {
                    index.insert(prefix.clone(), groups.groups.len());
                    groups.groups.push((prefix, vec![path]));
                }
            }
        }
        groups
    }
}

/// Groups read files under a directory by name prefix.
#[derive(Debug, Clone, Default)]
pub struct PairResolver {
    filter: FileFilter,
}

impl PairResolver {
    /// Creates a resolver using the given file filter.
    #[must_use]
    pub fn new(filter: FileFilter) -> Self {
        Self { filter }
    }

    /// Scans `root` recursively and groups the kept files by prefix.
    ///
    /// Group sizes are not validated.
    ///
    /// # Errors
    /// Returns an error if `root` is not a directory or cannot be traversed
    ///
    /// # Example
    /// ```no_run
    /// use readqc_lib::pairs::{FileFilter, PairResolver};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let resolver = PairResolver::new(FileFilter::new("fastq", "junk")?);
    /// for (prefix, paths) in resolver.resolve("raw_reads")?.iter() {
    ///     println!("{prefix:?}: {paths:?}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn resolve<P: AsRef<Path>>(&self, root: P) -> Result<PrefixGroups> {
        let scanned = self.filter.scan(root)?;
        let groups: PrefixGroups = scanned
            .files
            .into_iter()
            .map(|path| {
                let prefix = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .and_then(derive_prefix)
                    .map(str::to_string);
                (prefix, path)
            })
            .collect();

        if let Some(unmarked) = groups.get(None) {
            warn!(
                "{} file(s) have no .fastq/.fq marker and share a single unnamed group",
                unmarked.len()
            );
        }
        Ok(groups)
    }
}
