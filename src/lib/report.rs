//! HTML tables linking to the FastQC reports of a run.
//!
//! [`QcReportTable::from_directory`] collects the `*_fastqc.html` files written by FastQC,
//! assigns each to a sample and read direction using the same name parsing as sample
//! resolution, and renders one row per sample:
//!
//! ```text
//! | ID | Forward Reads       | Reverse Reads       |
//! | s1 | s1_R1_fastqc.html   | s1_R2_fastqc.html   |
//! ```
//!
//! Runs without any reverse reports render as a two-column `ID | Reads` table.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::errors::{ReadQcError, Result};
use crate::naming::{ReadDirection, ReadName};
use crate::tools::fastqc::REPORT_SUFFIX;
use crate::validation::validate_directory_exists;

/// Default prefix for report links: the file server of a local notebook.
pub const DEFAULT_BASE_URL: &str = "https://localhost:8888/files/";

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prepended to each report path to form the link target.
    pub base_url: String,
    /// Maximum link label width in characters; `None` for unlimited.
    pub max_col_width: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), max_col_width: None }
    }
}

/// Shape of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// `ID | Reads`
    Single,
    /// `ID | Forward Reads | Reverse Reads`
    Paired,
}

impl TableLayout {
    /// Column headers.
    #[must_use]
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Single => &["ID", "Reads"],
            Self::Paired => &["ID", "Forward Reads", "Reverse Reads"],
        }
    }
}

/// A FastQC report file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLink {
    /// Report path, relative to the working directory the links are served from.
    pub path: PathBuf,
    /// Report file name, used as the link label.
    pub file_name: String,
}

/// One sample's reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Sample name.
    pub id: String,
    /// Forward (or only) read report.
    pub forward: Option<ReportLink>,
    /// Reverse read report.
    pub reverse: Option<ReportLink>,
}

/// The reports found in a FastQC output directory, one row per sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QcReportTable {
    rows: Vec<ReportRow>,
}

impl QcReportTable {
    /// Collects the FastQC reports directly inside `output_dir`.
    ///
    /// Report paths are `output_dir` joined with the report file name. A report that repeats a
    /// sample and direction already seen is skipped with a warning.
    ///
    /// # Errors
    /// Returns an error if `output_dir` is not a readable directory
    pub fn from_directory<P: AsRef<Path>>(output_dir: P) -> Result<Self> {
        let output_dir = output_dir.as_ref();
        validate_directory_exists(output_dir, "QC output")?;

        let mut names = Vec::new();
        for entry in WalkDir::new(output_dir).min_depth(1).max_depth(1) {
            let entry = entry
                .map_err(|source| ReadQcError::Walk { path: output_dir.to_path_buf(), source })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str()
                && name.ends_with(REPORT_SUFFIX)
            {
                names.push(name.to_string());
            }
        }
        names.sort();
        debug!("Found {} FastQC report(s) in {}", names.len(), output_dir.display());

        let links = names.into_iter().map(|file_name| ReportLink {
            path: output_dir.join(&file_name),
            file_name,
        });
        Ok(Self::from_links(links))
    }

    /// Builds a table from report links, parsing sample and direction from each file name.
    pub fn from_links<I: IntoIterator<Item = ReportLink>>(links: I) -> Self {
        let mut rows: Vec<ReportRow> = Vec::new();
        for link in links {
            let stem = link.file_name.strip_suffix(REPORT_SUFFIX).unwrap_or(&link.file_name);
            let name = ReadName::parse(stem);
            let index = match rows.iter().position(|row| row.id == name.sample) {
                Some(i) => i,
                None => {
                    rows.push(ReportRow { id: name.sample.clone(), forward: None, reverse: None });
                    rows.len() - 1
                }
            };
            let slot = match name.direction {
                Some(ReadDirection::Reverse) => &mut rows[index].reverse,
                _ => &mut rows[index].forward,
            };
            if slot.is_some() {
                warn!("Ignoring duplicate report for sample '{}': {}", name.sample, link.file_name);
            } else {
                *slot = Some(link);
            }
        }
        rows.sort_by(|a, b| a.id.cmp(&b.id));
        Self { rows }
    }

    /// Rows ordered by sample id.
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Paired if any sample has a reverse report.
    #[must_use]
    pub fn layout(&self) -> TableLayout {
        if self.rows.iter().any(|row| row.reverse.is_some()) {
            TableLayout::Paired
        } else {
            TableLayout::Single
        }
    }

    /// Renders the table as an HTML `<table>` fragment.
    #[must_use]
    pub fn render_html(&self, config: &RenderConfig) -> String {
        let layout = self.layout();
        let mut html =
            String::from("<table border=\"1\" class=\"dataframe\">\n  <thead>\n    <tr>");
        for column in layout.columns() {
            let _ = write!(html, "<th>{}</th>", escape_html(column));
        }
        html.push_str("</tr>\n  </thead>\n  <tbody>\n");

        for row in &self.rows {
            html.push_str("    <tr>");
            let _ = write!(html, "<td>{}</td>", escape_html(&row.id));
            let _ = write!(html, "<td>{}</td>", render_link(row.forward.as_ref(), config));
            if layout == TableLayout::Paired {
                let _ = write!(html, "<td>{}</td>", render_link(row.reverse.as_ref(), config));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("  </tbody>\n</table>\n");
        html
    }

    /// Renders the table wrapped in a minimal standalone HTML page.
    #[must_use]
    pub fn render_document(&self, config: &RenderConfig) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>FastQC reports</title>\n</head>\n<body>\n{}</body>\n</html>\n",
            self.render_html(config)
        )
    }
}

fn render_link(link: Option<&ReportLink>, config: &RenderConfig) -> String {
    let Some(link) = link else {
        return String::new();
    };
    let href = format!("{}{}", config.base_url, link.path.display());
    let label = truncate(&link.file_name, config.max_col_width);
    format!("<a href=\"{}\">{}</a>", escape_html(&href), escape_html(&label))
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
fn truncate(text: &str, width: Option<usize>) -> String {
    match width {
        Some(width) if text.chars().count() > width => {
            let keep = width.saturating_sub(3);
            let mut out: String = text.chars().take(keep).collect();
            out.push_str(&"..."[..width.min(3)]);
            out
        }
        _ => text.to_string(),
    }
}

/// Escapes the five HTML-significant characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
