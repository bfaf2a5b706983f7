//! Render an HTML table of FastQC reports.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fgoxide::io::Io;
use log::{debug, info};
use readqc_lib::report::{DEFAULT_BASE_URL, QcReportTable, RenderConfig, TableLayout};
use readqc_lib::validation::validate_positive;

use crate::commands::command::Command;

/// Render an HTML table linking every FastQC report in a directory.
#[derive(Debug, Parser)]
#[command(
    name = "report",
    about = "\x1b[38;5;72m[QC]\x1b[0m             \x1b[36mLink FastQC reports in an HTML table\x1b[0m",
    long_about = r#"
Render an HTML table with one row per sample linking to its FastQC reports.

The table has the columns ID, Forward Reads and Reverse Reads when any reverse report is found,
and ID and Reads otherwise. Links are the base URL followed by the report path.

EXAMPLES:

  # Standalone page served by a local notebook
  readqc report -i qc -o qc_reports.html

  # Table fragment with relative links and short labels
  readqc report -i qc -o table.html --base-url "" --max-col-width 30 --fragment
"#
)]
pub struct Report {
    /// Directory containing the FastQC reports
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output HTML file
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Prefix of each report link
    #[arg(long = "base-url", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Truncate link labels longer than this many characters
    #[arg(long = "max-col-width")]
    pub max_col_width: Option<usize>,

    /// Write only the <table> element
    #[arg(long = "fragment", default_value = "false")]
    pub fragment: bool,
}

impl Command for Report {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        if let Some(width) = self.max_col_width {
            validate_positive(width, "max-col-width")?;
        }

        let table = QcReportTable::from_directory(&self.input)?;
        let layout = match table.layout() {
            TableLayout::Paired => "paired-end",
            TableLayout::Single => "single-end",
        };
        info!("Found reports for {} sample(s) ({layout})", table.rows().len());

        let config =
            RenderConfig { base_url: self.base_url.clone(), max_col_width: self.max_col_width };
        let html =
            if self.fragment { table.render_html(&config) } else { table.render_document(&config) };

        let mut writer = Io::default()
            .new_writer(&self.output)
            .with_context(|| format!("Failed to create report table: {}", self.output.display()))?;
        writer
            .write_all(html.as_bytes())
            .and_then(|()| writer.flush())
            .with_context(|| format!("Failed to write report table: {}", self.output.display()))?;
        info!("Wrote report table to {}", self.output.display());
        Ok(())
    }
}
