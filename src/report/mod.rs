//! Report generation
//!
//! Turns a [`ReportDetails`] descriptor into a file on disk. Rendering is
//! kept separate from writing: [`render_report`] is pure and
//! [`ReportWriter::generate_csv_report`] adds path resolution and the write.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::encode::{Delimiter, EncodeOptions, encode};
use crate::error::{ReportError, Result};
use crate::table::{Row, Table};

pub mod fixed;

pub use fixed::{FixedSchemaWriter, SAMPLE_COLUMNS, generate_sample_csv, sample_records};

/// File content written when a report has no rows.
pub const NO_RESULTS: &str = "No Results Found";

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(label: &str) -> Result<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "text/csv" | "csv" => Ok(ReportFormat::Csv),
            _ => Err(ReportError::UnsupportedFormat(label.to_string())),
        }
    }
}

/// Delimiter and quoting overrides for a single report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    /// Empty means the default comma
    #[serde(default)]
    pub delimiter: String,

    /// Quote every field
    #[serde(default)]
    pub quote_values: bool,

    /// Rewrite RFC 3339 text cells as canonical UTC timestamps
    #[serde(default)]
    pub normalize_dates: bool,
}

impl FormatOptions {
    pub fn encode_options(&self) -> Result<EncodeOptions> {
        Ok(EncodeOptions::new(
            Delimiter::parse(&self.delimiter)?,
            self.quote_values,
        ))
    }
}

/// Everything needed to produce one report
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetails {
    pub filename: String,

    #[serde(default)]
    pub directory: Option<PathBuf>,

    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default)]
    pub format_options: Option<FormatOptions>,

    /// Rows to render; an empty list produces the [`NO_RESULTS`] placeholder
    #[serde(default, deserialize_with = "null_as_empty")]
    pub result: Vec<Row>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Row>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Row>>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_format() -> String {
    ReportFormat::Csv.mime_type().to_string()
}

impl ReportDetails {
    pub fn new(filename: impl Into<String>, result: Vec<Row>) -> Self {
        Self {
            filename: filename.into(),
            directory: None,
            format: default_format(),
            format_options: None,
            result,
        }
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn with_format_options(mut self, options: FormatOptions) -> Self {
        self.format_options = Some(options);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// `directory/filename`, or just `filename` when no directory is set
    pub fn relative_path(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => dir.join(&self.filename),
            None => PathBuf::from(&self.filename),
        }
    }
}

/// Render the report body without touching the filesystem.
///
/// Returns [`NO_RESULTS`] verbatim when there are no rows; otherwise the
/// header set is computed across all rows and the table is encoded.
pub fn render_report(details: &ReportDetails) -> Result<String> {
    details.format.parse::<ReportFormat>()?;

    if details.result.is_empty() {
        return Ok(NO_RESULTS.to_string());
    }

    let format_options = details.format_options.clone().unwrap_or_default();
    let options = format_options.encode_options()?;
    let table = Table::from_rows(&details.result, format_options.normalize_dates);

    encode(&table, &options)
}

/// Writes reports beneath a caller-chosen root directory.
///
/// Relative `directory`/`filename` values are resolved against `root`, so the
/// result never depends on where the process happened to start unless the
/// caller asks for that with [`ReportWriter::current_dir`].
#[derive(Debug, Clone)]
pub struct ReportWriter {
    root: PathBuf,
}

impl ReportWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writer rooted at the process working directory
    pub fn current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn resolve_path(&self, details: &ReportDetails) -> PathBuf {
        let path = self.root.join(details.relative_path());
        tracing::debug!(path = %path.display(), "Resolved report path");
        path
    }

    /// Render and write a report, returning the path written.
    ///
    /// The target directory must already exist. Writes are not atomic: a
    /// failure part way through can leave a truncated file behind.
    pub async fn generate_csv_report(&self, details: &ReportDetails) -> Result<PathBuf> {
        let path = self.resolve_path(details);
        let content = render_report(details)?;

        write_report(&path, &content).await?;

        if details.result.is_empty() {
            tracing::info!(path = %path.display(), "No results, wrote placeholder report");
        } else {
            tracing::info!(
                rows = details.result.len(),
                "Results successfully written into {}",
                path.display()
            );
        }

        Ok(path)
    }
}

/// Write `content` to `path` as UTF-8.
pub async fn write_report(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content)
        .await
        .map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
}
