//! Error types for report generation
//!
//! Encoding and writing fail for different reasons and callers usually want to
//! tell them apart, so each stage gets its own variant and keeps its cause.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV encoding failed: {0}")]
    Encode(#[from] csv::Error),

    #[error("Failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid delimiter {0:?}: expected a single ASCII character")]
    InvalidDelimiter(String),

    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid rows: {0}")]
    InvalidRows(String),

    #[error("Failed to parse rows: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    /// True when the failure happened while producing CSV text rather than
    /// while touching the filesystem.
    pub fn is_encode(&self) -> bool {
        matches!(self, ReportError::Encode(_))
    }

    pub fn is_write(&self) -> bool {
        matches!(self, ReportError::Write { .. })
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
