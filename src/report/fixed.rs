//! Fixed-schema CSV writer
//!
//! Columns are known up front and every record supplies one cell per column.
//! Date-time cells are rendered as ISO-8601 (`2025-03-01T00:06:29.683Z`);
//! everything else passes through as-is.

use chrono::{DateTime, Utc};
use std::path::Path;

use super::write_report;
use crate::encode::{Delimiter, EncodeOptions, encode};
use crate::error::Result;
use crate::table::{Cell, Table};

pub const SAMPLE_COLUMNS: [&str; 3] = ["Name", "Age", "City"];

/// 2025-03-01T00:06:29.683Z
const SAMPLE_TIMESTAMP_MILLIS: i64 = 1_740_787_589_683;

pub struct FixedSchemaWriter {
    columns: Vec<String>,
    options: EncodeOptions,
}

impl FixedSchemaWriter {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>, options: EncodeOptions) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            options,
        }
    }

    /// Encode `records` under this writer's header.
    pub fn encode(&self, records: &[Vec<Cell>]) -> Result<String> {
        let table = Table::with_columns(self.columns.iter().cloned(), records);
        encode(&table, &self.options)
    }

    /// Encode then write to `path`. Nothing is written if encoding fails.
    pub async fn write(&self, path: &Path, records: &[Vec<Cell>]) -> Result<()> {
        let content = self.encode(records)?;
        write_report(path, &content).await?;
        tracing::info!(path = %path.display(), records = records.len(), "CSV file created successfully");
        Ok(())
    }
}

pub fn sample_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(SAMPLE_TIMESTAMP_MILLIS).unwrap_or_default()
}

/// Three records carrying the same instant in different shapes: a date-time
/// value, its `Display` string, and a raw date-like string.
pub fn sample_records() -> Vec<Vec<Cell>> {
    let ts = sample_timestamp();
    vec![
        vec![Cell::from("John"), Cell::from(28), Cell::from(ts)],
        vec![Cell::from("Jane"), Cell::from(32), Cell::from(ts.to_string())],
        vec![Cell::from("Peter"), Cell::from(22), Cell::from("2025-03-01 00:06:29.683")],
    ]
}

/// Write the bundled sample records to `path`.
pub async fn generate_sample_csv(path: &Path, delimiter: Delimiter, quote_values: bool) -> Result<()> {
    FixedSchemaWriter::new(SAMPLE_COLUMNS, EncodeOptions::new(delimiter, quote_values))
        .write(path, &sample_records())
        .await
}
