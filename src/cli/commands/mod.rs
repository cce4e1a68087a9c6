//! Command implementations for the csv-report CLI
//!
//! Each command lives in its own module; shared argument groups and input
//! handling live here.

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::AsyncReadExt;

use crate::config::{CsvOverrides, ReportConfig, Settings};
use crate::table::{Row, rows_from_json};

pub mod config;
pub mod generate;
pub mod preview;
pub mod sample;
pub mod version;

/// Delimiter and quoting flags shared by every encoding command
#[derive(Args, Debug, Clone, Default)]
pub struct CsvArgs {
    /// Field delimiter, a single ASCII character
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Quote every field (`--quote false` turns configured quoting off)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub quote: Option<bool>,

    /// Rewrite RFC 3339 timestamps as canonical UTC
    #[arg(long)]
    pub normalize_dates: bool,
}

impl CsvArgs {
    pub fn overrides(&self, directory: Option<String>) -> CsvOverrides {
        CsvOverrides {
            delimiter: self.delimiter.clone(),
            quote_values: self.quote,
            normalize_dates: self.normalize_dates.then_some(true),
            directory,
        }
    }
}

/// An explicit `--config` must exist; the loader itself would silently skip it
pub fn ensure_config_exists(config_path: Option<&str>) -> Result<()> {
    if let Some(path) = config_path {
        if !std::path::Path::new(path).exists() {
            anyhow::bail!("Config file not found: {path}");
        }
    }
    Ok(())
}

/// Load configuration with this invocation's flags layered on top
pub fn load_settings(config_path: Option<&str>, overrides: &CsvOverrides) -> Result<Settings> {
    ensure_config_exists(config_path)?;
    ReportConfig::load_with(config_path, Some(overrides))?.settings()
}

/// Read rows from a JSON file, or from stdin when `input` is `-`
pub async fn read_rows(input: &str) -> Result<Vec<Row>> {
    let text = if input == "-" {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read rows from stdin")?;
        buffer
    } else {
        tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("Failed to read input file: {input}"))?
    };

    let rows = rows_from_json(&text).with_context(|| format!("Invalid rows in {input}"))?;
    tracing::debug!(rows = rows.len(), input, "Loaded rows");
    Ok(rows)
}
