//! Configuration management for csv-report
//!
//! Settings are layered with figment: embedded defaults, user config,
//! repository config (or an explicit `--config` file), environment
//! variables, then command-line overrides.

use serde::{Deserialize, Serialize};

mod core;
mod smart_load;

pub use self::core::ReportConfig;
pub use self::smart_load::auto;

use crate::encode::Delimiter;
use crate::error::Result;
use crate::report::FormatOptions;

/// Fully merged settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub csv: CsvSettings,

    #[serde(default)]
    pub report: ReportSettings,
}

/// `[csv]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvSettings {
    #[serde(default = "default_delimiter", deserialize_with = "delimiter_text")]
    pub delimiter: String,

    #[serde(default)]
    pub quote_values: bool,

    #[serde(default)]
    pub normalize_dates: bool,

    #[serde(default)]
    pub directory: Option<String>,
}

fn default_delimiter() -> String {
    ",".to_string()
}

/// Environment values like `CSV_REPORT_CSV__DELIMITER=1` arrive as numbers;
/// a digit is still a one-byte delimiter.
fn delimiter_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDelimiter {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match RawDelimiter::deserialize(deserializer)? {
        RawDelimiter::Text(text) => text,
        RawDelimiter::Unsigned(n) => n.to_string(),
        RawDelimiter::Signed(n) => n.to_string(),
    })
}

impl Default for CsvSettings {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            quote_values: false,
            normalize_dates: false,
            directory: None,
        }
    }
}

impl CsvSettings {
    pub fn delimiter(&self) -> Result<Delimiter> {
        Delimiter::parse(&self.delimiter)
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            delimiter: self.delimiter.clone(),
            quote_values: self.quote_values,
            normalize_dates: self.normalize_dates,
        }
    }
}

/// `[report]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text/csv".to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

/// Values supplied on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CsvOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_values: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_dates: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}
