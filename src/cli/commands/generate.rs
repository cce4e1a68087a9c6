//! Heterogeneous-schema report command

use anyhow::{Context, Result};
use clap::Args;

use super::{CsvArgs, load_settings, read_rows};
use crate::cli::Output;
use crate::report::{ReportDetails, ReportWriter};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// JSON file holding an array of row objects (`-` for stdin)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Report filename
    #[arg(short, long, value_name = "FILE")]
    pub output: String,

    /// Directory the report is written into (must exist)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Format label, e.g. text/csv
    #[arg(long, value_name = "LABEL")]
    pub format: Option<String>,

    #[command(flatten)]
    pub csv: CsvArgs,
}

pub async fn execute(args: GenerateArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let settings = load_settings(config_path, &args.csv.overrides(args.dir.clone()))?;
    let rows = read_rows(&args.input).await?;

    let mut details = ReportDetails::new(args.output, rows)
        .with_format(args.format.unwrap_or(settings.report.format))
        .with_format_options(settings.csv.format_options());
    if let Some(dir) = settings.csv.directory {
        details = details.with_directory(dir);
    }

    output.verbose(&format!(
        "Delimiter {:?}, quoting {}",
        settings.csv.delimiter, settings.csv.quote_values
    ));

    let writer = ReportWriter::current_dir().context("Failed to resolve working directory")?;
    let path = writer.generate_csv_report(&details).await?;

    if details.result.is_empty() {
        output.warning("No rows in input, wrote \"No Results Found\"");
    }
    output.success(&format!("Report generated at: {}", path.display()));

    Ok(())
}
