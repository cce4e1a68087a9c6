//! Print a report to stdout instead of writing it

use anyhow::Result;
use clap::Args;
use std::io::Write;

use super::{CsvArgs, load_settings, read_rows};
use crate::report::{ReportDetails, render_report};

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// JSON file holding an array of row objects (`-` for stdin)
    #[arg(value_name = "INPUT")]
    pub input: String,

    #[command(flatten)]
    pub csv: CsvArgs,
}

pub async fn execute(args: PreviewArgs, config_path: Option<&str>) -> Result<()> {
    let settings = load_settings(config_path, &args.csv.overrides(None))?;
    let rows = read_rows(&args.input).await?;

    let details = ReportDetails::new("-", rows)
        .with_format(settings.report.format)
        .with_format_options(settings.csv.format_options());
    let content = render_report(&details)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
