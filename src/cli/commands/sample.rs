//! Fixed-schema sample command

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{CsvArgs, load_settings};
use crate::cli::Output;
use crate::report::generate_sample_csv;

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Output file
    #[arg(short, long, value_name = "FILE", default_value = "output.csv")]
    pub output: PathBuf,

    #[command(flatten)]
    pub csv: CsvArgs,
}

pub async fn execute(args: SampleArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let settings = load_settings(config_path, &args.csv.overrides(None))?;
    let delimiter = settings.csv.delimiter()?;

    generate_sample_csv(&args.output, delimiter, settings.csv.quote_values).await?;

    output.success("CSV file created successfully!");
    output.verbose(&format!("Written to {}", args.output.display()));
    Ok(())
}
