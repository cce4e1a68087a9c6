//! Configuration command implementations

use anyhow::Result;

use super::ensure_config_exists;
use crate::cli::{ConfigCommands, Output};
use crate::config::ReportConfig;

/// Execute config commands
pub async fn execute(cmd: ConfigCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config_path, output).await,
    }
}

async fn show(config_path: Option<&str>, output: &Output) -> Result<()> {
    ensure_config_exists(config_path)?;
    let config = ReportConfig::load_with(config_path, None)?;
    // Surface type errors (e.g. quote_values = "yes") before printing
    config.settings()?;

    output.verbose(match config_path {
        Some(_) => "Showing defaults merged with the custom config file",
        None => "Showing defaults merged with user, repository and environment config",
    });

    println!("{}", serde_json::to_string_pretty(&config.get_full_config()?)?);
    Ok(())
}
