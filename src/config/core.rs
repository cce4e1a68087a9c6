use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};

use super::{CsvOverrides, Settings, smart_load};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const REPO_CONFIG_STEM: &str = "csv-report";
const ENV_PREFIX: &str = "CSV_REPORT_";

pub struct ReportConfig {
    figment: Figment,
}

impl ReportConfig {
    pub fn load() -> Result<Self> {
        Self::load_with(None, None)
    }

    pub fn load_with(custom_config: Option<&str>, overrides: Option<&CsvOverrides>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // A custom config replaces the user and repository layers
        if let Some(custom_path) = custom_config {
            tracing::debug!(path = custom_path, "Using custom config file");
            figment = figment.merge(smart_load::auto(custom_path));
        } else {
            let user_base = Self::user_config_base_path();
            figment = figment
                .merge(Toml::file(format!("{user_base}.toml")))
                .merge(Json::file(format!("{user_base}.json")))
                .merge(Yaml::file(format!("{user_base}.yaml")))
                .merge(Yaml::file(format!("{user_base}.yml")))
                .merge(Toml::file(format!("{REPO_CONFIG_STEM}.toml")))
                .merge(Json::file(format!("{REPO_CONFIG_STEM}.json")))
                .merge(Yaml::file(format!("{REPO_CONFIG_STEM}.yaml")))
                .merge(Yaml::file(format!("{REPO_CONFIG_STEM}.yml")));
        }

        // CSV_REPORT_CSV__DELIMITER -> csv.delimiter
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(overrides) = overrides {
            tracing::trace!("CONFIG LOAD: Applying CLI overrides");
            figment = figment.merge(Serialized::default("csv", overrides));
        }

        Ok(ReportConfig { figment })
    }

    /// Typed view of the merged configuration
    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .context("Failed to extract csv-report settings")
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    fn user_config_base_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{home}/.config/csv-report/config"),
            Err(_) => "~/.config/csv-report/config".to_string(),
        }
    }
}
