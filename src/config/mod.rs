use crate::constants::{DEFAULT_DATABASE_PATH, LOG_FILE_NAME, chart, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

pub mod paths;
pub mod validation;

use validation::validate_config;

const RULE: &str = "────────────────────────────────────";

/// Settings stored in `config.toml`.
///
/// Every field has a default, so a partial (or empty) file is valid.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// SQLite file with the `Match`, `Player` and `Team` tables
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Custom log file; `None` logs to the default log directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Length of the longest bar in horizontal charts
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_database_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}

fn default_chart_width() -> usize {
    chart::DEFAULT_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: default_database_path(),
            log_file_path: None,
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Stored config (or defaults when no file exists yet), with environment
    /// overrides applied, then validated.
    ///
    /// # Environment Variables
    /// - `GOALSCOPE_DATABASE` - database path
    /// - `GOALSCOPE_LOG_FILE` - log file path
    /// - `GOALSCOPE_CHART_WIDTH` - chart width, ignored when not a number
    pub async fn load() -> Result<Self, AppError> {
        let mut config = Self::load_or_default(&paths::get_config_path()).await?;
        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` when it exists, defaults otherwise. No overrides, no validation.
    pub async fn load_or_default(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Applies overrides from an environment lookup.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(database_path) = lookup(env_vars::DATABASE) {
            self.database_path = database_path;
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(width) = lookup(env_vars::CHART_WIDTH).and_then(|s| s.parse::<usize>().ok()) {
            self.chart_width = width;
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.database_path, &self.log_file_path, self.chart_width)
    }

    /// Writes the config to the default location.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&paths::get_config_path()).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Prints the effective configuration for --list-config.
    pub async fn display() -> Result<(), AppError> {
        let config_path = paths::get_config_path();
        let config = Config::load().await?;
        let exists = Path::new(&config_path).exists();
        println!("{}", config.describe(&config_path, exists));
        Ok(())
    }

    /// Human readable summary of the settings, one section per value.
    pub fn describe(&self, config_path: &str, file_exists: bool) -> String {
        let mut sections = vec![
            format!("\nCurrent Configuration\n{RULE}"),
            if file_exists {
                format!("Config Location:\n{config_path}")
            } else {
                format!("Config Location:\n{config_path}\n(Not created yet, showing defaults)")
            },
            format!("Database:\n{}", self.database_path),
            format!("Chart Width:\n{} characters", self.chart_width),
        ];
        sections.push(match &self.log_file_path {
            Some(custom_path) => format!("Log File Location:\n{custom_path}"),
            None => format!(
                "Log File Location:\n{}/{LOG_FILE_NAME}\n(Default location)",
                paths::get_log_dir_path()
            ),
        });

        let (header, body) = sections.split_at(1);
        format!("{}\n{}", header[0], body.join(&format!("\n{RULE}\n")))
    }

    /// Writes the config as TOML to `path`, creating parent directories.
    ///
    /// # Errors
    /// * `AppError::Config` - `path` has no parent directory
    /// * `AppError::TomlSerialize` - serialization failed
    /// * `AppError::Io` - directory creation or the write failed
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let parent = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;
        fs::create_dir_all(parent).await?;
        fs::write(path, toml::to_string_pretty(self)?).await?;
        Ok(())
    }

    /// Parses the TOML file at `path`.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        Ok(toml::from_str(&content)?)
    }
}
