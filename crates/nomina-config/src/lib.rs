use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::data::DataConfig;
use self::prompt::PromptConfig;
use self::translator::{ProviderKind, TranslatorConfig};

pub mod data;
pub mod prompt;
pub mod translator;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub translator: TranslatorConfig,
    pub prompt: PromptConfig,
    pub log_format: LogFormat,
}

impl Config {
    /// Defaults with `NOMINA_*` environment overrides applied
    pub fn new() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Read a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io(e),
        })?;
        let config: Config = serde_json::from_str(&data)?;
        config.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from `lookup` (normally the process environment)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(provider) = lookup("NOMINA_PROVIDER") {
            self.translator.provider =
                provider
                    .parse::<ProviderKind>()
                    .map_err(|message| ConfigError::InvalidValue {
                        key: "NOMINA_PROVIDER".to_string(),
                        message,
                    })?;
        }

        if let Some(path) = lookup("NOMINA_COUNTRY_CODES") {
            self.data.country_codes = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("NOMINA_LANGUAGE_CODES") {
            self.data.language_codes = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("NOMINA_TRANSLATIONS") {
            self.data.translations = Some(PathBuf::from(path));
        }

        if let Some(quit) = lookup("NOMINA_QUIT_COMMAND") {
            if quit.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "NOMINA_QUIT_COMMAND".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            self.prompt.quit_command = quit.trim().to_string();
        }

        if let Some(format) = lookup("NOMINA_LOG_FORMAT") {
            self.log_format = match format.to_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => {
                    return Err(ConfigError::InvalidValue {
                        key: "NOMINA_LOG_FORMAT".to_string(),
                        message: format!("unknown format '{other}'"),
                    });
                }
            };
        }

        Ok(self)
    }
}
