//! Configuration module for tagger
//!
//! Manages where taxonomies live, the default locale and export formatting.
//! Configuration is stored in the user's config directory
//! (`~/.config/tagger/config.toml` on Linux) and can be overridden per field
//! with `TAGGER_*` environment variables (e.g. `TAGGER_LOCALE=de`).

mod setup;

pub use setup::first_time_setup;

use crate::export::DEFAULT_DELIMITER;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by [`TaggerConfig::set`] and [`TaggerConfig::get`]
pub const CONFIG_KEYS: [&str; 4] = ["taxonomy_dir", "locale", "delimiter", "quiet"];

/// Prefix of environment variables overriding config fields
pub const ENV_PREFIX: &str = "TAGGER";

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

/// Split a `key=value` setting
///
/// Only the key is trimmed; whitespace in the value is significant (e.g. the
/// `", "` delimiter).
///
/// # Errors
///
/// Returns `ConfigError` if there is no `=` or the key is empty.
pub fn parse_setting(setting: &str) -> Result<(&str, &str), ConfigError> {
    let (key, value) = setting
        .split_once('=')
        .ok_or_else(|| ConfigError::Message("Invalid format. Use: key=value".to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::Message("Missing configuration key".to_string()));
    }
    Ok((key, value))
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TaggerConfig {
    /// Directory holding `<locale>.json` taxonomy documents
    #[serde(default)]
    pub taxonomy_dir: Option<PathBuf>,

    /// Locale used when none is given on the command line
    #[serde(default)]
    pub locale: Option<String>,

    /// Separator placed between tag names in export strings
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            taxonomy_dir: None,
            locale: None,
            delimiter: default_delimiter(),
            quiet: false,
        }
    }
}

impl TaggerConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("tagger").join("config.toml"))
    }

    /// Default taxonomy directory under the user's data directory
    #[must_use]
    pub fn default_taxonomy_dir() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("tagger").join("taxonomies"))
    }

    /// Load configuration from the user config file
    ///
    /// A missing file yields the defaults without writing anything.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, overlaid with `TAGGER_*` variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layered(path, Some(environment()))
    }

    /// Load the user config file without environment overrides
    ///
    /// Use this when the result is going to be saved back.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load_file() -> Result<Self, ConfigError> {
        Self::load_file_from(&Self::config_path()?)
    }

    /// Load `path` alone, ignoring `TAGGER_*` variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_file_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layered(path, None)
    }

    fn load_layered(path: &Path, env: Option<Environment>) -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from(path).format(FileFormat::Toml).required(false));
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        builder.build()?.try_deserialize()
    }

    /// Load configuration, running first-time setup if no config file exists
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            first_time_setup()
        }
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Taxonomy directory to use: configured value or the data-dir default
    #[must_use]
    pub fn resolved_taxonomy_dir(&self) -> Option<PathBuf> {
        self.taxonomy_dir.clone().or_else(Self::default_taxonomy_dir)
    }

    /// Read a setting as text
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "taxonomy_dir" => Some(
                self.taxonomy_dir
                    .as_ref()
                    .map(|dir| dir.display().to_string())
                    .unwrap_or_default(),
            ),
            "locale" => Some(self.locale.clone().unwrap_or_default()),
            "delimiter" => Some(self.delimiter.clone()),
            "quiet" => Some(self.quiet.to_string()),
            _ => None,
        }
    }

    /// Update a setting from text (does not save)
    ///
    /// An empty value clears `taxonomy_dir` and `locale`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "taxonomy_dir" => {
                self.taxonomy_dir = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "locale" => {
                self.locale = (!value.is_empty()).then(|| value.to_string());
            }
            "delimiter" => self.delimiter = value.to_string(),
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
