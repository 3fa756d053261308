//! Interactive setup wizard for first-time configuration
//!
//! Runs when tagger is started interactively without a config file.

use super::TaggerConfig;
use crate::taxonomy::locale::DEFAULT_LOCALE;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for taxonomy location and locale
///
/// 1. Prompts for the taxonomy directory (default: system data directory)
/// 2. Prompts for the default locale (default: `en`)
/// 3. Saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The system data directory cannot be determined
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<TaggerConfig, ConfigError> {
    println!("Welcome to tagger! Let's point it at your taxonomies.\n");

    let default_dir = TaggerConfig::default_taxonomy_dir()
        .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;

    let dir: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Taxonomy directory (one <locale>.json per locale)")
        .default(default_dir.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let locale: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Default locale")
        .default(DEFAULT_LOCALE.to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = TaggerConfig {
        taxonomy_dir: Some(PathBuf::from(dir)),
        locale: Some(locale),
        ..TaggerConfig::default()
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
