//! Tagger CLI application entry point
//!
//! Browse a tag taxonomy by name, pick tags and copy them per category.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! tagger
//! tagger browse pro
//!
//! # Print the tags whose name contains a term
//! tagger search cloud
//! tagger --locale de s cloud
//! tagger --locale '?locale=de' s cloud
//!
//! # Build a selection and print it per category
//! tagger export Retail Storage EN --format json
//! tagger export Retail Healthcare --copy Industry
//!
//! # List available locales
//! tagger locales
//! ```
//!
//! # Configuration
//!
//! On the first interactive run, tagger prompts for the taxonomy directory and
//! the default locale. Configuration is stored in the user's config directory
//! (`~/.config/tagger/config.toml` on Linux). `TAGGER_LOG` sets the log filter.

use clap::CommandFactory;
use std::io;
use std::path::PathBuf;
use tagger::{
    TaggerError,
    cli::{Cli, Commands, ConfigCommands},
    commands::{self, clipboard_for, export::ExportParams},
    config::{CONFIG_KEYS, TaggerConfig, parse_setting},
    taxonomy::{
        DirectoryProvider,
        locale::{locale_from_arg, resolve_locale},
    },
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, TaggerError>;

/// Install the stderr log subscriber
///
/// `TAGGER_LOG` wins when set; otherwise `-v` picks the level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("TAGGER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("tagger={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Handle config subcommands
///
/// `get` reports the effective value, environment overrides included. `set`
/// edits the file contents alone so overrides are never written back.
///
/// # Errors
/// Returns `TaggerError` if the key is unknown, the value is invalid, or the
/// configuration cannot be saved.
fn handle_config_command(
    config: &TaggerConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;

            let mut stored = TaggerConfig::load_file()?;
            stored.set(key, value)?;
            stored.save()?;
            if !quiet {
                println!("Set {key} = {value:?}");
            }
        }
        ConfigCommands::Get { key } => {
            let value = config.get(key).ok_or_else(|| {
                TaggerError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    CONFIG_KEYS.join(", ")
                ))
            })?;
            println!("{value}");
        }
        ConfigCommands::Path => {
            println!("{}", TaggerConfig::config_path()?.display());
        }
    }
    Ok(())
}

/// Taxonomy directory: command line, then configuration, then data-dir default
fn taxonomy_dir(cli: &Cli, config: &TaggerConfig) -> Result<PathBuf> {
    cli.taxonomy_dir
        .clone()
        .or_else(|| config.resolved_taxonomy_dir())
        .ok_or_else(|| {
            TaggerError::InvalidInput(
                "No taxonomy directory configured. \
                 Use --taxonomy-dir or 'tagger config set taxonomy_dir=<dir>'."
                    .into(),
            )
        })
}

/// Main entry point for the tagger application
///
/// Parses command-line arguments, loads configuration and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `TaggerError` if configuration loading fails or any command handler
/// returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let command = cli.get_command();

    if let Commands::Completions { shell } = &command {
        clap_complete::generate(*shell, &mut Cli::command(), "tagger", &mut io::stdout());
        return Ok(());
    }

    let config = match &command {
        Commands::Browse { .. } => TaggerConfig::load_or_setup()?,
        _ => TaggerConfig::load()?,
    };
    let quiet = cli.quiet || config.quiet;

    if let Commands::Config { command } = &command {
        return handle_config_command(&config, command, quiet);
    }

    let explicit = cli.locale.as_deref().and_then(locale_from_arg);
    let locale = resolve_locale(explicit.as_deref(), config.locale.as_deref());
    let dir = taxonomy_dir(&cli, &config)?;
    tracing::debug!(locale = %locale, dir = %dir.display(), "resolved taxonomy source");
    let provider = DirectoryProvider::new(dir);

    match &command {
        Commands::Browse { query, no_clipboard } => {
            let mut clipboard = clipboard_for(*no_clipboard);
            commands::browse(
                &provider,
                &locale,
                query.as_deref(),
                clipboard.as_mut(),
                *no_clipboard,
                &config.delimiter,
                quiet,
            )?;
        }
        Commands::Search { term } => {
            commands::search(&provider, &locale, term.as_deref(), quiet)?;
        }
        Commands::Export { tags, format, copy, no_clipboard } => {
            let params = ExportParams {
                tags,
                format: *format,
                copy: copy.as_deref(),
                no_clipboard: *no_clipboard,
                delimiter: &config.delimiter,
            };
            commands::export(&provider, &locale, &params, quiet)?;
        }
        Commands::Locales => {
            commands::locales(&provider, &locale, quiet)?;
        }
        Commands::Config { .. } | Commands::Completions { .. } => {}
    }

    Ok(())
}
