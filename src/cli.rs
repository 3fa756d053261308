//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for tagger using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive search and selection loop (default)
//! - **search**: Print the tags matching a term, grouped by filter
//! - **export**: Build a selection from tag names and print it per category
//! - **locales**: List the locales with a taxonomy
//! - **config**: Read and change configuration values
//! - **completions**: Generate a shell completion script
//!
//! # Design Features
//!
//! - Global `--locale` and `--taxonomy-dir` override the configuration
//! - Global `--quiet` flag for scripting-friendly output
//! - Repeatable `-v` raises the log level
//! - Command aliases (e.g., `b` for `browse`, `s` for `search`)

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the export command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Human-readable listing (or `category<TAB>tags` lines with --quiet)
    #[default]
    Text,
    /// JSON object keyed by category
    Json,
    /// `category,tags` rows
    Csv,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., locale=de)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., delimiter)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the config file location
    Path,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tagger")]
#[command(about = "Browse a tag taxonomy and export tag selections", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Locale of the taxonomy to load, as a code (`de`) or a query (`?locale=de`)
    /// (overrides config, default: en)
    #[arg(short = 'l', long = "locale", value_name = "LOCALE", global = true)]
    pub locale: Option<String>,

    /// Directory holding <locale>.json taxonomy files (overrides config)
    #[arg(long = "taxonomy-dir", value_name = "DIR", global = true)]
    pub taxonomy_dir: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search and select tags interactively (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial search term
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Print copied text instead of using the system clipboard
        #[arg(long = "no-clipboard")]
        no_clipboard: bool,
    },

    /// Print tags whose name contains TERM (case-insensitive)
    #[command(visible_alias = "s")]
    Search {
        /// Search term (omit to list every tag)
        #[arg(value_name = "TERM")]
        term: Option<String>,
    },

    /// Select tags by name and print them grouped by category
    #[command(visible_alias = "e")]
    Export {
        /// Tag names to select
        #[arg(value_name = "TAG", required = true, num_args = 1..)]
        tags: Vec<String>,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,

        /// Copy this category's joined tags to the clipboard
        ///
        /// On X11 and Wayland the copied text outlives tagger only while a
        /// clipboard manager is running; use --no-clipboard to print it instead.
        #[arg(short = 'c', long = "copy", value_name = "CATEGORY")]
        copy: Option<String>,

        /// Print copied text instead of using the system clipboard
        #[arg(long = "no-clipboard", requires = "copy")]
        no_clipboard: bool,
    },

    /// List locales that have a taxonomy
    Locales,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: None,
            no_clipboard: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::try_parse_from(["tagger"]).unwrap();
        assert!(matches!(
            cli.get_command(),
            Commands::Browse { query: None, no_clipboard: false }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tagger", "search", "pro", "--locale", "de", "-q", "-vv"])
            .unwrap();
        assert_eq!(cli.locale.as_deref(), Some("de"));
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.get_command(), Commands::Search { term: Some(ref t) } if t == "pro"));
    }

    #[test]
    fn test_export_args() {
        let cli = Cli::try_parse_from([
            "tagger", "e", "Retail", "EN", "--format", "json", "--copy", "Industry",
        ])
        .unwrap();

        match cli.get_command() {
            Commands::Export { tags, format, copy, no_clipboard } => {
                assert_eq!(tags, vec!["Retail", "EN"]);
                assert_eq!(format, ExportFormat::Json);
                assert_eq!(copy.as_deref(), Some("Industry"));
                assert!(!no_clipboard);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_copy_help_mentions_clipboard_manager() {
        let command = Cli::command();
        let export = command.find_subcommand("export").unwrap();
        let copy = export.get_arguments().find(|arg| arg.get_id() == "copy").unwrap();
        let help = copy.get_long_help().unwrap().to_string();

        assert!(help.contains("clipboard manager"));
        assert!(help.contains("--no-clipboard"));
    }

    #[test]
    fn test_export_requires_tags() {
        assert!(Cli::try_parse_from(["tagger", "export"]).is_err());
    }

    #[test]
    fn test_no_clipboard_requires_copy() {
        assert!(Cli::try_parse_from(["tagger", "export", "Retail", "--no-clipboard"]).is_err());
    }
}
