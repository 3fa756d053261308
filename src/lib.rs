//! Tagger - browse a tag taxonomy and build per-category tag selections
//!
//! The library holds the selection engine: a locale's [`taxonomy`] is searched
//! by name ([`search`]), chosen tags are collected in a [`selection`], ordered
//! canonically and grouped by category for [`export`]. A [`session`] ties the
//! pieces together behind explicit user intents.

use thiserror::Error;

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod export;
pub mod output;
pub mod search;
pub mod selection;
pub mod session;
pub mod taxonomy;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TaggerError {
    /// Taxonomy could not be loaded
    #[error("Taxonomy error: {0}")]
    Taxonomy(#[from] taxonomy::TaxonomyError),
    /// Session operation failed
    #[error("{0}")]
    Session(#[from] session::SessionError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
