//! Taxonomy loading errors
//!
//! A failed load is the only error the tag engine recognizes. Lookup misses
//! are not errors and never surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving or loading a taxonomy
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// The taxonomy file exists but could not be read
    #[error("Failed to read taxonomy file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The taxonomy document is not valid JSON or has the wrong shape
    #[error("Malformed taxonomy for locale '{locale}': {source}")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    /// A tag record is an object but lacks required fields
    #[error("Invalid tag record '{name}': {source}")]
    InvalidTag {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// No taxonomy is available for the requested locale
    #[error("No taxonomy available for locale '{0}'")]
    NotFound(String),

    /// Locale string cannot name a taxonomy (e.g. contains path separators)
    #[error("Invalid locale: '{0}'")]
    InvalidLocale(String),
}
