//! Selection errors

use thiserror::Error;

/// Reasons a tag cannot join the selection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Entry names a category the taxonomy does not declare
    #[error("Unknown category '{category}' for tag '{name}'")]
    UnknownCategory { name: String, category: String },

    /// Entry names a filter the taxonomy does not declare
    #[error("Unknown filter '{filter}' for tag '{name}'")]
    UnknownFilter { name: String, filter: String },
}
