//! Session errors

use crate::clipboard::ClipboardError;
use crate::selection::SelectionError;
use thiserror::Error;

/// Errors returned by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// The taxonomy failed to load; search and selection are disabled
    #[error("No taxonomy loaded for locale '{0}'")]
    TaxonomyUnavailable(String),

    /// A tag name has no record in the taxonomy
    #[error("Unknown tag: '{0}'")]
    UnknownTag(String),

    /// Copy requested for a category with no selected tags
    #[error("No tags selected for category '{0}'")]
    CategoryNotSelected(String),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
