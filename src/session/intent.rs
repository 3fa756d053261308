//! User intents and their outcomes
//!
//! Front ends classify raw input (key presses, typed commands, clicks) into an
//! [`Intent`] and hand it to
//! [`TaggerSession::dispatch`](super::TaggerSession::dispatch). The session
//! never sees raw input.

use super::SelectionView;
use crate::search::FilterSection;
use crate::selection::{SelectionChange, SelectionEntry};

/// Reference to the tag a toggle targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRef {
    /// Resolve through the taxonomy's tag lookup
    Name(String),
    /// Use this tuple as is (e.g. taken from a rendered match)
    Entry(SelectionEntry),
}

impl From<SelectionEntry> for TagRef {
    fn from(entry: SelectionEntry) -> Self {
        Self::Entry(entry)
    }
}

/// A classified user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Select or deselect a tag
    ToggleTag(TagRef),
    /// Copy one category's joined tag names
    CopyCategory(String),
    /// Reload with another locale's taxonomy
    SetLocale(String),
    /// Re-run the search with a new term
    UpdateSearch(String),
}

/// Result of a dispatched intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Filtered sections for the current search term
    Results(Vec<FilterSection>),

    /// The selection changed
    SelectionChanged {
        change: SelectionChange,
        entry: SelectionEntry,
        view: SelectionView,
    },

    /// Text handed to the clipboard
    Copied { category: String, text: String },

    /// A locale switch finished; `available` is false if loading failed
    LocaleChanged { locale: String, available: bool },
}
