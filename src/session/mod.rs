//! Tagging session
//!
//! A [`TaggerSession`] owns everything a browsing session mutates: the loaded
//! taxonomy, the selection and the current search term. Front ends drive it
//! through [`TaggerSession::dispatch`].
//!
//! # Lifecycle
//!
//! ```text
//! start(provider, locale)
//!     ├─ load ok   → Ready   → search / toggle / copy
//!     └─ load fails → Failed → only SetLocale is accepted
//!
//! SetLocale → reload, selection and search term reset
//! ```
//!
//! The load happens once per start or locale switch and is never retried.

mod error;
pub mod intent;

pub use error::SessionError;
pub use intent::{Intent, Outcome, TagRef};

use crate::clipboard::Clipboard;
use crate::export::{self, DEFAULT_DELIMITER, ExportGroups};
use crate::search::{self, FilterSection, TagMatch};
use crate::selection::{self, Selection, SelectionChange, SelectionEntry};
use crate::taxonomy::{Taxonomy, TaxonomyProvider};
use std::sync::Arc;

type Result<T> = std::result::Result<T, SessionError>;

/// Outcome of the taxonomy load
#[derive(Debug, Clone)]
pub enum LoadState {
    Ready(Arc<Taxonomy>),
    /// Load failed with the given reason
    Failed(String),
}

/// Ordered selection plus its export grouping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionView {
    pub entries: Vec<SelectionEntry>,
    pub groups: ExportGroups,
}

impl SelectionView {
    /// Order `selection` and group it by category
    #[must_use]
    pub fn build(selection: &Selection, taxonomy: &Taxonomy) -> Self {
        let entries = selection::order(selection, taxonomy);
        let groups = export::group(&entries);
        Self { entries, groups }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// State of one browsing session
pub struct TaggerSession<'a> {
    provider: &'a dyn TaxonomyProvider,
    locale: String,
    state: LoadState,
    selection: Selection,
    search_term: String,
    delimiter: String,
}

impl<'a> TaggerSession<'a> {
    /// Load the taxonomy for `locale` and start a session
    ///
    /// A failed load does not return an error: the session starts in the
    /// failed state and reports [`SessionError::TaxonomyUnavailable`] for
    /// everything but a locale switch.
    pub fn start(provider: &'a dyn TaxonomyProvider, locale: impl Into<String>) -> Self {
        let locale = locale.into();
        let state = Self::load(provider, &locale);
        Self {
            provider,
            locale,
            state,
            selection: Selection::new(),
            search_term: String::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Use `delimiter` when joining names for copy
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    fn load(provider: &dyn TaxonomyProvider, locale: &str) -> LoadState {
        match provider.load(locale) {
            Ok(taxonomy) => LoadState::Ready(taxonomy),
            Err(e) => {
                tracing::warn!(locale, error = %e, "Could not load taxonomy");
                LoadState::Failed(e.to_string())
            }
        }
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    /// Reason the last load failed, if it did
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(reason) => Some(reason),
            LoadState::Ready(_) => None,
        }
    }

    /// The loaded taxonomy
    ///
    /// # Errors
    ///
    /// Returns `SessionError::TaxonomyUnavailable` if the load failed.
    pub fn taxonomy(&self) -> Result<&Taxonomy> {
        match &self.state {
            LoadState::Ready(taxonomy) => Ok(&**taxonomy),
            LoadState::Failed(_) => Err(SessionError::TaxonomyUnavailable(self.locale.clone())),
        }
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Whether a rendered match is part of the selection
    #[must_use]
    pub fn is_selected(&self, tag: &TagMatch) -> bool {
        self.selection.contains(&tag.entry())
    }

    /// Sections for the current search term
    ///
    /// # Errors
    ///
    /// Returns `SessionError::TaxonomyUnavailable` if the load failed.
    pub fn results(&self) -> Result<Vec<FilterSection>> {
        Ok(search::filter_tags(self.taxonomy()?, &self.search_term))
    }

    /// Ordered selection and its category groups
    ///
    /// # Errors
    ///
    /// Returns `SessionError::TaxonomyUnavailable` if the load failed.
    pub fn view(&self) -> Result<SelectionView> {
        Ok(SelectionView::build(&self.selection, self.taxonomy()?))
    }

    /// Route an intent to the matching operation
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the taxonomy is unavailable or the operation
    /// itself fails.
    pub fn dispatch(&mut self, intent: Intent, clipboard: &mut dyn Clipboard) -> Result<Outcome> {
        match intent {
            Intent::UpdateSearch(term) => self.update_search(term).map(Outcome::Results),
            Intent::ToggleTag(tag) => {
                let (change, entry) = self.toggle(tag)?;
                Ok(Outcome::SelectionChanged {
                    change,
                    entry,
                    view: self.view()?,
                })
            }
            Intent::CopyCategory(category) => {
                let text = self.copy_category(&category, clipboard)?;
                Ok(Outcome::Copied { category, text })
            }
            Intent::SetLocale(locale) => {
                let available = self.set_locale(locale);
                Ok(Outcome::LocaleChanged {
                    locale: self.locale.clone(),
                    available,
                })
            }
        }
    }

    /// Store a new search term and return the filtered sections
    ///
    /// # Errors
    ///
    /// Returns `SessionError::TaxonomyUnavailable` if the load failed.
    pub fn update_search(&mut self, term: impl Into<String>) -> Result<Vec<FilterSection>> {
        let taxonomy = self.taxonomy()?;
        let term = term.into();
        let sections = search::filter_tags(taxonomy, &term);
        self.search_term = term;
        Ok(sections)
    }

    /// Toggle a tag, returning what changed and the affected tuple
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownTag` for names without a record,
    /// `SessionError::Selection` for tuples the taxonomy cannot place, or
    /// `SessionError::TaxonomyUnavailable` if the load failed.
    pub fn toggle(&mut self, tag: TagRef) -> Result<(SelectionChange, SelectionEntry)> {
        let taxonomy = match &self.state {
            LoadState::Ready(taxonomy) => Arc::clone(taxonomy),
            LoadState::Failed(_) => {
                return Err(SessionError::TaxonomyUnavailable(self.locale.clone()));
            }
        };

        let entry = match tag {
            TagRef::Name(name) => taxonomy
                .tag(&name)
                .map(SelectionEntry::from)
                .ok_or(SessionError::UnknownTag(name))?,
            TagRef::Entry(entry) => entry,
        };

        let change = self.selection.toggle_checked(entry.clone(), &taxonomy)?;
        tracing::debug!(
            tag = entry.name(),
            category = entry.category(),
            ?change,
            selected = self.selection.len(),
            "Selection changed"
        );
        Ok((change, entry))
    }

    /// Copy a category's joined names to `clipboard` and return the text
    ///
    /// # Errors
    ///
    /// Returns `SessionError::CategoryNotSelected` if nothing is selected under
    /// `category`, `SessionError::Clipboard` if copying fails, or
    /// `SessionError::TaxonomyUnavailable` if the load failed.
    pub fn copy_category(&self, category: &str, clipboard: &mut dyn Clipboard) -> Result<String> {
        let view = self.view()?;
        let text = view
            .groups
            .joined(category, &self.delimiter)
            .ok_or_else(|| SessionError::CategoryNotSelected(category.to_string()))?;

        clipboard.copy(&text)?;
        tracing::debug!(category, "Copied tags to clipboard");
        Ok(text)
    }

    /// Switch locale, resetting the selection and search term
    ///
    /// Returns whether the new taxonomy loaded.
    pub fn set_locale(&mut self, locale: impl Into<String>) -> bool {
        self.locale = locale.into();
        self.state = Self::load(self.provider, &self.locale);
        self.selection.clear();
        self.search_term.clear();
        tracing::info!(locale = %self.locale, ready = self.is_ready(), "Switched locale");
        self.is_ready()
    }

    /// Drop every selected tag
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}
