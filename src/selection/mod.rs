//! Selection set
//!
//! The selection holds denormalized snapshots of chosen tags. An entry is the
//! `(name, category, filter, path)` tuple taken from a [`Tag`] when the user
//! activates it; later taxonomy changes cannot affect it.
//!
//! # Invariants
//!
//! - No tuple appears twice.
//! - Entries keep activation order; canonical order comes from [`order`].
//! - [`Selection::toggle`] flips membership of exactly one tuple.

mod error;
pub mod order;

pub use error::SelectionError;
pub use order::{compare_entries, order};

use crate::taxonomy::{Tag, Taxonomy};
use serde::{Deserialize, Serialize};

/// Snapshot of a selected tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionEntry {
    name: String,
    category: String,
    filter: String,
    path: String,
}

impl SelectionEntry {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        filter: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            filter: filter.into(),
            path: path.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Parent path (`"Cloud/"`) or empty for top-level tags
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Check that category and filter exist in `taxonomy`
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::UnknownCategory` or
    /// `SelectionError::UnknownFilter` for values the taxonomy does not declare.
    pub fn validate(&self, taxonomy: &Taxonomy) -> Result<(), SelectionError> {
        if taxonomy.category_position(&self.category).is_none() {
            return Err(SelectionError::UnknownCategory {
                name: self.name.clone(),
                category: self.category.clone(),
            });
        }
        if taxonomy.filter_position(&self.filter).is_none() {
            return Err(SelectionError::UnknownFilter {
                name: self.name.clone(),
                filter: self.filter.clone(),
            });
        }
        Ok(())
    }
}

impl From<&Tag> for SelectionEntry {
    fn from(tag: &Tag) -> Self {
        Self {
            name: tag.name.clone(),
            category: tag.category.clone(),
            filter: tag.filter.clone(),
            path: tag.path(),
        }
    }
}

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
}

/// Currently chosen tags, in activation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entry` if absent, remove it if present
    pub fn toggle(&mut self, entry: SelectionEntry) -> SelectionChange {
        if let Some(index) = self.entries.iter().position(|e| *e == entry) {
            self.entries.remove(index);
            SelectionChange::Removed
        } else {
            self.entries.push(entry);
            SelectionChange::Added
        }
    }

    /// Toggle, rejecting additions the taxonomy cannot place
    ///
    /// Removing an entry that is already selected always succeeds.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError` if `entry` is not selected and its category or
    /// filter is unknown to `taxonomy`.
    pub fn toggle_checked(
        &mut self,
        entry: SelectionEntry,
        taxonomy: &Taxonomy,
    ) -> Result<SelectionChange, SelectionError> {
        if !self.contains(&entry) {
            entry.validate(taxonomy)?;
        }
        Ok(self.toggle(entry))
    }

    #[must_use]
    pub fn contains(&self, entry: &SelectionEntry) -> bool {
        self.entries.contains(entry)
    }

    /// Entries in activation order
    #[must_use]
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectionEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a SelectionEntry;
    type IntoIter = std::slice::Iter<'a, SelectionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
