//! Canonical selection order
//!
//! Sort keys, in precedence order:
//!
//! 1. category position in the taxonomy's category order
//! 2. filter position in the taxonomy's filter order
//! 3. path, ascending
//! 4. name, ascending
//!
//! Entries equal on all four keys compare `Equal`, so the stable sort keeps
//! their relative order. Categories or filters the taxonomy does not declare
//! sort after every declared one.

use super::SelectionEntry;
use crate::taxonomy::Taxonomy;
use std::cmp::Ordering;

/// Compare two entries by canonical order
#[must_use]
pub fn compare_entries(a: &SelectionEntry, b: &SelectionEntry, taxonomy: &Taxonomy) -> Ordering {
    let category = |e: &SelectionEntry| {
        taxonomy
            .category_position(e.category())
            .unwrap_or(usize::MAX)
    };
    let filter = |e: &SelectionEntry| taxonomy.filter_position(e.filter()).unwrap_or(usize::MAX);

    category(a)
        .cmp(&category(b))
        .then_with(|| filter(a).cmp(&filter(b)))
        .then_with(|| a.path().cmp(b.path()))
        .then_with(|| a.name().cmp(b.name()))
}

/// Return the entries in canonical order
///
/// The input is left untouched.
#[must_use]
pub fn order<'a, I>(entries: I, taxonomy: &Taxonomy) -> Vec<SelectionEntry>
where
    I: IntoIterator<Item = &'a SelectionEntry>,
{
    let mut ordered: Vec<SelectionEntry> = entries.into_iter().cloned().collect();
    ordered.sort_by(|a, b| compare_entries(a, b, taxonomy));
    ordered
}
