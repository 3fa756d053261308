//! Testing utilities for tagger
//!
//! Shared fixtures: a sample taxonomy document and a temporary taxonomy
//! directory that cleans up on drop.
//!
//! Only available when compiled with `cfg(test)`.

use crate::selection::SelectionEntry;
use crate::taxonomy::Taxonomy;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Sample taxonomy used across unit tests
///
/// - three categories and three filters in the same order
/// - `Storage` and `Compute` are sub-tags of `Cloud`
/// - `Ghost` is referenced by a filter but has no record
/// - `Broken` has a non-object record
pub const SAMPLE_TAXONOMY_JSON: &str = r#"{
    "categories": {
        "Industry": { "title": "Industry" },
        "Products": { "title": "Products" },
        "Language": {}
    },
    "filters": {
        "Industry": ["Retail", "Healthcare", "Financial Services"],
        "Products": ["Cloud", "Storage", "Compute", "Ghost", "Broken"],
        "Language": ["EN", "DE"]
    },
    "tags": {
        "Retail": { "name": "Retail", "category": "Industry", "filter": "Industry", "level1": "Retail", "level2": null },
        "Healthcare": { "name": "Healthcare", "category": "Industry", "filter": "Industry", "level1": "Healthcare", "level2": null },
        "Financial Services": { "name": "Financial Services", "category": "Industry", "filter": "Industry", "level1": "Financial Services", "level2": null },
        "Cloud": { "name": "Cloud", "category": "Products", "filter": "Products", "level1": "Cloud", "level2": null },
        "Storage": { "name": "Storage", "category": "Products", "filter": "Products", "level1": "Cloud", "level2": "Storage" },
        "Compute": { "name": "Compute", "category": "Products", "filter": "Products", "level1": "Cloud", "level2": "Compute" },
        "EN": { "name": "EN", "category": "Language", "filter": "Language", "level1": "EN", "level2": null },
        "DE": { "name": "DE", "category": "Language", "filter": "Language", "level1": "DE", "level2": null },
        "Broken": "n/a"
    }
}"#;

/// Parse [`SAMPLE_TAXONOMY_JSON`] as the `en` taxonomy
///
/// # Panics
/// Panics if the fixture does not parse.
#[must_use]
pub fn sample_taxonomy() -> Taxonomy {
    Taxonomy::from_json("en", SAMPLE_TAXONOMY_JSON).expect("sample taxonomy must parse")
}

/// Build a selection entry without going through a taxonomy
#[must_use]
pub fn entry(name: &str, category: &str, filter: &str, path: &str) -> SelectionEntry {
    SelectionEntry::new(name, category, filter, path)
}

/// Temporary directory holding taxonomy documents
///
/// Removed when dropped.
pub struct TaxonomyDir {
    dir: TempDir,
}

impl TaxonomyDir {
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `<locale>.json`
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_locale(&self, locale: &str, json: &str) {
        self.write_file(&format!("{locale}.json"), json);
    }

    /// Write an arbitrary file into the directory
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_file(&self, name: &str, contents: &str) {
        fs::write(self.dir.path().join(name), contents).expect("Failed to write fixture");
    }
}

impl Default for TaxonomyDir {
    fn default() -> Self {
        Self::new()
    }
}
