//! Taxonomy providers
//!
//! A provider turns a locale into a loaded [`Taxonomy`]. Loading happens once
//! per session start or locale switch; providers never retry.

use super::{Taxonomy, TaxonomyError};
use moka::sync::Cache;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File extension of taxonomy documents
pub const TAXONOMY_EXTENSION: &str = "json";

/// Source of per-locale taxonomies
pub trait TaxonomyProvider {
    /// Load the taxonomy for `locale`
    ///
    /// # Errors
    ///
    /// Returns `TaxonomyError` if no taxonomy exists for the locale or it
    /// cannot be read or parsed.
    fn load(&self, locale: &str) -> Result<Arc<Taxonomy>, TaxonomyError>;

    /// Locales this provider can load, sorted
    fn locales(&self) -> Vec<String>;
}

/// Check that a locale can safely name a taxonomy file
fn validate_locale(locale: &str) -> Result<(), TaxonomyError> {
    let valid = !locale.is_empty()
        && locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(TaxonomyError::InvalidLocale(locale.to_string()))
    }
}

/// Provider reading `<dir>/<locale>.json`
///
/// Parsed taxonomies are cached per locale, so switching back to a locale
/// does not hit the filesystem again.
pub struct DirectoryProvider {
    dir: PathBuf,
    cache: Cache<String, Arc<Taxonomy>>,
}

impl DirectoryProvider {
    /// Create a provider over `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_cache_capacity(dir, 16)
    }

    /// Create a provider with a custom cache size (number of locales)
    #[must_use]
    pub fn with_cache_capacity(dir: impl Into<PathBuf>, max_capacity: u64) -> Self {
        Self {
            dir: dir.into(),
            cache: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Directory the provider reads from
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document for `locale`
    ///
    /// # Errors
    ///
    /// Returns `TaxonomyError::InvalidLocale` if the locale contains anything
    /// other than ASCII letters, digits, `-` or `_`.
    pub fn taxonomy_path(&self, locale: &str) -> Result<PathBuf, TaxonomyError> {
        validate_locale(locale)?;
        Ok(self.dir.join(format!("{locale}.{TAXONOMY_EXTENSION}")))
    }

    /// Drop all cached taxonomies
    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
    }
}

impl TaxonomyProvider for DirectoryProvider {
    fn load(&self, locale: &str) -> Result<Arc<Taxonomy>, TaxonomyError> {
        let path = self.taxonomy_path(locale)?;

        if let Some(taxonomy) = self.cache.get(locale) {
            tracing::debug!(locale, "Taxonomy cache hit");
            return Ok(taxonomy);
        }

        if !path.is_file() {
            return Err(TaxonomyError::NotFound(locale.to_string()));
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| TaxonomyError::Io {
            path: path.clone(),
            source,
        })?;

        let taxonomy = Arc::new(Taxonomy::from_json(locale, &contents)?);
        tracing::info!(
            locale,
            path = %path.display(),
            filters = taxonomy.filters().len(),
            categories = taxonomy.categories().len(),
            tags = taxonomy.tag_count(),
            "Loaded taxonomy"
        );

        self.cache.insert(locale.to_string(), Arc::clone(&taxonomy));
        Ok(taxonomy)
    }

    fn locales(&self) -> Vec<String> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    dir = %self.dir.display(),
                    error = %e,
                    "Cannot list taxonomy directory"
                );
                return Vec::new();
            }
        };

        let mut locales: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|ext| ext.to_str()) == Some(TAXONOMY_EXTENSION)
            })
            .filter_map(|path| path.file_stem()?.to_str().map(ToString::to_string))
            .filter(|locale| validate_locale(locale).is_ok())
            .collect();

        locales.sort();
        locales
    }
}

/// In-memory provider keyed by each taxonomy's locale
#[derive(Debug, Default, Clone)]
pub struct StaticProvider {
    taxonomies: HashMap<String, Arc<Taxonomy>>,
}

impl StaticProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a taxonomy under its own locale
    #[must_use]
    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomies
            .insert(taxonomy.locale().to_string(), Arc::new(taxonomy));
        self
    }
}

impl TaxonomyProvider for StaticProvider {
    fn load(&self, locale: &str) -> Result<Arc<Taxonomy>, TaxonomyError> {
        self.taxonomies
            .get(locale)
            .cloned()
            .ok_or_else(|| TaxonomyError::NotFound(locale.to_string()))
    }

    fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.taxonomies.keys().cloned().collect();
        locales.sort();
        locales
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{SAMPLE_TAXONOMY_JSON, TaxonomyDir, sample_taxonomy};

    #[test]
    fn test_validate_locale() {
        assert!(validate_locale("en").is_ok());
        assert!(validate_locale("zh-Hant").is_ok());
        assert!(validate_locale("pt_BR").is_ok());
        assert!(validate_locale("").is_err());
        assert!(validate_locale("../etc/passwd").is_err());
        assert!(validate_locale("en/fr").is_err());
        assert!(validate_locale("..").is_err());
    }

    #[test]
    fn test_directory_provider_loads_locale() {
        let dir = TaxonomyDir::new();
        dir.write_locale("en", SAMPLE_TAXONOMY_JSON);

        let provider = DirectoryProvider::new(dir.path());
        let taxonomy = provider.load("en").unwrap();

        assert_eq!(taxonomy.locale(), "en");
        assert_eq!(*taxonomy, sample_taxonomy());
    }

    #[test]
    fn test_directory_provider_missing_locale() {
        let dir = TaxonomyDir::new();
        let provider = DirectoryProvider::new(dir.path());

        let err = provider.load("fr").unwrap_err();
        assert!(matches!(err, TaxonomyError::NotFound(ref l) if l == "fr"));
    }

    #[test]
    fn test_directory_provider_rejects_traversal() {
        let dir = TaxonomyDir::new();
        let provider = DirectoryProvider::new(dir.path());

        let err = provider.load("../secret").unwrap_err();
        assert!(matches!(err, TaxonomyError::InvalidLocale(_)));
    }

    #[test]
    fn test_directory_provider_malformed_file() {
        let dir = TaxonomyDir::new();
        dir.write_locale("en", "not json");
        let provider = DirectoryProvider::new(dir.path());

        assert!(matches!(
            provider.load("en").unwrap_err(),
            TaxonomyError::Parse { .. }
        ));
    }

    #[test]
    fn test_directory_provider_caches_loaded_taxonomy() {
        let dir = TaxonomyDir::new();
        dir.write_locale("en", SAMPLE_TAXONOMY_JSON);
        let provider = DirectoryProvider::new(dir.path());

        let first = provider.load("en").unwrap();
        std::fs::remove_file(provider.taxonomy_path("en").unwrap()).unwrap();
        let second = provider.load("en").unwrap();

        assert!(Arc::ptr_eq(&first, &second));

        provider.clear_cache();
        assert!(provider.load("en").is_err());
    }

    #[test]
    fn test_directory_provider_lists_locales() {
        let dir = TaxonomyDir::new();
        dir.write_locale("fr", "{}");
        dir.write_locale("en", "{}");
        dir.write_file("notes.txt", "ignored");

        let provider = DirectoryProvider::new(dir.path());
        assert_eq!(provider.locales(), vec!["en", "fr"]);
    }

    #[test]
    fn test_directory_provider_lists_nothing_for_missing_dir() {
        let provider = DirectoryProvider::new("/nonexistent/tagger/taxonomies");
        assert!(provider.locales().is_empty());
    }

    #[test]
    fn test_static_provider() {
        let provider = StaticProvider::new()
            .with_taxonomy(Taxonomy::builder("de").build())
            .with_taxonomy(sample_taxonomy());

        assert_eq!(provider.locales(), vec!["de", "en"]);
        assert_eq!(provider.load("en").unwrap().locale(), "en");
        assert!(matches!(
            provider.load("ja").unwrap_err(),
            TaxonomyError::NotFound(_)
        ));
    }
}
