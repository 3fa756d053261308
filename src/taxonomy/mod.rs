//! Tag repository access
//!
//! A [`Taxonomy`] is the read-only tag catalog for one locale. It exposes:
//!
//! - **filters**: filter name → ordered tag names. Key order is the display
//!   order of sections and the second sort key of a selection.
//! - **categories**: category name → metadata. Key order is the first sort key
//!   of a selection and drives export partitioning.
//! - **tag lookup**: name → [`Tag`]. A miss (`None`) means "skip, do not render".
//!
//! Taxonomies are produced by a [`TaxonomyProvider`](provider::TaxonomyProvider),
//! usually [`DirectoryProvider`](provider::DirectoryProvider) reading one JSON
//! document per locale.

pub mod error;
pub mod locale;
pub mod provider;

pub use error::TaxonomyError;
pub use provider::{DirectoryProvider, StaticProvider, TaxonomyProvider};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Separator appended to `level1` to form a sub-tag's path
pub const PATH_SEPARATOR: &str = "/";

/// A single selectable tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub category: String,
    pub filter: String,
    /// Top level of the two-level hierarchy
    #[serde(default)]
    pub level1: Option<String>,
    /// Set only for sub-tags of `level1`
    #[serde(default)]
    pub level2: Option<String>,
}

impl Tag {
    /// Create a top-level tag
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        filter: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            filter: filter.into(),
            level1: None,
            level2: None,
        }
    }

    /// Attach hierarchy levels
    #[must_use]
    pub fn with_levels(mut self, level1: Option<&str>, level2: Option<&str>) -> Self {
        self.level1 = level1.map(ToString::to_string);
        self.level2 = level2.map(ToString::to_string);
        self
    }

    /// Whether this tag sits below a parent tag
    #[must_use]
    pub const fn is_sub_tag(&self) -> bool {
        self.level2.is_some()
    }

    /// Display/export path: `"<level1>/"` for sub-tags, empty otherwise
    ///
    /// # Examples
    /// ```
    /// use tagger::taxonomy::Tag;
    ///
    /// let tag = Tag::new("Storage", "Products", "Cloud")
    ///     .with_levels(Some("Cloud"), Some("Storage"));
    /// assert_eq!(tag.path(), "Cloud/");
    /// ```
    #[must_use]
    pub fn path(&self) -> String {
        match (&self.level1, &self.level2) {
            (Some(parent), Some(_)) => format!("{parent}{PATH_SEPARATOR}"),
            _ => String::new(),
        }
    }
}

/// Category metadata as found in the taxonomy document
///
/// The engine only needs category keys and their order; attributes are kept
/// for the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Category {
    /// Human-readable title, if the document provides one
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.attributes.get("title").and_then(Value::as_str)
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::Object(attributes) => Self { attributes },
            _ => Self::default(),
        }
    }
}

/// On-disk shape of a taxonomy document
#[derive(Debug, Deserialize)]
struct RawTaxonomy {
    #[serde(default)]
    categories: IndexMap<String, Value>,
    #[serde(default)]
    filters: IndexMap<String, Vec<String>>,
    #[serde(default)]
    tags: IndexMap<String, Value>,
}

/// Read-only tag catalog for one locale
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Taxonomy {
    locale: String,
    filters: IndexMap<String, Vec<String>>,
    categories: IndexMap<String, Category>,
    tags: HashMap<String, Tag>,
}

impl Taxonomy {
    /// Start building a taxonomy in memory
    #[must_use]
    pub fn builder(locale: impl Into<String>) -> TaxonomyBuilder {
        TaxonomyBuilder::new(locale)
    }

    /// Parse a taxonomy document
    ///
    /// Tag entries whose value is not a JSON object are dropped: they behave
    /// as lookup misses rather than load failures.
    ///
    /// # Errors
    ///
    /// Returns `TaxonomyError::Parse` if the document is not valid JSON of the
    /// expected shape, or `TaxonomyError::InvalidTag` if a tag object lacks
    /// required fields.
    pub fn from_json(locale: &str, json: &str) -> Result<Self, TaxonomyError> {
        let raw: RawTaxonomy =
            serde_json::from_str(json).map_err(|source| TaxonomyError::Parse {
                locale: locale.to_string(),
                source,
            })?;

        let mut tags = HashMap::with_capacity(raw.tags.len());
        for (name, value) in raw.tags {
            if !value.is_object() {
                tracing::trace!(tag = %name, "Ignoring non-record tag entry");
                continue;
            }
            let tag: Tag = serde_json::from_value(value)
                .map_err(|source| TaxonomyError::InvalidTag {
                    name: name.clone(),
                    source,
                })?;
            tags.insert(name, tag);
        }

        Ok(Self {
            locale: locale.to_string(),
            filters: raw.filters,
            categories: raw
                .categories
                .into_iter()
                .map(|(name, value)| (name, Category::from_value(value)))
                .collect(),
            tags,
        })
    }

    /// Locale this snapshot was loaded for
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up a tag by name
    #[must_use]
    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.get(name)
    }

    /// Filters in canonical order with their tag-name buckets
    #[must_use]
    pub const fn filters(&self) -> &IndexMap<String, Vec<String>> {
        &self.filters
    }

    /// Categories in canonical order
    #[must_use]
    pub const fn categories(&self) -> &IndexMap<String, Category> {
        &self.categories
    }

    /// Position of `category` in canonical category order
    #[must_use]
    pub fn category_position(&self, category: &str) -> Option<usize> {
        self.categories.get_index_of(category)
    }

    /// Position of `filter` in canonical filter order
    #[must_use]
    pub fn filter_position(&self, filter: &str) -> Option<usize> {
        self.filters.get_index_of(filter)
    }

    /// Number of resolvable tag records
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

/// Builder for in-memory taxonomies
///
/// Filter and category order follow call order.
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    taxonomy: Taxonomy,
}

impl TaxonomyBuilder {
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            taxonomy: Taxonomy {
                locale: locale.into(),
                ..Taxonomy::default()
            },
        }
    }

    /// Declare a category with no metadata
    #[must_use]
    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.taxonomy
            .categories
            .entry(name.into())
            .or_default();
        self
    }

    /// Declare a filter and its bucket of tag names
    ///
    /// Names need not resolve; dangling names are lookup misses.
    #[must_use]
    pub fn filter<I, S>(mut self, name: impl Into<String>, tag_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.taxonomy
            .filters
            .insert(name.into(), tag_names.into_iter().map(Into::into).collect());
        self
    }

    /// Register a tag record under its own name
    #[must_use]
    pub fn tag(mut self, tag: Tag) -> Self {
        self.taxonomy.tags.insert(tag.name.clone(), tag);
        self
    }

    #[must_use]
    pub fn build(self) -> Taxonomy {
        self.taxonomy
    }
}
