//! Tag filtering by search term
//!
//! Walks every filter bucket in taxonomy order and keeps the tags whose name
//! contains the search term, ignoring case. Results are grouped per filter and
//! keep taxonomy order; there is no relevance ranking.
//!
//! ```
//! use tagger::search::filter_tags;
//! use tagger::taxonomy::{Tag, Taxonomy};
//!
//! let taxonomy = Taxonomy::builder("en")
//!     .category("Industry")
//!     .filter("Industry", ["Retail", "Healthcare"])
//!     .tag(Tag::new("Retail", "Industry", "Industry"))
//!     .tag(Tag::new("Healthcare", "Industry", "Industry"))
//!     .build();
//!
//! let sections = filter_tags(&taxonomy, "RET");
//! assert_eq!(sections[0].tags[0].name, "Retail");
//! assert_eq!(sections[0].tags.len(), 1);
//! ```

use crate::selection::SelectionEntry;
use crate::taxonomy::{Tag, Taxonomy};
use serde::Serialize;

/// Section colors, assigned by filter position and cycled past the end
pub const PALETTE: [&str; 6] = ["fc5c65", "fd9644", "fed330", "26de81", "2bcbba", "45aaf2"];

/// Color for the filter at `index`
#[must_use]
pub const fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Case-insensitive substring match of `term` against `name`
///
/// The empty term matches every name.
#[must_use]
pub fn matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// A tag that matched, with everything needed to render and select it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagMatch {
    pub name: String,
    pub path: String,
    pub category: String,
    pub filter: String,
}

impl TagMatch {
    /// Selection tuple for this tag
    #[must_use]
    pub fn entry(&self) -> SelectionEntry {
        SelectionEntry::new(&self.name, &self.category, &self.filter, &self.path)
    }
}

impl From<&Tag> for TagMatch {
    fn from(tag: &Tag) -> Self {
        Self {
            name: tag.name.clone(),
            path: tag.path(),
            category: tag.category.clone(),
            filter: tag.filter.clone(),
        }
    }
}

/// Matched tags of one filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSection {
    pub filter: String,
    /// Hex RGB without the leading `#`
    pub color: &'static str,
    pub tags: Vec<TagMatch>,
}

impl FilterSection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }
}

/// Group the tags matching `search_term` by filter
///
/// Every filter yields a section, even when nothing in it matches. Bucket
/// names without a tag record are skipped.
#[must_use]
pub fn filter_tags(taxonomy: &Taxonomy, search_term: &str) -> Vec<FilterSection> {
    let needle = search_term.to_lowercase();

    taxonomy
        .filters()
        .iter()
        .enumerate()
        .map(|(index, (filter, bucket))| {
            let tags = bucket
                .iter()
                .filter_map(|name| {
                    let tag = taxonomy.tag(name);
                    if tag.is_none() {
                        tracing::trace!(
                            filter = %filter,
                            tag = %name,
                            "Skipping tag without record"
                        );
                    }
                    tag
                })
                .filter(|tag| tag.name.to_lowercase().contains(&needle))
                .map(TagMatch::from)
                .collect();

            FilterSection {
                filter: filter.clone(),
                color: palette_color(index),
                tags,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_taxonomy;
    use std::collections::HashSet;

    fn matched_names(sections: &[FilterSection]) -> Vec<&str> {
        sections
            .iter()
            .flat_map(|s| s.tags.iter().map(|t| t.name.as_str()))
            .collect()
    }

    #[test]
    fn test_matches_case_insensitive() {
        assert!(matches("Product", "pro"));
        assert!(matches("product", "pro"));
        assert!(matches("PRODUCT", "Pro"));
    }

    #[test]
    fn test_matches_respects_spaces() {
        assert!(!matches("prod uct", "product"));
        assert!(matches("prod uct", "prod"));
    }

    #[test]
    fn test_matches_empty_term() {
        assert!(matches("anything", ""));
        assert!(matches("", ""));
    }

    #[test]
    fn test_empty_term_returns_every_resolvable_tag_once() {
        let taxonomy = sample_taxonomy();
        let sections = filter_tags(&taxonomy, "");

        let names = matched_names(&sections);
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
        assert_eq!(names.len(), taxonomy.tag_count());

        for section in &sections {
            for tag in &section.tags {
                assert_eq!(tag.filter, section.filter);
            }
        }
    }

    #[test]
    fn test_sections_follow_filter_order() {
        let sections = filter_tags(&sample_taxonomy(), "");
        let filters: Vec<&str> = sections.iter().map(|s| s.filter.as_str()).collect();
        assert_eq!(filters, vec!["Industry", "Products", "Language"]);
    }

    #[test]
    fn test_tags_keep_bucket_order() {
        let sections = filter_tags(&sample_taxonomy(), "");
        let industry: Vec<&str> = sections[0].tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(industry, vec!["Retail", "Healthcare", "Financial Services"]);
    }

    #[test]
    fn test_dangling_and_non_record_names_are_skipped() {
        let sections = filter_tags(&sample_taxonomy(), "");
        let products: Vec<&str> = sections[1].tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(products, vec!["Cloud", "Storage", "Compute"]);
    }

    #[test]
    fn test_sections_without_matches_are_kept() {
        let sections = filter_tags(&sample_taxonomy(), "retail");

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].len(), 1);
        assert!(sections[1].is_empty());
        assert!(sections[2].is_empty());
    }

    #[test]
    fn test_match_carries_path() {
        let sections = filter_tags(&sample_taxonomy(), "stor");
        let storage = &sections[1].tags[0];

        assert_eq!(storage.name, "Storage");
        assert_eq!(storage.path, "Cloud/");
        assert_eq!(storage.category, "Products");
        assert_eq!(storage.entry().path(), "Cloud/");
    }

    #[test]
    fn test_palette_assignment() {
        let sections = filter_tags(&sample_taxonomy(), "");
        assert_eq!(sections[0].color, "fc5c65");
        assert_eq!(sections[1].color, "fd9644");
        assert_eq!(sections[2].color, "fed330");
    }

    #[test]
    fn test_palette_cycles_after_six_filters() {
        let mut builder = Taxonomy::builder("en");
        for i in 0..8 {
            builder = builder.filter(format!("f{i}"), Vec::<String>::new());
        }
        let sections = filter_tags(&builder.build(), "");

        assert_eq!(sections[5].color, "45aaf2");
        assert_eq!(sections[6].color, sections[0].color);
        assert_eq!(sections[7].color, sections[1].color);
    }

    #[test]
    fn test_no_filters_no_sections() {
        let taxonomy = Taxonomy::builder("en").build();
        assert!(filter_tags(&taxonomy, "").is_empty());
    }
}
