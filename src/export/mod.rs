//! Export grouping
//!
//! Partitions an ordered selection by category. Category keys appear in the
//! order they are first met in the selection, and names inside a category keep
//! selection order, so grouping the output of
//! [`selection::order`](crate::selection::order) yields filter/path/name order
//! within each category.
//!
//! Joining names into a single copy-ready string is left to the caller; see
//! [`ExportGroups::joined`].

use crate::selection::SelectionEntry;
use indexmap::IndexMap;
use serde::Serialize;
use std::io::Write;

/// Delimiter used when joining a category's names
pub const DEFAULT_DELIMITER: &str = ", ";

/// Ordered category → tag names mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExportGroups {
    groups: IndexMap<String, Vec<String>>,
}

/// Group ordered entries by category
#[must_use]
pub fn group<'a, I>(ordered: I) -> ExportGroups
where
    I: IntoIterator<Item = &'a SelectionEntry>,
{
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for entry in ordered {
        groups
            .entry(entry.category().to_string())
            .or_default()
            .push(entry.name().to_string());
    }
    ExportGroups { groups }
}

impl ExportGroups {
    /// Names selected under `category`
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    /// Names under `category` joined by `delimiter`
    #[must_use]
    pub fn joined(&self, category: &str, delimiter: &str) -> Option<String> {
        self.groups.get(category).map(|names| names.join(delimiter))
    }

    /// Categories in first-occurrence order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(category, names)| (category.as_str(), names.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Serialize as a JSON object keyed by category
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write one `category,tags` CSV row per category
    ///
    /// # Errors
    ///
    /// Returns `csv::Error` if writing to `writer` fails.
    pub fn write_csv<W: Write>(&self, writer: W, delimiter: &str) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["category", "tags"])?;
        for (category, names) in &self.groups {
            csv_writer.write_record([category.as_str(), names.join(delimiter).as_str()])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::order;
    use crate::testing::{entry, sample_taxonomy};

    #[test]
    fn test_group_orders_within_category() {
        let taxonomy = sample_taxonomy();
        let selection = vec![
            entry("Retail", "Industry", "Industry", ""),
            entry("Healthcare", "Industry", "Industry", ""),
            entry("EN", "Language", "Language", ""),
        ];

        let groups = group(&order(&selection, &taxonomy));

        assert_eq!(groups.get("Industry").unwrap(), ["Healthcare", "Retail"]);
        assert_eq!(groups.get("Language").unwrap(), ["EN"]);
        assert_eq!(groups.categories().collect::<Vec<_>>(), vec!["Industry", "Language"]);
    }

    #[test]
    fn test_group_uses_first_occurrence_order() {
        let unordered = vec![
            entry("EN", "Language", "Language", ""),
            entry("Retail", "Industry", "Industry", ""),
            entry("DE", "Language", "Language", ""),
        ];

        let groups = group(&unordered);

        assert_eq!(groups.categories().collect::<Vec<_>>(), vec!["Language", "Industry"]);
        assert_eq!(groups.get("Language").unwrap(), ["EN", "DE"]);
    }

    #[test]
    fn test_group_empty_selection() {
        let groups = group(&Vec::<SelectionEntry>::new());
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
        assert!(groups.get("Industry").is_none());
    }

    #[test]
    fn test_joined_with_default_delimiter() {
        let groups = group(&vec![
            entry("Healthcare", "Industry", "Industry", ""),
            entry("Retail", "Industry", "Industry", ""),
        ]);

        assert_eq!(
            groups.joined("Industry", DEFAULT_DELIMITER).as_deref(),
            Some("Healthcare, Retail")
        );
        assert_eq!(groups.joined("Language", DEFAULT_DELIMITER), None);
    }

    #[test]
    fn test_path_is_not_exported() {
        let groups = group(&vec![entry("Storage", "Products", "Products", "Cloud/")]);
        assert_eq!(groups.joined("Products", ";").as_deref(), Some("Storage"));
    }

    #[test]
    fn test_to_json_keeps_category_order() {
        let groups = group(&vec![
            entry("EN", "Language", "Language", ""),
            entry("Retail", "Industry", "Industry", ""),
        ]);

        let json = groups.to_json().unwrap();
        let language = json.find("Language").unwrap();
        let industry = json.find("Industry").unwrap();
        assert!(language < industry);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Industry"], serde_json::json!(["Retail"]));
    }

    #[test]
    fn test_write_csv() {
        let groups = group(&vec![
            entry("Healthcare", "Industry", "Industry", ""),
            entry("Retail", "Industry", "Industry", ""),
            entry("EN", "Language", "Language", ""),
        ]);

        let mut buffer = Vec::new();
        groups.write_csv(&mut buffer, ", ").unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "category,tags\nIndustry,\"Healthcare, Retail\"\nLanguage,EN\n"
        );
    }
}
