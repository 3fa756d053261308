//! Output formatting for CLI display
//!
//! Renders the structured data produced by the engine: filter sections as
//! colored chips, the ordered selection, and per-category copy strings.
//! Quiet mode drops decoration so output can be piped.

use crate::search::{FilterSection, TagMatch};
use crate::session::SelectionView;
use colored::Colorize;
use std::fmt::Write;

/// Shown in place of results when the taxonomy could not be loaded
pub const LOAD_FAILURE_MESSAGE: &str = "Could not retrieve tags.";

/// Parse a `rrggbb` palette entry
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn paint(text: &str, color: &str) -> String {
    match hex_to_rgb(color) {
        Some((r, g, b)) => text.truecolor(r, g, b).bold().to_string(),
        None => text.bold().to_string(),
    }
}

/// Format a single tag chip: dimmed parent path, colored name
#[must_use]
pub fn tag_chip(tag: &TagMatch, color: &str, selected: bool) -> String {
    let marker = if selected { "*".green().bold().to_string() } else { " ".to_string() };
    if tag.path.is_empty() {
        format!("{marker} {}", paint(&tag.name, color))
    } else {
        format!("{marker} {}{}", tag.path.as_str().dimmed(), paint(&tag.name, color))
    }
}

/// Format one filter section with its heading
///
/// In quiet mode only the matching names are printed, one per line.
pub fn section<F>(section: &FilterSection, is_selected: F, quiet: bool) -> String
where
    F: Fn(&TagMatch) -> bool,
{
    let mut out = String::new();

    if quiet {
        for tag in &section.tags {
            let _ = writeln!(out, "{}{}", tag.path, tag.name);
        }
        return out;
    }

    let _ = writeln!(out, "{}", paint(&section.filter, section.color));
    if section.is_empty() {
        let _ = writeln!(out, "  {}", "(no matches)".dimmed());
    }
    for tag in &section.tags {
        let _ = writeln!(out, "  {}", tag_chip(tag, section.color, is_selected(tag)));
    }
    out
}

/// Format every section, skipping empty ones in quiet mode
pub fn sections<F>(sections: &[FilterSection], is_selected: F, quiet: bool) -> String
where
    F: Fn(&TagMatch) -> bool,
{
    sections
        .iter()
        .filter(|s| !(quiet && s.is_empty()))
        .map(|s| section(s, &is_selected, quiet))
        .collect::<Vec<_>>()
        .join(if quiet { "" } else { "\n" })
}

/// Format the ordered selection followed by the per-category copy strings
///
/// Quiet mode prints `category<TAB>joined names` lines only.
#[must_use]
pub fn selection(view: &SelectionView, delimiter: &str, quiet: bool) -> String {
    let mut out = String::new();

    if quiet {
        for (category, names) in view.groups.iter() {
            let _ = writeln!(out, "{category}\t{}", names.join(delimiter));
        }
        return out;
    }

    if view.is_empty() {
        let _ = writeln!(out, "{}", "No tags selected.".dimmed());
        return out;
    }

    let _ = writeln!(out, "{}", "Selected tags:".bold());
    for entry in &view.entries {
        if entry.path().is_empty() {
            let _ = writeln!(out, "  {}", entry.name());
        } else {
            let _ = writeln!(out, "  {}{}", entry.path().dimmed(), entry.name());
        }
    }

    let _ = writeln!(out, "\n{}", "Copy tags for:".bold());
    for (category, names) in view.groups.iter() {
        let _ = writeln!(out, "  {}: {}", category.cyan(), names.join(delimiter));
    }
    out
}

/// Format the failure state shown when the taxonomy did not load
#[must_use]
pub fn load_failure(reason: Option<&str>, quiet: bool) -> String {
    match reason {
        Some(reason) if !quiet => format!("{}\n  {}", LOAD_FAILURE_MESSAGE.red(), reason.dimmed()),
        _ => LOAD_FAILURE_MESSAGE.red().to_string(),
    }
}

/// Format a locale list entry, marking the active locale
#[must_use]
pub fn locale_entry(locale: &str, active: bool, quiet: bool) -> String {
    if quiet {
        locale.to_string()
    } else if active {
        format!("* {}", locale.green())
    } else {
        format!("  {locale}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::group;
    use crate::testing::entry;

    fn storage() -> TagMatch {
        TagMatch {
            name: "Storage".into(),
            path: "Cloud/".into(),
            category: "Products".into(),
            filter: "Products".into(),
        }
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("fc5c65"), Some((0xfc, 0x5c, 0x65)));
        assert_eq!(hex_to_rgb("#45aaf2"), Some((0x45, 0xaa, 0xf2)));
        assert_eq!(hex_to_rgb("fff"), None);
        assert_eq!(hex_to_rgb("zzzzzz"), None);
    }

    #[test]
    fn test_tag_chip_shows_path_and_name() {
        let chip = tag_chip(&storage(), "fd9644", false);
        assert!(chip.contains("Cloud/"));
        assert!(chip.contains("Storage"));
    }

    #[test]
    fn test_section_quiet_lists_names() {
        let section = FilterSection {
            filter: "Products".into(),
            color: "fd9644",
            tags: vec![storage()],
        };

        assert_eq!(super::section(&section, |_| false, true), "Cloud/Storage\n");
    }

    #[test]
    fn test_empty_section_shows_heading() {
        let section = FilterSection {
            filter: "Language".into(),
            color: "fed330",
            tags: Vec::new(),
        };

        let text = super::section(&section, |_| false, false);
        assert!(text.contains("Language"));
        assert!(text.contains("(no matches)"));
    }

    #[test]
    fn test_sections_quiet_skips_empty() {
        let filled = FilterSection {
            filter: "Products".into(),
            color: "fd9644",
            tags: vec![storage()],
        };
        let empty = FilterSection {
            filter: "Language".into(),
            color: "fed330",
            tags: Vec::new(),
        };

        assert_eq!(sections(&[empty, filled], |_| false, true), "Cloud/Storage\n");
    }

    #[test]
    fn test_selection_quiet_lines() {
        let entries = vec![
            entry("Healthcare", "Industry", "Industry", ""),
            entry("Retail", "Industry", "Industry", ""),
            entry("EN", "Language", "Language", ""),
        ];
        let view = SelectionView {
            groups: group(&entries),
            entries,
        };

        assert_eq!(
            selection(&view, ", ", true),
            "Industry\tHealthcare, Retail\nLanguage\tEN\n"
        );
    }

    #[test]
    fn test_selection_empty() {
        let text = selection(&SelectionView::default(), ", ", false);
        assert!(text.contains("No tags selected."));
    }

    #[test]
    fn test_load_failure_message() {
        assert!(load_failure(Some("missing"), false).contains(LOAD_FAILURE_MESSAGE));
        assert!(load_failure(None, true).contains(LOAD_FAILURE_MESSAGE));
    }

    #[test]
    fn test_locale_entry_quiet() {
        assert_eq!(locale_entry("en", true, true), "en");
        assert_eq!(locale_entry("fr", false, false), "  fr");
    }
}
