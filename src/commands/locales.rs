//! Locales command - list locales that have a taxonomy

use crate::{TaggerError, output, taxonomy::TaxonomyProvider};

type Result<T> = std::result::Result<T, TaggerError>;

/// Execute the locales command
pub fn execute(provider: &dyn TaxonomyProvider, active: &str, quiet: bool) -> Result<()> {
    let locales = provider.locales();

    if locales.is_empty() {
        if !quiet {
            println!("No taxonomies found.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Available locales:");
    }
    for locale in &locales {
        println!("{}", output::locale_entry(locale, locale == active, quiet));
    }
    Ok(())
}
