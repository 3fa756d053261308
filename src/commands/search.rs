//! Search command - print the tags matching a term, grouped by filter

use crate::{TaggerError, output, search, taxonomy::TaxonomyProvider};

type Result<T> = std::result::Result<T, TaggerError>;

/// Execute the search command
///
/// # Errors
/// Returns an error if the taxonomy for `locale` cannot be loaded
pub fn execute(
    provider: &dyn TaxonomyProvider,
    locale: &str,
    term: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let taxonomy = match provider.load(locale) {
        Ok(taxonomy) => taxonomy,
        Err(e) => {
            eprintln!("{}", output::load_failure(Some(&e.to_string()), quiet));
            return Err(e.into());
        }
    };

    let sections = search::filter_tags(&taxonomy, term.unwrap_or_default());
    let matched: usize = sections.iter().map(search::FilterSection::len).sum();

    if matched == 0 {
        if !quiet {
            println!("No tags match '{}'.", term.unwrap_or_default());
        }
        return Ok(());
    }

    print!("{}", output::sections(&sections, |_| false, quiet));
    if !quiet {
        println!("\n{matched} tag(s) in {} filter(s)", sections.len());
    }
    Ok(())
}
