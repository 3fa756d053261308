//! Export command - select tags by name and print them grouped by category

use crate::{
    TaggerError,
    cli::ExportFormat,
    output,
    session::{SessionError, TagRef, TaggerSession},
    taxonomy::TaxonomyProvider,
};
use std::io;

type Result<T> = std::result::Result<T, TaggerError>;

/// Export parameters taken from the command line
#[derive(Debug, Clone)]
pub struct ExportParams<'a> {
    pub tags: &'a [String],
    pub format: ExportFormat,
    pub copy: Option<&'a str>,
    pub no_clipboard: bool,
    pub delimiter: &'a str,
}

/// Execute the export command
///
/// Tags are selected in argument order; repeated names are selected once.
///
/// # Errors
/// Returns an error if the taxonomy cannot be loaded, a tag name is unknown,
/// the copy category has no selected tags, or writing the output fails
pub fn execute(
    provider: &dyn TaxonomyProvider,
    locale: &str,
    params: &ExportParams<'_>,
    quiet: bool,
) -> Result<()> {
    let mut session = TaggerSession::start(provider, locale).with_delimiter(params.delimiter);

    if let Some(reason) = session.load_error() {
        eprintln!("{}", output::load_failure(Some(reason), quiet));
        return Err(SessionError::TaxonomyUnavailable(locale.to_string()).into());
    }

    let mut seen: Vec<&str> = Vec::with_capacity(params.tags.len());
    for name in params.tags {
        if seen.contains(&name.as_str()) {
            continue;
        }
        seen.push(name);
        session.toggle(TagRef::Name(name.clone()))?;
    }

    let view = session.view()?;
    match params.format {
        ExportFormat::Text => print!("{}", output::selection(&view, params.delimiter, quiet)),
        ExportFormat::Json => println!("{}", view.groups.to_json()?),
        ExportFormat::Csv => view.groups.write_csv(io::stdout().lock(), params.delimiter)?,
    }

    if let Some(category) = params.copy {
        let mut clipboard = super::clipboard_for(params.no_clipboard);
        let text = session.copy_category(category, clipboard.as_mut())?;
        if params.no_clipboard {
            println!("{text}");
        } else if !quiet {
            eprintln!("Copied {category} tags to clipboard: {text}");
        }
    }
    Ok(())
}
