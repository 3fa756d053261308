//! Browse command - interactive search and selection loop
//!
//! Each input line is classified into a [`BrowseInput`], either a session
//! [`Intent`] or a front-end action, and the session's answer is rendered.
//!
//! | Input                      | Meaning                  |
//! |----------------------------|--------------------------|
//! | `/term`, `search term`     | update the search        |
//! | `Tag Name`, `toggle name`  | select / deselect a tag  |
//! | `copy Category`            | copy a category's tags   |
//! | `locale de`                | switch locale            |
//! | `sel`, `selection`         | show the selection       |
//! | `clear`                    | drop the whole selection |
//! | `help`, `?`                | show this help           |
//! | `quit`, `q`, `exit`        | leave                    |
//!
//! Keywords only apply in the arities above. A bare `search`, `copy` or
//! `locale` is a tag name, as is a keyword followed by extra text.

use crate::{
    TaggerError,
    clipboard::Clipboard,
    output,
    session::{Intent, Outcome, SessionError, TagRef, TaggerSession},
    selection::SelectionChange,
    taxonomy::TaxonomyProvider,
};
use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

type Result<T> = std::result::Result<T, TaggerError>;

const HELP: &str = "\
  /<term> | search <term>   filter tags by name
  <tag> | toggle <tag>      select or deselect a tag
  copy <category>           copy a category's tags
  locale <code>             switch locale (resets the selection)
  sel                       show the selection
  clear                     clear the selection
  help                      show this help
  quit                      leave

  A tag named like a command (e.g. 'help') is toggled with 'toggle <tag>'.
  '/' alone clears the search.";

/// A classified line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    /// Route to the session
    Intent(Intent),
    ShowSelection,
    ClearSelection,
    Help,
    Quit,
}

/// Classify one input line
///
/// Returns `None` for blank lines. Anything that is not a keyword is taken as
/// a tag name to toggle.
#[must_use]
pub fn parse_input(line: &str) -> Option<BrowseInput> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(term) = line.strip_prefix('/') {
        let term = term.trim().to_string();
        return Some(BrowseInput::Intent(Intent::UpdateSearch(term)));
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let input = match (keyword.to_lowercase().as_str(), rest) {
        ("q" | "quit" | "exit", "") => BrowseInput::Quit,
        ("?" | "help", "") => BrowseInput::Help,
        ("sel" | "selection", "") => BrowseInput::ShowSelection,
        ("clear", "") => BrowseInput::ClearSelection,
        ("search", term) if !term.is_empty() => {
            BrowseInput::Intent(Intent::UpdateSearch(term.to_string()))
        }
        ("copy", category) if !category.is_empty() => {
            BrowseInput::Intent(Intent::CopyCategory(category.to_string()))
        }
        ("locale", locale) if !locale.is_empty() => {
            BrowseInput::Intent(Intent::SetLocale(locale.to_string()))
        }
        ("toggle", name) if !name.is_empty() => {
            BrowseInput::Intent(Intent::ToggleTag(TagRef::Name(name.to_string())))
        }
        _ => BrowseInput::Intent(Intent::ToggleTag(TagRef::Name(line.to_string()))),
    };
    Some(input)
}

fn print_results(session: &TaggerSession<'_>, quiet: bool) {
    match session.results() {
        Ok(sections) => print!(
            "{}",
            output::sections(&sections, |tag| session.is_selected(tag), quiet)
        ),
        Err(_) => println!("{}", output::load_failure(session.load_error(), quiet)),
    }
}

fn print_selection(session: &TaggerSession<'_>, quiet: bool) {
    if let Ok(view) = session.view() {
        print!("{}", output::selection(&view, session.delimiter(), quiet));
    }
}

fn render(session: &TaggerSession<'_>, outcome: &Outcome, show_copied: bool, quiet: bool) {
    match outcome {
        Outcome::Results(_) => print_results(session, quiet),
        Outcome::SelectionChanged { change, entry, view } => {
            if !quiet {
                let verb = match change {
                    SelectionChange::Added => "Selected".green(),
                    SelectionChange::Removed => "Deselected".yellow(),
                };
                println!("{verb} {}{}", entry.path(), entry.name());
            }
            print!("{}", output::selection(view, session.delimiter(), quiet));
        }
        Outcome::Copied { category, text } => {
            if show_copied {
                println!("{text}");
            } else if !quiet {
                println!("Copied {} tags: {text}", category.cyan());
            }
        }
        Outcome::LocaleChanged { locale, available } => {
            if !quiet {
                println!("Locale: {locale}");
            }
            if *available {
                print_results(session, quiet);
            } else {
                println!("{}", output::load_failure(session.load_error(), quiet));
            }
        }
    }
}

/// Execute the browse command
///
/// Loads the taxonomy once, prints the initial results (or the failure
/// message) and then reads commands until `quit` or end of input. Errors from
/// individual commands are reported and the loop continues.
///
/// # Errors
/// Returns an error if reading from the terminal fails
pub fn execute(
    provider: &dyn TaxonomyProvider,
    locale: &str,
    query: Option<&str>,
    clipboard: &mut dyn Clipboard,
    show_copied: bool,
    delimiter: &str,
    quiet: bool,
) -> Result<()> {
    let mut session = TaggerSession::start(provider, locale).with_delimiter(delimiter);

    if session.is_ready() {
        if let Some(query) = query {
            session.update_search(query)?;
        }
        print_results(&session, quiet);
    } else {
        println!("{}", output::load_failure(session.load_error(), quiet));
    }

    if !quiet {
        println!("\nType a tag name to toggle it, /term to search, 'help' for more.");
    }

    loop {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("tagger [{}]", session.locale()))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| TaggerError::InvalidInput(format!("Failed to read input: {e}")))?;

        let Some(input) = parse_input(&line) else {
            continue;
        };

        match input {
            BrowseInput::Quit => break,
            BrowseInput::Help => println!("{HELP}"),
            BrowseInput::ShowSelection => print_selection(&session, quiet),
            BrowseInput::ClearSelection => {
                session.clear_selection();
                print_selection(&session, quiet);
            }
            BrowseInput::Intent(intent) => match session.dispatch(intent, clipboard) {
                Ok(outcome) => render(&session, &outcome, show_copied, quiet),
                Err(SessionError::TaxonomyUnavailable(_)) => {
                    println!("{}", output::load_failure(session.load_error(), quiet));
                    if !quiet {
                        println!("Search is disabled. Switch locale with 'locale <code>'.");
                    }
                }
                Err(e) => eprintln!("{} {e}", "error:".red()),
            },
        }
    }

    if !quiet {
        print_selection(&session, quiet);
    }
    Ok(())
}
