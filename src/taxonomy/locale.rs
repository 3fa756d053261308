//! Locale resolution
//!
//! The active locale picks which taxonomy snapshot a session works on. It
//! comes from an explicit flag (a code or a `locale` query) or the configured
//! default, falling back to [`DEFAULT_LOCALE`].

/// Locale used when nothing else is specified
pub const DEFAULT_LOCALE: &str = "en";

/// Name of the query parameter carrying the locale
pub const LOCALE_PARAM: &str = "locale";

/// Read the `locale` parameter from a URL-style query string
///
/// Accepts the query with or without the leading `?`. The first occurrence
/// wins and an empty value counts as absent.
///
/// # Examples
/// ```
/// use tagger::taxonomy::locale::locale_from_query;
///
/// assert_eq!(locale_from_query("?locale=de&x=1"), Some("de".to_string()));
/// assert_eq!(locale_from_query("x=1"), None);
/// ```
#[must_use]
pub fn locale_from_query(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let value = parts.next().unwrap_or("");
            (key == LOCALE_PARAM).then_some(value)
        })
        .next()
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

/// Read a `--locale` argument: a bare code (`de`) or a query (`?locale=de`)
///
/// Returns `None` for a blank code or a query without a `locale` value.
///
/// # Examples
/// ```
/// use tagger::taxonomy::locale::locale_from_arg;
///
/// assert_eq!(locale_from_arg("de"), Some("de".to_string()));
/// assert_eq!(locale_from_arg("?locale=fr&x=1"), Some("fr".to_string()));
/// ```
#[must_use]
pub fn locale_from_arg(arg: &str) -> Option<String> {
    let arg = arg.trim();
    if arg.starts_with('?') || arg.contains('=') {
        locale_from_query(arg)
    } else {
        (!arg.is_empty()).then(|| arg.to_string())
    }
}

/// Pick the active locale
///
/// Precedence: `explicit` (command line) → `configured` (config file) →
/// [`DEFAULT_LOCALE`]. Blank values are skipped.
#[must_use]
pub fn resolve_locale(explicit: Option<&str>, configured: Option<&str>) -> String {
    explicit
        .into_iter()
        .chain(configured)
        .map(str::trim)
        .find(|locale| !locale.is_empty())
        .unwrap_or(DEFAULT_LOCALE)
        .to_string()
}
