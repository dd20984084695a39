//! Locale-prefixed path helpers.

use crate::locale::LocaleSettings;

/// Split `/menu?tab=pizzas` into `("/menu", "?tab=pizzas")`.
pub fn split_query(path_and_query: &str) -> (&str, &str) {
    match path_and_query.find('?') {
        Some(i) => path_and_query.split_at(i),
        None => (path_and_query, ""),
    }
}

/// Paths must start with `/`; anything else is treated as the site root.
pub fn normalize(path_and_query: &str) -> &str {
    if path_and_query.starts_with('/') {
        path_and_query
    } else {
        "/"
    }
}

/// The supported locale that `path` is prefixed with, if any.
///
/// A prefix counts when the path is exactly `/<loc>` or starts with
/// `/<loc>/`. The comparison is a literal, case-sensitive string test.
pub fn locale_prefix<'a>(settings: &'a LocaleSettings, path: &str) -> Option<&'a str> {
    let rest = path.strip_prefix('/')?;
    settings.codes().find(|code| {
        rest.strip_prefix(code)
            .is_some_and(|tail| tail.is_empty() || tail.starts_with('/'))
    })
}

/// Remove a recognized locale prefix: `/fr/menu` → `/menu`, `/fr` → `/`.
/// Paths without a recognized prefix come back unchanged.
pub fn strip_locale<'p>(settings: &LocaleSettings, path: &'p str) -> &'p str {
    let Some(code) = locale_prefix(settings, path) else {
        return path;
    };
    match &path[code.len() + 1..] {
        "" => "/",
        tail => tail,
    }
}

/// Link target for `path` in `locale`: `/menu` → `/fr/menu`, `/` → `/fr`.
pub fn localized_path(locale: &str, path: &str) -> String {
    match path {
        "" | "/" => format!("/{}", locale),
        _ => format!("/{}{}", locale, path),
    }
}

/// Same page in another language, as used by a language switcher.
pub fn switch_locale(settings: &LocaleSettings, path: &str, locale: &str) -> String {
    localized_path(locale, strip_locale(settings, path))
}
