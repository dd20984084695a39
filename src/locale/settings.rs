//! Supported locale set and default locale.

use serde::Serialize;
use thiserror::Error;

use super::tag::LanguageTag;

/// Errors raised while building [`LocaleSettings`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    /// No supported locales were given.
    #[error("at least one supported locale is required")]
    Empty,

    /// A locale code is not a valid language tag.
    #[error("invalid locale code '{0}'")]
    InvalidCode(String),

    /// The same locale is listed twice (case-insensitive).
    #[error("duplicate locale code '{0}'")]
    Duplicate(String),

    /// The default locale is not in the supported set.
    #[error("default locale '{0}' is not a supported locale")]
    DefaultNotSupported(String),
}

/// A supported locale and its human readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locale {
    pub code: String,
    pub name: String,
}

impl Locale {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Immutable locale configuration shared by every request.
///
/// Invariants, checked at construction:
/// - at least one locale
/// - every code is a concrete language tag
/// - no duplicates
/// - the default is one of the supported codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSettings {
    locales: Vec<Locale>,
    default_index: usize,
}

impl LocaleSettings {
    /// Build settings from an ordered list of locales and a default code.
    pub fn new(locales: Vec<Locale>, default_locale: &str) -> Result<Self, LocaleError> {
        if locales.is_empty() {
            return Err(LocaleError::Empty);
        }

        for (i, locale) in locales.iter().enumerate() {
            match LanguageTag::parse(&locale.code) {
                Some(tag) if !tag.is_wildcard() && locale.code.trim() == locale.code => {}
                _ => return Err(LocaleError::InvalidCode(locale.code.clone())),
            }
            if locales[..i]
                .iter()
                .any(|other| other.code.eq_ignore_ascii_case(&locale.code))
            {
                return Err(LocaleError::Duplicate(locale.code.clone()));
            }
        }

        let default_index = locales
            .iter()
            .position(|l| l.code == default_locale)
            .ok_or_else(|| LocaleError::DefaultNotSupported(default_locale.to_string()))?;

        Ok(Self {
            locales,
            default_index,
        })
    }

    /// Build settings from bare codes, using each code as its display name.
    pub fn from_codes(codes: &[&str], default_locale: &str) -> Result<Self, LocaleError> {
        let locales = codes.iter().map(|code| Locale::new(*code, *code)).collect();
        Self::new(locales, default_locale)
    }

    /// Supported locales in configured order.
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Supported codes in configured order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|l| l.code.as_str())
    }

    pub fn default_locale(&self) -> &str {
        &self.locales[self.default_index].code
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, code: &str) -> bool {
        self.codes().any(|c| c == code)
    }

    /// Case-insensitive lookup returning the configured spelling.
    pub fn find(&self, code: &str) -> Option<&str> {
        self.codes().find(|c| c.eq_ignore_ascii_case(code))
    }

    /// First supported code whose primary language subtag is `language`
    /// (case-insensitive), so `pt` finds `pt-BR`.
    pub fn find_language(&self, language: &str) -> Option<&str> {
        self.codes().find(|code| {
            code.split('-')
                .next()
                .is_some_and(|primary| primary.eq_ignore_ascii_case(language))
        })
    }

    /// The supported locale named by `code`, or the default locale.
    pub fn resolve_or_default(&self, code: &str) -> &str {
        self.codes()
            .find(|c| *c == code)
            .unwrap_or_else(|| self.default_locale())
    }
}

impl Default for LocaleSettings {
    /// The site's six languages with English as the fallback.
    fn default() -> Self {
        Self {
            locales: vec![
                Locale::new("ca", "Català"),
                Locale::new("en", "English"),
                Locale::new("de", "Deutsch"),
                Locale::new("fr", "Français"),
                Locale::new("it", "Italiano"),
                Locale::new("es", "Español"),
            ],
            default_index: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = LocaleSettings::default();
        assert_eq!(settings.default_locale(), "en");
        assert_eq!(
            settings.codes().collect::<Vec<_>>(),
            vec!["ca", "en", "de", "fr", "it", "es"]
        );
        assert_eq!(
            LocaleSettings::new(settings.locales().to_vec(), "en").unwrap(),
            settings
        );
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(LocaleSettings::from_codes(&[], "en"), Err(LocaleError::Empty));
        assert_eq!(
            LocaleSettings::from_codes(&["en", "e/n"], "en"),
            Err(LocaleError::InvalidCode("e/n".into()))
        );
        assert_eq!(
            LocaleSettings::from_codes(&["en", "*"], "en"),
            Err(LocaleError::InvalidCode("*".into()))
        );
        assert_eq!(
            LocaleSettings::from_codes(&["en", "EN"], "en"),
            Err(LocaleError::Duplicate("EN".into()))
        );
        assert_eq!(
            LocaleSettings::from_codes(&["en", "fr"], "de"),
            Err(LocaleError::DefaultNotSupported("de".into()))
        );
    }

    #[test]
    fn test_lookups() {
        let settings = LocaleSettings::from_codes(&["en", "pt-BR"], "en").unwrap();
        assert!(settings.contains("pt-BR"));
        assert!(!settings.contains("pt-br"));
        assert_eq!(settings.find("PT-br"), Some("pt-BR"));
        assert_eq!(settings.find("pt"), None);
        assert_eq!(settings.find_language("PT"), Some("pt-BR"));
        assert_eq!(settings.find_language("en"), Some("en"));
        assert_eq!(settings.find_language("es"), None);
    }

    #[test]
    fn test_resolve_or_default() {
        let settings = LocaleSettings::default();
        assert_eq!(settings.resolve_or_default("fr"), "fr");
        assert_eq!(settings.resolve_or_default("xx"), "en");
        assert_eq!(settings.resolve_or_default(""), "en");
    }
}
