//! Language tag syntax and lookup truncation.
//!
//! Only the shape needed for matching is checked: subtags of 1-8 ASCII
//! alphanumerics joined by `-`, first subtag alphabetic, or the `*`
//! wildcard. Tags are kept lowercased; matching is case-insensitive.

use std::fmt;

/// A syntactically valid, lowercased language range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Parse a language range, returning `None` if it is malformed.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw == "*" {
            return Some(Self(raw.to_string()));
        }
        if raw.is_empty() {
            return None;
        }

        for (i, subtag) in raw.split('-').enumerate() {
            if subtag.is_empty() || subtag.len() > 8 {
                return None;
            }
            let valid = if i == 0 {
                subtag.bytes().all(|b| b.is_ascii_alphabetic())
            } else {
                subtag.bytes().all(|b| b.is_ascii_alphanumeric())
            };
            if !valid {
                return None;
            }
        }

        Some(Self(raw.to_ascii_lowercase()))
    }

    /// True for the `*` range, which names no concrete language.
    pub fn is_wildcard(&self) -> bool {
        self.0 == "*"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`pt` for `pt-BR`). `None` for `*`.
    pub fn primary_language(&self) -> Option<&str> {
        if self.is_wildcard() {
            return None;
        }
        self.0.split('-').next()
    }

    /// Lookup fallback chain, most specific first.
    ///
    /// `zh-hant-cn-x-private` yields `zh-hant-cn-x-private`, `zh-hant-cn`,
    /// `zh-hant`, `zh`. A singleton left dangling at the end of a truncation
    /// is removed along with it.
    pub fn fallbacks(&self) -> Fallbacks<'_> {
        Fallbacks {
            remaining: if self.is_wildcard() { None } else { Some(self.0.as_str()) },
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Iterator over progressively truncated forms of a tag.
#[derive(Debug, Clone)]
pub struct Fallbacks<'a> {
    remaining: Option<&'a str>,
}

impl<'a> Iterator for Fallbacks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.remaining?;
        self.remaining = truncate(current);
        Some(current)
    }
}

fn truncate(tag: &str) -> Option<&str> {
    let (mut head, _) = tag.rsplit_once('-')?;
    // A singleton ("x", "u", ...) cannot end a range on its own.
    if let Some((rest, last)) = head.rsplit_once('-') {
        if last.len() == 1 {
            head = rest;
        }
    }
    Some(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case() {
        let tag = LanguageTag::parse(" fr-CA ").unwrap();
        assert_eq!(tag.as_str(), "fr-ca");
        assert_eq!(tag.to_string(), "fr-ca");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(LanguageTag::parse("").is_none());
        assert!(LanguageTag::parse("en_US").is_none());
        assert!(LanguageTag::parse("en--us").is_none());
        assert!(LanguageTag::parse("1en").is_none());
        assert!(LanguageTag::parse("toolongsubtag").is_none());
        assert!(LanguageTag::parse("en-").is_none());
    }

    #[test]
    fn test_wildcard() {
        let tag = LanguageTag::parse("*").unwrap();
        assert!(tag.is_wildcard());
        assert_eq!(tag.fallbacks().count(), 0);
    }

    #[test]
    fn test_primary_language() {
        assert_eq!(LanguageTag::parse("pt-BR").unwrap().primary_language(), Some("pt"));
        assert_eq!(LanguageTag::parse("de").unwrap().primary_language(), Some("de"));
        assert_eq!(LanguageTag::parse("*").unwrap().primary_language(), None);
    }

    #[test]
    fn test_fallback_chain() {
        let tag = LanguageTag::parse("en-US").unwrap();
        let chain: Vec<_> = tag.fallbacks().collect();
        assert_eq!(chain, vec!["en-us", "en"]);
    }

    #[test]
    fn test_fallback_drops_dangling_singleton() {
        let tag = LanguageTag::parse("zh-Hant-CN-x-private1").unwrap();
        let chain: Vec<_> = tag.fallbacks().collect();
        assert_eq!(chain, vec!["zh-hant-cn-x-private1", "zh-hant-cn", "zh-hant", "zh"]);
    }
}
