//! Best-fit locale selection (RFC 4647 lookup).
//!
//! # Design Decisions
//! - Candidates are tried by descending weight; ties keep header order
//! - Each candidate is fully truncated before the next one is tried
//! - A candidate whose truncations all miss still matches a supported
//!   regional code of the same language (`pt` → `pt-BR`, `en-GB` → `en-US`)
//! - `q=0` means "not acceptable" and is never matched
//! - Nothing matched falls back to the default locale, never an error

use super::preferences::LanguagePreference;
use super::settings::LocaleSettings;

/// Pick the supported locale that best satisfies `preferences`.
///
/// The returned code is always a member of `settings`.
pub fn negotiate<'a>(settings: &'a LocaleSettings, preferences: &[LanguagePreference]) -> &'a str {
    lookup(settings, preferences).unwrap_or_else(|| settings.default_locale())
}

/// Like [`negotiate`] but reports a miss instead of using the default.
pub fn lookup<'a>(settings: &'a LocaleSettings, preferences: &[LanguagePreference]) -> Option<&'a str> {
    ranked(preferences).into_iter().find_map(|pref| {
        pref.tag
            .fallbacks()
            .find_map(|candidate| settings.find(candidate))
            .or_else(|| {
                pref.tag
                    .primary_language()
                    .and_then(|language| settings.find_language(language))
            })
    })
}

/// Acceptable preferences, highest weight first. `sort_by` is stable, so
/// equal weights stay in header order.
fn ranked(preferences: &[LanguagePreference]) -> Vec<&LanguagePreference> {
    let mut ranked: Vec<_> = preferences.iter().filter(|p| p.weight > 0.0).collect();
    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    ranked
}
