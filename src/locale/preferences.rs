//! `Accept-Language` parsing.
//!
//! # Design Decisions
//! - A bad entry is skipped, the rest of the header still counts
//! - Header order is kept here; the negotiator sorts by weight
//! - `q=0` entries are kept so callers can see them, negotiation drops them

use super::tag::LanguageTag;

/// One weighted entry of a language preference list.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    pub tag: LanguageTag,
    /// Quality weight in [0, 1].
    pub weight: f32,
}

impl LanguagePreference {
    /// Build a preference from a tag string, `None` if the tag is malformed
    /// or the weight falls outside [0, 1].
    pub fn new(tag: &str, weight: f32) -> Option<Self> {
        if !(0.0..=1.0).contains(&weight) {
            return None;
        }
        Some(Self {
            tag: LanguageTag::parse(tag)?,
            weight,
        })
    }

    fn parse(entry: &str) -> Option<Self> {
        let mut params = entry.split(';');
        let tag = LanguageTag::parse(params.next()?)?;

        let mut weight = 1.0;
        for param in params {
            let Some((key, value)) = param.split_once('=') else {
                continue;
            };
            if key.trim().eq_ignore_ascii_case("q") {
                weight = parse_weight(value.trim())?;
            }
        }

        Some(Self { tag, weight })
    }
}

/// Parse an `Accept-Language` value into preferences, in header order.
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
    header
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(LanguagePreference::parse)
        .collect()
}

/// qvalue = ( "0" [ "." 0*3DIGIT ] ) / ( "1" [ "." 0*3("0") ] )
fn parse_weight(value: &str) -> Option<f32> {
    let (int, frac) = match value.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (value, ""),
    };
    if frac.len() > 3 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match int {
        "0" => {}
        "1" if frac.bytes().all(|b| b == b'0') => {}
        _ => return None,
    }
    value.parse::<f32>().ok()
}
