use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::normalize_key;

/// Longest word n-gram tried against the candidates.
pub const MAX_NGRAM: usize = 4;

static SEGMENT_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[|,;]+").expect("valid delimiter regex"));

static STREET_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(ul|ulica|al|aleja|os|osiedle|pl|plac)\.?\s+").expect("valid prefix regex")
});

/// How a locality was recognised in the hint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchSource {
    /// A whole delimited segment matched.
    Segment,
    /// A run of `words` consecutive words matched.
    Ngram { words: usize },
}

/// A recognised locality: canonical spelling, the key it matched on and how.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocalityMatch<'a> {
    pub canonical: &'a str,
    pub key: String,
    pub source: MatchSource,
}

/// Propose a locality for `hint`.
///
/// `canonical_for` maps a normalised key to the canonical locality name of
/// whichever index the caller searches; it typically delegates to
/// `LocalityIndex::canonical` or to a court-scoped index. Segments are
/// trusted over n-grams and longer n-grams over shorter ones; the first hit
/// wins.
pub fn infer_locality<'a, F>(hint: &str, canonical_for: F) -> Option<LocalityMatch<'a>>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let whole = normalize_key(hint)?;

    let segments: Vec<String> = SEGMENT_DELIMITERS
        .split(hint)
        .filter_map(normalize_key)
        .collect();
    // Addresses tend to end with the locality.
    for segment in segments.iter().rev() {
        let key = STREET_PREFIX.replace(segment, "");
        let key = key.trim();
        if let Some(canonical) = canonical_for(key) {
            return Some(LocalityMatch {
                canonical,
                key: key.to_string(),
                source: MatchSource::Segment,
            });
        }
    }

    let words: Vec<&str> = whole.split_whitespace().collect();
    for n in (1..=MAX_NGRAM).rev() {
        for window in words.windows(n) {
            let phrase = window.join(" ");
            if let Some(canonical) = canonical_for(&phrase) {
                return Some(LocalityMatch {
                    canonical,
                    key: phrase,
                    source: MatchSource::Ngram { words: n },
                });
            }
        }
    }

    None
}
