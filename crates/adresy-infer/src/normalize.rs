//! Missing-value detection and the comparison keys every lookup is made on.
//!
//! Locality keys keep `ł`: it is a letter of its own, so "Łazy" and "Lazy"
//! are different places. Region keys fold it to `l`, which the historical
//! region table is written in.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

/// Lower-cased cell values that mean "no data".
const MISSING_TOKENS: [&str; 10] = [
    "---",
    "--",
    "—",
    "–",
    "-",
    "brak",
    "brak danych",
    "nan",
    "none",
    "",
];

/// True when the trimmed, lower-cased cell is one of the missing-value
/// tokens, the empty string included.
pub fn is_missing(raw: &str) -> bool {
    let lowered = raw.trim().to_lowercase();
    MISSING_TOKENS.contains(&lowered.as_str())
}

/// Trimmed value, or `None` when the cell holds a missing-value token.
/// Case is preserved.
pub fn normalize_missing(raw: &str) -> Option<&str> {
    if is_missing(raw) {
        None
    } else {
        Some(raw.trim())
    }
}

/// Comparison key: lower-cased, diacritics removed, whitespace collapsed.
///
/// Punctuation and digits are kept. Returns `None` for blank input.
pub fn normalize_key(raw: &str) -> Option<String> {
    collapse_whitespace(&fold(raw))
}

/// Stricter key for region names: like [`normalize_key`], but anything other
/// than an ASCII letter or whitespace becomes a space, and `ł` folds to `l`.
pub fn normalize_region_key(raw: &str) -> Option<String> {
    let letters: String = fold(raw)
        .chars()
        .map(|c| {
            if c == 'ł' {
                'l'
            } else if c.is_ascii_lowercase() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    collapse_whitespace(&letters)
}

/// Display form used when a value is written back: first character
/// upper-cased, the rest unchanged.
pub fn display_case(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn fold(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect()
}

fn collapse_whitespace(text: &str) -> Option<String> {
    let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if joined.is_empty() { None } else { Some(joined) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_missing_tokens() {
        for raw in ["---", "brak danych", "NaN", "", "  ", "None", "—", "BRAK"] {
            assert!(is_missing(raw), "{raw:?} should be missing");
            assert_eq!(normalize_missing(raw), None);
        }
        assert!(!is_missing("Brakowo"));
    }

    #[test]
    fn normalize_missing_keeps_case() {
        assert_eq!(normalize_missing("  Nowy Sącz "), Some("Nowy Sącz"));
    }

    #[test]
    fn keys_strip_diacritics_and_whitespace() {
        assert_eq!(normalize_key("  Nowy   SĄCZ ").as_deref(), Some("nowy sacz"));
        assert_eq!(normalize_key("Łódź").as_deref(), Some("łodz"));
        assert_eq!(normalize_key("ul. Długa 5").as_deref(), Some("ul. długa 5"));
        assert_eq!(normalize_key(" \t "), None);
    }

    #[test]
    fn locality_keys_keep_l_with_stroke() {
        assert_ne!(normalize_key("Łazy"), normalize_key("Lazy"));
        assert_eq!(normalize_key("ŁAZY").as_deref(), Some("łazy"));
        assert_eq!(normalize_region_key("ŁOMŻYŃSKIE").as_deref(), Some("lomzynskie"));
    }

    #[test]
    fn region_keys_drop_punctuation_and_digits() {
        assert_eq!(
            normalize_region_key("Woj. PŁOCKIE (1975)").as_deref(),
            Some("woj plockie")
        );
        assert_eq!(
            normalize_region_key("kujawsko-pomorskie").as_deref(),
            Some("kujawsko pomorskie")
        );
        assert_eq!(normalize_region_key("123"), None);
    }

    #[test]
    fn display_case_only_touches_first_character() {
        assert_eq!(display_case("dolnośląskie"), "Dolnośląskie");
        assert_eq!(display_case("ŁÓDŹ"), "ŁÓDŹ");
        assert_eq!(display_case("  śrem "), "Śrem");
        assert_eq!(display_case(""), "");
    }
}
