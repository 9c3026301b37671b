//! Pre-1999 region names and their modern successors.
//!
//! Poland had 49 regions between 1975 and 1998 and has had 16 since. Report
//! data still mixes both. [`resolve_region`] maps every historical name onto
//! its successor and upper-cases everything else, so "płockie", "PŁOCKIE" and
//! "województwo płockie" all become `MAZOWIECKIE`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::normalize::{normalize_missing, normalize_region_key};

/// The sixteen regions in force since 1999, upper case.
pub const MODERN_REGIONS: [&str; 16] = [
    "DOLNOŚLĄSKIE",
    "KUJAWSKO-POMORSKIE",
    "LUBELSKIE",
    "LUBUSKIE",
    "ŁÓDZKIE",
    "MAŁOPOLSKIE",
    "MAZOWIECKIE",
    "OPOLSKIE",
    "PODKARPACKIE",
    "PODLASKIE",
    "POMORSKIE",
    "ŚLĄSKIE",
    "ŚWIĘTOKRZYSKIE",
    "WARMIŃSKO-MAZURSKIE",
    "WIELKOPOLSKIE",
    "ZACHODNIOPOMORSKIE",
];

/// Region keys of the 1975–1998 division and the region each became part of.
const HISTORICAL_REGIONS: [(&str, &str); 49] = [
    ("wroclawskie", "DOLNOŚLĄSKIE"),
    ("jeleniogorskie", "DOLNOŚLĄSKIE"),
    ("walbrzyskie", "DOLNOŚLĄSKIE"),
    ("legnickie", "DOLNOŚLĄSKIE"),
    ("bydgoskie", "KUJAWSKO-POMORSKIE"),
    ("torunskie", "KUJAWSKO-POMORSKIE"),
    ("wloclawskie", "KUJAWSKO-POMORSKIE"),
    ("lubelskie", "LUBELSKIE"),
    ("bialskopodlaskie", "LUBELSKIE"),
    ("chelmskie", "LUBELSKIE"),
    ("zamojskie", "LUBELSKIE"),
    ("zielonogorskie", "LUBUSKIE"),
    ("gorzowskie", "LUBUSKIE"),
    ("lodzkie", "ŁÓDZKIE"),
    ("piotrkowskie", "ŁÓDZKIE"),
    ("sieradzkie", "ŁÓDZKIE"),
    ("skierniewickie", "ŁÓDZKIE"),
    ("krakowskie", "MAŁOPOLSKIE"),
    ("tarnowskie", "MAŁOPOLSKIE"),
    ("nowosadeckie", "MAŁOPOLSKIE"),
    ("warszawskie", "MAZOWIECKIE"),
    ("plockie", "MAZOWIECKIE"),
    ("ciechanowskie", "MAZOWIECKIE"),
    ("ostroleckie", "MAZOWIECKIE"),
    ("siedleckie", "MAZOWIECKIE"),
    ("radomskie", "MAZOWIECKIE"),
    ("opolskie", "OPOLSKIE"),
    ("rzeszowskie", "PODKARPACKIE"),
    ("przemyskie", "PODKARPACKIE"),
    ("krosnienskie", "PODKARPACKIE"),
    ("tarnobrzeskie", "PODKARPACKIE"),
    ("bialostockie", "PODLASKIE"),
    ("lomzynskie", "PODLASKIE"),
    ("suwalskie", "PODLASKIE"),
    ("gdanskie", "POMORSKIE"),
    ("slupskie", "POMORSKIE"),
    ("katowickie", "ŚLĄSKIE"),
    ("bielskie", "ŚLĄSKIE"),
    ("czestochowskie", "ŚLĄSKIE"),
    ("kieleckie", "ŚWIĘTOKRZYSKIE"),
    ("olsztynskie", "WARMIŃSKO-MAZURSKIE"),
    ("elblaskie", "WARMIŃSKO-MAZURSKIE"),
    ("poznanskie", "WIELKOPOLSKIE"),
    ("kaliskie", "WIELKOPOLSKIE"),
    ("koninskie", "WIELKOPOLSKIE"),
    ("leszczynskie", "WIELKOPOLSKIE"),
    ("pilskie", "WIELKOPOLSKIE"),
    ("szczecinskie", "ZACHODNIOPOMORSKIE"),
    ("koszalinskie", "ZACHODNIOPOMORSKIE"),
];

const REGION_WORD: &str = "wojewodztwo";

static HISTORICAL_MAP: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(HISTORICAL_REGIONS.len() * 3);
    for (key, modern) in HISTORICAL_REGIONS {
        map.insert(key.to_string(), modern);
        map.insert(format!("{REGION_WORD} {key}"), modern);
        map.insert(format!("{key} {REGION_WORD}"), modern);
    }
    map
});

/// Modern, upper-case region for a report value.
///
/// Historical names win over the literal fallback: a value is upper-cased
/// as-is only when neither its key nor its key without the word
/// "województwo" names a historical region.
pub fn resolve_region(raw: &str) -> Option<String> {
    let value = normalize_missing(raw)?;
    let key = normalize_region_key(value)?;

    if let Some(modern) = HISTORICAL_MAP.get(&key) {
        return Some((*modern).to_string());
    }

    let without_word = key
        .split(' ')
        .filter(|word| *word != REGION_WORD)
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(modern) = HISTORICAL_MAP.get(&without_word) {
        return Some((*modern).to_string());
    }

    Some(value.to_uppercase())
}
