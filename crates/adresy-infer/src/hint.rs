//! Raw material for inference: the address hint and the registry court code.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::normalize_missing;

/// Separator placed between hint fragments.
pub const HINT_SEPARATOR: &str = " | ";

static COURT_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([A-Z]{2}[0-9][A-Z])\s*/").expect("valid court code regex"));

/// Join the present, non-missing `sources` of a record into one hint.
///
/// `field` resolves a column name to the record's raw value; absent columns
/// are skipped. Returns `None` when nothing usable is left.
pub fn build_hint<'a, F>(sources: &[&str], field: F) -> Option<String>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let parts: Vec<&str> = sources
        .iter()
        .filter_map(|&column| field(column))
        .filter_map(normalize_missing)
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(HINT_SEPARATOR))
    }
}

/// Court code from a land-and-mortgage registry number, e.g. `WR1K` from
/// `WR1K/00012345/6`. Case-insensitive; the code is returned upper case.
pub fn extract_court_code(registry_number: &str) -> Option<String> {
    let upper = registry_number.trim().to_uppercase();
    COURT_CODE
        .captures(&upper)
        .and_then(|caps| caps.get(1))
        .map(|code| code.as_str().to_string())
}
