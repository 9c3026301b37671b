//! Locality inference for Polish administrative addresses.
//!
//! The crate turns noisy report text into comparison keys, maps pre-1999
//! regions onto their modern successors, and guesses a canonical locality
//! name from a free-text address hint. It never owns a reference index:
//! callers pass a lookup closure that answers "which canonical locality does
//! this key name?", so the same engine runs against the nationwide table or
//! against the localities of a single registry court.
//!
//! # How locality inference works
//! 1. Split the hint on `|`, `,` and `;`, drop street/estate/square prefixes
//!    and try each segment as a whole, last segment first.
//! 2. Failing that, slide word n-grams of length 4, 3, 2 and 1 over the whole
//!    hint, longest first, left to right.
//! 3. Report the first hit together with how it was found.
//!
//! # Example
//! ```rust
//! use std::collections::HashMap;
//! use adresy_infer::{infer_locality, normalize_key};
//!
//! let canon: HashMap<String, &str> = ["Nowy Sącz", "Sącz"]
//!     .into_iter()
//!     .map(|name| (normalize_key(name).unwrap(), name))
//!     .collect();
//! let found = infer_locality("ul. Długa, Nowy Sącz", |key| canon.get(key).copied());
//! assert_eq!(found.map(|m| m.canonical), Some("Nowy Sącz"));
//! ```

pub mod hint;
pub mod locality;
pub mod normalize;
pub mod region;

pub use hint::{build_hint, extract_court_code};
pub use locality::{LocalityMatch, MAX_NGRAM, MatchSource, infer_locality};
pub use normalize::{
    display_case, is_missing, normalize_key, normalize_missing, normalize_region_key,
};
pub use region::{MODERN_REGIONS, resolve_region};
