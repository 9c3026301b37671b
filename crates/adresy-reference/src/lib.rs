//! Reference tables for address completion, loaded once and queried
//! read-only.
//!
//! Two tables feed the engine:
//! - the base geography (TERYT) table, one row per locality with its region,
//!   county and municipality, indexed by [`LocalityIndex`];
//! - the registry-court jurisdiction table, the same columns tagged with a
//!   court code such as `WR1K`, indexed by [`CourtIndex`].
//!
//! Both are semicolon-delimited text with a header row. A missing column is
//! not an error: it is logged and read as blank cells, so lookups along that
//! dimension never succeed. A missing file is an error.
//!
//! Every index keeps rows in file order. When one locality name exists in
//! several regions, the first row seen wins unless the caller names a
//! preferred region.
//!
//! # Example
//! ```no_run
//! use adresy_reference::{CourtIndex, LocalityIndex};
//!
//! # fn main() -> anyhow::Result<()> {
//! let teryt = LocalityIndex::load("teryt.csv")?;
//! let courts = CourtIndex::load("obszar_sadow.csv")?;
//! if let Some(units) = teryt.resolve("nowy sacz", Some("małopolskie")) {
//!     println!("{} / {} / {}", units.region, units.county, units.municipality);
//! }
//! println!("WR1K region: {:?}", courts.unique_region("WR1K"));
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see
//! `cargo run -p adresy-reference --example stats -- <teryt.csv> [courts.csv] [hint]`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::warn;

mod courts;
mod locality;

pub use courts::{CourtEntry, CourtIndex, CourtRow};
pub use locality::LocalityIndex;

/// Field delimiter of the reference tables.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Open a reference table, failing if the file does not exist.
fn open_table(path: &Path, delimiter: u8) -> Result<csv::Reader<File>> {
    if !path.exists() {
        anyhow::bail!("missing reference table: {}", path.display());
    }
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    Ok(table_reader(file, delimiter))
}

fn table_reader<R: Read>(input: R, delimiter: u8) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Log every expected header the table lacks.
fn warn_missing_columns<R: Read>(
    reader: &mut csv::Reader<R>,
    path: &Path,
    expected: &[&str],
) -> Result<Vec<String>> {
    let headers = reader
        .headers()
        .with_context(|| format!("read header of {}", path.display()))?;
    let missing: Vec<String> = expected
        .iter()
        .filter(|name| !headers.iter().any(|h| h == **name))
        .map(|name| name.to_string())
        .collect();
    for name in &missing {
        warn!("{}: column {:?} not found, treating it as empty", path.display(), name);
    }
    Ok(missing)
}

/// Deserialize every row of `reader` by header name. Rows shorter than the
/// header are padded with blank cells.
fn read_rows<R: Read, T: DeserializeOwned>(
    reader: &mut csv::Reader<R>,
    path: &Path,
) -> Result<Vec<T>> {
    let headers = reader
        .headers()
        .with_context(|| format!("read header of {}", path.display()))?
        .clone();
    let mut rows = Vec::new();
    for (lineno, record) in reader.records().enumerate() {
        let line = lineno + 2;
        let mut record =
            record.with_context(|| format!("{}:{} unreadable row", path.display(), line))?;
        while record.len() < headers.len() {
            record.push_field("");
        }
        let row = record
            .deserialize(Some(&headers))
            .with_context(|| format!("{}:{} malformed row", path.display(), line))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Cell cleanup shared by both tables: trimmed, with a literal `nan` blanked.
fn clean_cell(raw: String) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        String::new()
    } else if trimmed.len() == raw.len() {
        raw
    } else {
        trimmed.to_string()
    }
}
