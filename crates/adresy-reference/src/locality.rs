use std::path::Path;

use adresy_infer::normalize_key;
use adresy_types::columns::teryt;
use adresy_types::{AdminTriple, ReferenceRow};
use anyhow::Result;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{DEFAULT_DELIMITER, clean_cell, open_table, read_rows, warn_missing_columns};

#[derive(Debug, Deserialize)]
struct TerytRecord {
    #[serde(rename = "Wojewodztwo", default)]
    region: String,
    #[serde(rename = "Powiat", default)]
    county: String,
    #[serde(rename = "Gmina", default)]
    municipality: String,
    #[serde(rename = "Miejscowosc", default)]
    locality: String,
    #[serde(rename = "Dzielnica", default)]
    district: String,
}

impl From<TerytRecord> for ReferenceRow {
    fn from(record: TerytRecord) -> Self {
        ReferenceRow {
            region: clean_cell(record.region),
            county: clean_cell(record.county),
            municipality: clean_cell(record.municipality),
            locality: clean_cell(record.locality),
            district: clean_cell(record.district),
        }
    }
}

/// Nationwide locality lookup built from the base geography table.
///
/// Conceptually a multi-map from locality key to every `(region, county,
/// municipality)` carrying that name, plus the first spelling seen per key.
#[derive(Debug, Clone, Default)]
pub struct LocalityIndex {
    canonical: IndexMap<String, String>,
    rows: IndexMap<String, Vec<AdminTriple>>,
    row_count: usize,
}

impl LocalityIndex {
    /// Load the semicolon-delimited TERYT table at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_delimiter(path, DEFAULT_DELIMITER)
    }

    pub fn load_with_delimiter(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = open_table(path, delimiter)?;
        warn_missing_columns(
            &mut reader,
            path,
            &[
                teryt::REGION,
                teryt::COUNTY,
                teryt::MUNICIPALITY,
                teryt::LOCALITY,
                teryt::DISTRICT,
            ],
        )?;

        let records: Vec<TerytRecord> = read_rows(&mut reader, path)?;
        Ok(Self::build(records.into_iter().map(ReferenceRow::from)))
    }

    /// Index `rows` in order. Rows without a locality are skipped; the first
    /// spelling of each key is kept as canonical.
    pub fn build(rows: impl IntoIterator<Item = ReferenceRow>) -> Self {
        let mut index = Self::default();
        for row in rows {
            let Some(key) = normalize_key(&row.locality) else {
                continue;
            };
            let triple = row.triple();
            index
                .canonical
                .entry(key.clone())
                .or_insert(row.locality);
            index.rows.entry(key).or_default().push(triple);
            index.row_count += 1;
        }
        index
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.canonical.contains_key(key)
    }

    /// Canonical spelling for a normalised locality key.
    pub fn canonical(&self, key: &str) -> Option<&str> {
        self.canonical.get(key).map(String::as_str)
    }

    /// All rows sharing the key, in file order, or an empty slice.
    pub fn rows(&self, key: &str) -> &[AdminTriple] {
        self.rows.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Pick the row for a locality key.
    ///
    /// With a preferred region, the first row whose region has the same key
    /// wins; otherwise, or when no row matches it, the first row seen.
    pub fn resolve(&self, key: &str, preferred_region: Option<&str>) -> Option<&AdminTriple> {
        let rows = self.rows(key);
        let wanted = preferred_region.and_then(normalize_key);
        if let Some(wanted) = wanted
            && let Some(row) = rows
                .iter()
                .find(|row| normalize_key(&row.region).as_deref() == Some(wanted.as_str()))
        {
            return Some(row);
        }
        rows.first()
    }

    /// Normalised keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.canonical.keys().map(String::as_str)
    }

    /// Number of distinct locality keys.
    pub fn key_count(&self) -> usize {
        self.canonical.len()
    }

    /// Number of indexed rows, homonyms included.
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}
