use std::path::Path;

use adresy_infer::normalize_key;
use adresy_types::columns::courts;
use adresy_types::{AdminTriple, CourtLocality, ReferenceRow};
use anyhow::Result;
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use tracing::warn;

use crate::{DEFAULT_DELIMITER, clean_cell, open_table, read_rows, warn_missing_columns};

#[derive(Debug, Deserialize)]
struct CourtRecord {
    #[serde(rename = "Oznaczenie sądu", default)]
    code: String,
    #[serde(rename = "Województwo", default)]
    region: String,
    #[serde(rename = "Powiat", default)]
    county: String,
    #[serde(rename = "Gmina", default)]
    municipality: String,
    #[serde(rename = "Miejscowość", default)]
    locality: String,
    #[serde(rename = "Dzielnica", default)]
    district: String,
}

/// Row of the jurisdiction table: a geography row tagged with a court code.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CourtRow {
    pub code: String,
    pub row: ReferenceRow,
}

impl From<CourtRecord> for CourtRow {
    fn from(record: CourtRecord) -> Self {
        CourtRow {
            code: clean_cell(record.code),
            row: ReferenceRow {
                region: clean_cell(record.region),
                county: clean_cell(record.county),
                municipality: clean_cell(record.municipality),
                locality: clean_cell(record.locality),
                district: clean_cell(record.district),
            },
        }
    }
}

/// Everything known about one registry court.
#[derive(Debug, Clone, Default)]
pub struct CourtEntry {
    region: Option<String>,
    localities: IndexMap<String, CourtLocality>,
}

impl CourtEntry {
    /// The court's region, if all of its rows agree on exactly one.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Canonical spelling of a locality within this court's area.
    pub fn canonical(&self, key: &str) -> Option<&str> {
        self.localities.get(key).map(|entry| entry.locality.as_str())
    }

    /// First row seen for a locality key within this court's area.
    pub fn locality(&self, key: &str) -> Option<&CourtLocality> {
        self.localities.get(key)
    }

    pub fn locality_count(&self) -> usize {
        self.localities.len()
    }
}

#[derive(Default)]
struct CourtAccumulator {
    regions: IndexSet<String>,
    localities: IndexMap<String, CourtLocality>,
}

/// Court code to jurisdiction lookup built from the jurisdiction table.
#[derive(Debug, Clone, Default)]
pub struct CourtIndex {
    courts: IndexMap<String, CourtEntry>,
}

impl CourtIndex {
    /// Load the semicolon-delimited jurisdiction table at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_delimiter(path, DEFAULT_DELIMITER)
    }

    pub fn load_with_delimiter(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = open_table(path, delimiter)?;
        let missing = warn_missing_columns(
            &mut reader,
            path,
            &[
                courts::CODE,
                courts::REGION,
                courts::COUNTY,
                courts::MUNICIPALITY,
                courts::LOCALITY,
                courts::DISTRICT,
            ],
        )?;
        if missing.iter().any(|name| name == courts::CODE) {
            warn!("{}: no court codes, jurisdiction lookups disabled", path.display());
            return Ok(Self::default());
        }

        let records: Vec<CourtRecord> = read_rows(&mut reader, path)?;
        Ok(Self::build(records.into_iter().map(CourtRow::from)))
    }

    /// Group `rows` by upper-cased court code. A court gets a region only when
    /// its non-blank regions are all the same; its localities keep the first
    /// row seen per key.
    pub fn build(rows: impl IntoIterator<Item = CourtRow>) -> Self {
        let mut groups: IndexMap<String, CourtAccumulator> = IndexMap::new();
        for CourtRow { code, row } in rows {
            let code = code.trim().to_uppercase();
            if code.is_empty() {
                continue;
            }
            let group = groups.entry(code).or_default();
            if !row.region.is_empty() {
                group.regions.insert(row.region.clone());
            }
            if let Some(key) = normalize_key(&row.locality) {
                group.localities.entry(key).or_insert_with(|| CourtLocality {
                    units: AdminTriple {
                        region: row.region,
                        county: row.county,
                        municipality: row.municipality,
                    },
                    locality: row.locality,
                });
            }
        }

        let courts = groups
            .into_iter()
            .map(|(code, group)| {
                let region = if group.regions.len() == 1 {
                    group.regions.into_iter().next()
                } else {
                    None
                };
                (
                    code,
                    CourtEntry {
                        region,
                        localities: group.localities,
                    },
                )
            })
            .collect();
        Self { courts }
    }

    pub fn court(&self, code: &str) -> Option<&CourtEntry> {
        self.courts.get(code)
    }

    /// Region shared by every row of the court, if there is exactly one.
    pub fn unique_region(&self, code: &str) -> Option<&str> {
        self.court(code).and_then(CourtEntry::region)
    }

    pub fn court_count(&self) -> usize {
        self.courts.len()
    }
}
