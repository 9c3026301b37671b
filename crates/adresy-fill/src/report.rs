//! Run counters, derived from before/after snapshots of each record.

use adresy_types::{AdminField, AdminUnits};
use serde::Serialize;

/// Fields that were absent in `before` and hold a value in `after`.
pub fn filled_fields(before: &AdminUnits, after: &AdminUnits) -> Vec<AdminField> {
    AdminField::ALL
        .into_iter()
        .filter(|field| before.get(*field).is_none() && after.get(*field).is_some())
        .collect()
}

/// Outcome of the completion pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FillReport {
    pub rows: usize,
    pub rows_improved: usize,
    pub region: usize,
    pub county: usize,
    pub municipality: usize,
    pub locality: usize,
}

impl FillReport {
    /// Account for one record.
    pub fn record(&mut self, before: &AdminUnits, after: &AdminUnits) {
        self.rows += 1;
        if after.known_count() > before.known_count() {
            self.rows_improved += 1;
        }
        for field in filled_fields(before, after) {
            *self.counter_mut(field) += 1;
        }
    }

    pub fn filled(&self, field: AdminField) -> usize {
        match field {
            AdminField::Region => self.region,
            AdminField::County => self.county,
            AdminField::Municipality => self.municipality,
            AdminField::Locality => self.locality,
        }
    }

    fn counter_mut(&mut self, field: AdminField) -> &mut usize {
        match field {
            AdminField::Region => &mut self.region,
            AdminField::County => &mut self.county,
            AdminField::Municipality => &mut self.municipality,
            AdminField::Locality => &mut self.locality,
        }
    }
}

/// Outcome of the preparation pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PrepareReport {
    pub rows: usize,
    /// Regions replaced by their modern successor.
    pub regions_modernised: usize,
    /// Rows that received a non-empty address hint.
    pub hints: usize,
}

/// Everything a run reports, as written by `--report-json`.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct RunSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepare: Option<PrepareReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<FillReport>,
}
