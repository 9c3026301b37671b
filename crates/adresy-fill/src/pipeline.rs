//! The two passes over a report: preparation and completion.

use adresy_infer::{build_hint, extract_court_code, normalize_missing, resolve_region};
use adresy_types::columns::{self, ADDR_HINT, COMPLETION_HINT_SOURCES, HINT_SOURCES};
use adresy_types::{AdminField, AdminUnits};
use tracing::{debug, warn};

use crate::complete::CompletionEngine;
use crate::dataset::Dataset;
use crate::report::{FillReport, PrepareReport};

/// Preparation pass: blank out missing-value tokens in the administrative
/// columns, upper-case them, modernise regions and append the address hint
/// column.
pub fn prepare(dataset: &mut Dataset) -> PrepareReport {
    let mut report = PrepareReport {
        rows: dataset.len(),
        ..PrepareReport::default()
    };

    for field in AdminField::ALL {
        let Some(column) = dataset.column(field.column()) else {
            warn!("report has no {:?} column, skipping it", field.column());
            continue;
        };
        for row in 0..dataset.len() {
            let upper = normalize_missing(dataset.cell(row, column)).map(str::to_uppercase);
            let value = match (field, upper) {
                (AdminField::Region, Some(upper)) => {
                    let modern = resolve_region(&upper);
                    if let Some(modern) = modern.as_deref()
                        && modern != upper
                    {
                        debug!(row, from = %upper, to = %modern, "region modernised");
                        report.regions_modernised += 1;
                    }
                    modern
                }
                (_, upper) => upper,
            };
            dataset.set(row, column, value.unwrap_or_default());
        }
    }

    let hints: Vec<Option<String>> = (0..dataset.len())
        .map(|row| {
            let record = dataset.row(row);
            build_hint(&HINT_SOURCES, |name| record.field(name)).map(|hint| hint.to_uppercase())
        })
        .collect();
    let column = dataset.ensure_column(ADDR_HINT);
    for (row, hint) in hints.into_iter().enumerate() {
        if hint.is_some() {
            report.hints += 1;
        }
        dataset.set(row, column, hint.unwrap_or_default());
    }

    report
}

/// Completion pass: fill missing administrative fields of every row, in
/// input order, and count what changed.
pub fn complete(dataset: &mut Dataset, engine: &CompletionEngine<'_>) -> FillReport {
    let admin_columns =
        AdminField::ALL.map(|field| (field, dataset.ensure_column(field.column())));
    let registry_column = dataset.column(columns::REGISTRY_NUMBER);
    if registry_column.is_none() {
        warn!(
            "report has no {:?} column, court lookups disabled",
            columns::REGISTRY_NUMBER
        );
    }

    let mut report = FillReport::default();
    for row in 0..dataset.len() {
        let mut units = AdminUnits::default();
        for (field, column) in admin_columns {
            *units.slot_mut(field) =
                normalize_missing(dataset.cell(row, column)).map(String::from);
        }
        let court_code =
            registry_column.and_then(|column| extract_court_code(dataset.cell(row, column)));
        let record = dataset.row(row);
        let hint = build_hint(&COMPLETION_HINT_SOURCES, |name| record.field(name));

        let before = units.clone();
        let fills = engine.complete(&mut units, hint.as_deref(), court_code.as_deref());
        for fill in &fills {
            debug!(row, field = %fill.field, value = %fill.value, source = ?fill.source, "filled");
        }
        report.record(&before, &units);

        for (field, column) in admin_columns {
            dataset.set(row, column, units.get(field).unwrap_or_default().to_string());
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use adresy_reference::{CourtIndex, CourtRow, LocalityIndex};
    use adresy_types::ReferenceRow;

    use super::*;

    fn report(csv: &str) -> Dataset {
        Dataset::from_reader(csv.as_bytes(), b';').expect("parse report")
    }

    #[test]
    fn prepare_modernises_and_builds_hints() {
        let mut data = report(
            "Województwo;Powiat;Miejscowość;Ulica;Położenie\n\
             płockie;---;Gostynin;ul. Polna 2;brak\n\
             mazowieckie;brak danych;;;\n",
        );
        let summary = prepare(&mut data);
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.regions_modernised, 1);
        assert_eq!(summary.hints, 1);

        assert_eq!(data.row(0).field("Województwo"), Some("MAZOWIECKIE"));
        assert_eq!(data.row(0).field("Powiat"), Some(""));
        assert_eq!(data.row(0).field("Miejscowość"), Some("GOSTYNIN"));
        assert_eq!(data.row(0).field(ADDR_HINT), Some("UL. POLNA 2 | GOSTYNIN"));
        assert_eq!(data.row(1).field("Województwo"), Some("MAZOWIECKIE"));
        assert_eq!(data.row(1).field(ADDR_HINT), Some(""));
        assert_eq!(data.headers().last().map(String::as_str), Some(ADDR_HINT));
    }

    #[test]
    fn complete_fills_rows_and_counts() {
        let teryt = LocalityIndex::build([ReferenceRow {
            region: "mazowieckie".into(),
            county: "gostyniński".into(),
            municipality: "Gostynin".into(),
            locality: "Gostynin".into(),
            district: String::new(),
        }]);
        let courts = CourtIndex::build([CourtRow {
            code: "PL1G".into(),
            row: ReferenceRow {
                region: "mazowieckie".into(),
                ..ReferenceRow::default()
            },
        }]);
        let engine = CompletionEngine::new(&teryt, &courts);

        let mut data = report(
            "Nr KW;Województwo;Ulica\n\
             PL1G/00001234/5;---;ul. Polna 2, Gostynin\n\
             XX;MAZOWIECKIE;nic\n",
        );
        let summary = complete(&mut data, &engine);

        assert_eq!(summary.rows, 2);
        assert_eq!(summary.rows_improved, 1);
        assert_eq!(summary.region, 1);
        assert_eq!(summary.locality, 1);
        assert_eq!(summary.county, 1);
        assert_eq!(summary.municipality, 1);

        let row = data.row(0);
        assert_eq!(row.field("Województwo"), Some("Mazowieckie"));
        assert_eq!(row.field("Powiat"), Some("Gostyniński"));
        assert_eq!(row.field("Gmina"), Some("Gostynin"));
        assert_eq!(row.field("Miejscowość"), Some("Gostynin"));
        assert_eq!(data.row(1).field("Powiat"), Some(""));
        assert_eq!(data.headers().len(), 6);
    }
}
