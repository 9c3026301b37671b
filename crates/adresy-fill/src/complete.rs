//! Record Completion Engine: decides which missing administrative fields of
//! a record to fill, from which source and in what order.

use adresy_infer::{MatchSource, display_case, infer_locality, normalize_key};
use adresy_reference::{CourtEntry, CourtIndex, LocalityIndex};
use adresy_types::{AdminField, AdminTriple, AdminUnits};

const TRIPLE_FIELDS: [AdminField; 3] = [
    AdminField::Region,
    AdminField::County,
    AdminField::Municipality,
];

/// Where a filled value came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FillSource {
    /// The court's unique region.
    CourtRegion,
    /// Locality recognised in the hint against the nationwide index.
    Hint(MatchSource),
    /// Locality recognised in the hint against the court's own localities.
    CourtHint(MatchSource),
    /// Court row of the recognised locality.
    CourtLocality,
    /// Nationwide row of the known locality.
    Teryt,
}

/// A single value written into a record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fill {
    pub field: AdminField,
    pub value: String,
    pub source: FillSource,
}

/// Fills missing fields of a record from read-only reference indexes.
#[derive(Clone, Copy, Debug)]
pub struct CompletionEngine<'a> {
    localities: &'a LocalityIndex,
    courts: &'a CourtIndex,
}

impl<'a> CompletionEngine<'a> {
    pub fn new(localities: &'a LocalityIndex, courts: &'a CourtIndex) -> Self {
        Self { localities, courts }
    }

    /// Complete `units` in place and return what was written, in order.
    ///
    /// Steps:
    /// 1. region from the court's unique region;
    /// 2. locality from the hint, nationwide;
    /// 3. locality from the hint within the court's area, with the court's
    ///    region, county and municipality for it;
    /// 4. region, county and municipality from the nationwide row of the
    ///    locality, preferring rows in the region already known.
    ///
    /// A field that already holds a value is never overwritten.
    pub fn complete(
        &self,
        units: &mut AdminUnits,
        hint: Option<&str>,
        court_code: Option<&str>,
    ) -> Vec<Fill> {
        let mut fills = Vec::new();
        let court = court_code.and_then(|code| self.courts.court(code));

        if let Some(region) = court.and_then(CourtEntry::region) {
            fill(units, AdminField::Region, region, FillSource::CourtRegion, &mut fills);
        }

        if units.locality.is_none()
            && let Some(hint) = hint
            && let Some(found) = infer_locality(hint, |key| self.localities.canonical(key))
        {
            fill(
                units,
                AdminField::Locality,
                found.canonical,
                FillSource::Hint(found.source),
                &mut fills,
            );
        }

        if units.locality.is_none()
            && let Some(court) = court
            && let Some(hint) = hint
            && let Some(found) = infer_locality(hint, |key| court.canonical(key))
        {
            fill(
                units,
                AdminField::Locality,
                found.canonical,
                FillSource::CourtHint(found.source),
                &mut fills,
            );
            if let Some(entry) = court.locality(&found.key) {
                fill_triple(units, &entry.units, FillSource::CourtLocality, &mut fills);
            }
        }

        if let Some(key) = units.locality.as_deref().and_then(normalize_key)
            && let Some(triple) = self.localities.resolve(&key, units.region.as_deref())
        {
            fill_triple(units, triple, FillSource::Teryt, &mut fills);
        }

        fills
    }
}

fn fill_triple(
    units: &mut AdminUnits,
    triple: &AdminTriple,
    source: FillSource,
    fills: &mut Vec<Fill>,
) {
    for field in TRIPLE_FIELDS {
        if let Some(value) = triple.get(field) {
            fill(units, field, value, source, fills);
        }
    }
}

fn fill(
    units: &mut AdminUnits,
    field: AdminField,
    value: &str,
    source: FillSource,
    fills: &mut Vec<Fill>,
) {
    let slot = units.slot_mut(field);
    if slot.is_some() || value.trim().is_empty() {
        return;
    }
    let shown = display_case(value);
    *slot = Some(shown.clone());
    fills.push(Fill {
        field,
        value: shown,
        source,
    });
}

#[cfg(test)]
mod tests {
    use adresy_reference::CourtRow;
    use adresy_types::ReferenceRow;

    use super::*;

    fn row(region: &str, county: &str, municipality: &str, locality: &str) -> ReferenceRow {
        ReferenceRow {
            region: region.into(),
            county: county.into(),
            municipality: municipality.into(),
            locality: locality.into(),
            district: String::new(),
        }
    }

    fn localities() -> LocalityIndex {
        LocalityIndex::build([
            row("mazowieckie", "Warszawa", "Warszawa", "Warszawa"),
            row("małopolskie", "Nowy Sącz", "Nowy Sącz", "Nowy Sącz"),
            row("małopolskie", "nowosądecki", "Podegrodzie", "Sącz"),
            row("mazowieckie", "radomski", "Jedlińsk", "Nowa Wieś"),
            row("podlaskie", "suwalski", "Suwałki", "Nowa Wieś"),
        ])
    }

    fn courts() -> CourtIndex {
        CourtIndex::build([
            CourtRow {
                code: "WR1K".into(),
                row: row("dolnośląskie", "wrocławski", "Siechnice", "Radwanice"),
            },
            CourtRow {
                code: "WR1K".into(),
                row: row("dolnośląskie", "Wrocław", "Wrocław", "Wrocław"),
            },
        ])
    }

    fn units(region: Option<&str>, locality: Option<&str>) -> AdminUnits {
        AdminUnits {
            region: region.map(Into::into),
            county: None,
            municipality: None,
            locality: locality.map(Into::into),
        }
    }

    #[test]
    fn region_comes_from_court_without_hint() {
        let (teryt, courts) = (localities(), courts());
        let engine = CompletionEngine::new(&teryt, &courts);
        let mut record = units(None, None);
        let fills = engine.complete(&mut record, None, Some("WR1K"));
        assert_eq!(record.region.as_deref(), Some("Dolnośląskie"));
        assert_eq!(fills.len(), 1);
        assert_eq!(fills[0].source, FillSource::CourtRegion);
    }

    #[test]
    fn locality_from_hint_then_triple_from_teryt() {
        let (teryt, courts) = (localities(), courts());
        let engine = CompletionEngine::new(&teryt, &courts);
        let mut record = units(None, None);
        let fills = engine.complete(&mut record, Some("ul. Długa, Nowy Sącz"), None);
        assert_eq!(record.locality.as_deref(), Some("Nowy Sącz"));
        assert_eq!(record.region.as_deref(), Some("Małopolskie"));
        assert_eq!(record.county.as_deref(), Some("Nowy Sącz"));
        assert_eq!(record.municipality.as_deref(), Some("Nowy Sącz"));
        assert_eq!(fills[0].source, FillSource::Hint(MatchSource::Segment));
        assert!(fills[1..].iter().all(|f| f.source == FillSource::Teryt));
    }

    #[test]
    fn court_localities_fill_what_teryt_lacks() {
        let (teryt, courts) = (localities(), courts());
        let engine = CompletionEngine::new(&teryt, &courts);
        let mut record = units(None, None);
        let fills = engine.complete(&mut record, Some("Radwanice, ul. Lipowa 3"), Some("WR1K"));
        assert_eq!(record.locality.as_deref(), Some("Radwanice"));
        assert_eq!(record.region.as_deref(), Some("Dolnośląskie"));
        assert_eq!(record.county.as_deref(), Some("Wrocławski"));
        assert_eq!(record.municipality.as_deref(), Some("Siechnice"));
        assert!(fills.iter().any(|f| f.source == FillSource::CourtHint(MatchSource::Segment)));
    }

    #[test]
    fn known_region_picks_homonym_row() {
        let (teryt, courts) = (localities(), courts());
        let engine = CompletionEngine::new(&teryt, &courts);
        let mut record = units(Some("PODLASKIE"), Some("NOWA WIEŚ"));
        engine.complete(&mut record, None, None);
        assert_eq!(record.region.as_deref(), Some("PODLASKIE"));
        assert_eq!(record.county.as_deref(), Some("Suwalski"));
        assert_eq!(record.locality.as_deref(), Some("NOWA WIEŚ"));
    }

    #[test]
    fn present_values_are_never_overwritten() {
        let (teryt, courts) = (localities(), courts());
        let engine = CompletionEngine::new(&teryt, &courts);
        let mut record = AdminUnits {
            region: Some("MAZOWIECKIE".into()),
            county: Some("x".into()),
            municipality: None,
            locality: Some("Warszawa".into()),
        };
        let fills = engine.complete(&mut record, Some("Nowy Sącz"), Some("WR1K"));
        assert_eq!(record.region.as_deref(), Some("MAZOWIECKIE"));
        assert_eq!(record.county.as_deref(), Some("x"));
        assert_eq!(record.municipality.as_deref(), Some("Warszawa"));
        assert_eq!(fills.len(), 1);
    }

    #[test]
    fn completing_twice_changes_nothing() {
        let (teryt, courts) = (localities(), courts());
        let engine = CompletionEngine::new(&teryt, &courts);
        let mut record = units(None, None);
        engine.complete(&mut record, Some("Nowy Sącz"), Some("WR1K"));
        let snapshot = record.clone();
        let fills = engine.complete(&mut record, Some("Nowy Sącz"), Some("WR1K"));
        assert!(fills.is_empty());
        assert_eq!(record, snapshot);
    }

    #[test]
    fn unmatched_hint_leaves_record_untouched() {
        let (teryt, courts) = (localities(), courts());
        let engine = CompletionEngine::new(&teryt, &courts);
        let mut record = units(None, None);
        let fills = engine.complete(&mut record, Some("ul. Polna 1, Zakopane"), Some("XX9X"));
        assert!(fills.is_empty());
        assert_eq!(record, AdminUnits::default());
    }
}
