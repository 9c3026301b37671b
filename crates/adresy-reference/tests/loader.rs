use std::path::PathBuf;

use adresy_reference::{CourtIndex, LocalityIndex};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn loads_teryt_table() {
    let index = LocalityIndex::load(fixture("teryt.csv")).expect("load teryt");
    assert_eq!(index.row_count(), 8);
    assert_eq!(index.key_count(), 7);
    assert_eq!(index.canonical("nowy sacz"), Some("Nowy Sącz"));
    assert_eq!(index.canonical("wrocław"), Some("Wrocław"));

    let plock = index.resolve("płock", None).expect("płock row");
    assert_eq!(plock.region, "mazowieckie");
    assert_eq!(plock.municipality, "Płock");

    let wies = index
        .resolve("nowa wies", Some("Podlaskie"))
        .expect("nowa wieś row");
    assert_eq!(wies.county, "suwalski");
}

#[test]
fn missing_columns_read_as_blank() {
    let index = LocalityIndex::load(fixture("teryt_no_region.csv")).expect("load teryt");
    let row = index.resolve("kobierzyce", None).expect("row");
    assert_eq!(row.region, "");
    assert_eq!(row.county, "wrocławski");
}

#[test]
fn short_rows_are_padded_with_blanks() {
    let index = LocalityIndex::load(fixture("teryt_short_rows.csv")).expect("load teryt");
    assert_eq!(index.row_count(), 2);
    let gostynin = index.resolve("gostynin", None).expect("gostynin row");
    assert_eq!(gostynin.county, "gostyniński");
    assert_eq!(gostynin.municipality, "Gostynin");
    assert!(!index.contains_key("kobierzyce"));
    assert_eq!(index.canonical("łazy"), Some("Łazy"));
}

#[test]
fn court_table_short_rows_are_padded_with_blanks() {
    let index = CourtIndex::load(fixture("obszar_sadow_short_rows.csv")).expect("load courts");
    assert_eq!(index.unique_region("WR1K"), Some("dolnośląskie"));
    let court = index.court("WR1K").expect("WR1K present");
    assert_eq!(court.locality_count(), 1);
    assert_eq!(court.canonical("radwanice"), Some("Radwanice"));
}

#[test]
fn loads_court_table() {
    let index = CourtIndex::load(fixture("obszar_sadow.csv")).expect("load courts");
    assert_eq!(index.court_count(), 2);
    assert_eq!(index.unique_region("WR1K"), Some("dolnośląskie"));
    assert_eq!(index.unique_region("KR1P"), None);

    let court = index.court("WR1K").expect("WR1K present");
    let radwanice = court.locality("radwanice").expect("radwanice");
    assert_eq!(radwanice.locality, "Radwanice");
    assert_eq!(radwanice.units.municipality, "Siechnice");
}

#[test]
fn court_table_without_codes_is_empty() {
    let index = CourtIndex::load(fixture("teryt.csv")).expect("load table");
    assert_eq!(index.court_count(), 0);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = LocalityIndex::load(dir.path().join("teryt.csv")).unwrap_err();
    assert!(err.to_string().contains("missing reference table"));
}
