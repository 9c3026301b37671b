use std::env;
use std::path::PathBuf;

use adresy_infer::infer_locality;
use adresy_reference::{CourtIndex, LocalityIndex};
use anyhow::{Context, Result};

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let teryt_path = args.next().map(PathBuf::from).context(
        "usage: cargo run -p adresy-reference --example stats -- <teryt.csv> [courts.csv] [hint]",
    )?;
    let courts_path = args.next().map(PathBuf::from);
    let hint = args.next();

    let teryt = LocalityIndex::load(&teryt_path)
        .with_context(|| format!("loading {}", teryt_path.display()))?;
    println!("TERYT table : {}", teryt_path.display());
    println!("Rows        : {}", teryt.row_count());
    println!("Localities  : {}", teryt.key_count());
    let homonyms = teryt.keys().filter(|key| teryt.rows(key).len() > 1).count();
    println!("Homonyms    : {}", homonyms);

    if let Some(path) = &courts_path {
        let courts =
            CourtIndex::load(path).with_context(|| format!("loading {}", path.display()))?;
        println!("Court table : {}", path.display());
        println!("Courts      : {}", courts.court_count());
    }

    if let Some(hint) = hint {
        match infer_locality(&hint, |key| teryt.canonical(key)) {
            Some(found) => println!("{hint:?} -> {} ({:?})", found.canonical, found.source),
            None => println!("{hint:?} -> no locality"),
        }
    }

    Ok(())
}
