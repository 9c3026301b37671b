use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use adresy_fill::{CompletionEngine, Dataset, RunSummary, complete, prepare};
use adresy_reference::{CourtIndex, LocalityIndex};

const DEFAULT_TERYT: &str = "teryt.csv";
const DEFAULT_COURTS: &str = "obszar_sadow.csv";

#[derive(Parser)]
#[command(name = "adresy-fill")]
#[command(about = "Normalise and complete administrative addresses in a registry report")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalise administrative columns and add the address hint column.
    Prepare {
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Fill missing administrative fields from the reference tables.
    Complete {
        #[command(flatten)]
        report: ReportArgs,
        #[command(flatten)]
        reference: ReferenceArgs,
    },
    /// Prepare, then complete.
    Run {
        #[command(flatten)]
        report: ReportArgs,
        #[command(flatten)]
        reference: ReferenceArgs,
    },
}

#[derive(Args, Debug, Clone)]
struct ReportArgs {
    /// Report table (delimited text with a header row).
    report: PathBuf,
    /// Where to write the result; defaults to replacing the report.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Field delimiter of the report.
    #[arg(long, default_value = ";", value_parser = parse_delimiter)]
    delimiter: u8,
    /// Write the run counters as JSON to this path.
    #[arg(long)]
    report_json: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct ReferenceArgs {
    /// TERYT locality table.
    #[arg(long, env = "ADRESY_TERYT", default_value = DEFAULT_TERYT)]
    teryt: PathBuf,
    /// Registry-court jurisdiction table.
    #[arg(long, env = "ADRESY_COURTS", default_value = DEFAULT_COURTS)]
    courts: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let summary = match cli.command {
        Commands::Prepare { report } => run(&report, None)?,
        Commands::Complete { report, reference } => run_complete(&report, &reference)?,
        Commands::Run { report, reference } => run(&report, Some(&reference))?,
    };

    if let Some(prepared) = summary.prepare {
        info!(
            "prepared {} rows: {} regions modernised, {} hints",
            prepared.rows, prepared.regions_modernised, prepared.hints
        );
    }
    if let Some(filled) = summary.complete {
        info!("rows improved: {} of {}", filled.rows_improved, filled.rows);
        info!(
            "filled: region={}, county={}, municipality={}, locality={}",
            filled.region, filled.county, filled.municipality, filled.locality
        );
    }
    Ok(())
}

/// Preparation pass, optionally followed by completion.
fn run(args: &ReportArgs, reference: Option<&ReferenceArgs>) -> Result<RunSummary> {
    require_file(&args.report)?;
    let references = reference.map(load_references).transpose()?;
    let mut dataset = read_report(args)?;

    let mut summary = RunSummary {
        prepare: Some(prepare(&mut dataset)),
        complete: None,
    };
    if let Some((teryt, courts)) = &references {
        let engine = CompletionEngine::new(teryt, courts);
        summary.complete = Some(complete(&mut dataset, &engine));
    }

    finish(args, &dataset, &summary)?;
    Ok(summary)
}

fn run_complete(args: &ReportArgs, reference: &ReferenceArgs) -> Result<RunSummary> {
    require_file(&args.report)?;
    let (teryt, courts) = load_references(reference)?;
    let mut dataset = read_report(args)?;

    let engine = CompletionEngine::new(&teryt, &courts);
    let summary = RunSummary {
        prepare: None,
        complete: Some(complete(&mut dataset, &engine)),
    };

    finish(args, &dataset, &summary)?;
    Ok(summary)
}

fn load_references(reference: &ReferenceArgs) -> Result<(LocalityIndex, CourtIndex)> {
    info!("using teryt at {}", reference.teryt.display());
    info!("using court table at {}", reference.courts.display());
    require_file(&reference.teryt)?;
    require_file(&reference.courts)?;

    let start = Instant::now();
    let teryt = LocalityIndex::load(&reference.teryt)?;
    info!(
        "teryt indexed: {} rows, {} localities in {} ms",
        teryt.row_count(),
        teryt.key_count(),
        start.elapsed().as_millis()
    );

    let start = Instant::now();
    let courts = CourtIndex::load(&reference.courts)?;
    info!(
        "court table indexed: {} courts in {} ms",
        courts.court_count(),
        start.elapsed().as_millis()
    );
    Ok((teryt, courts))
}

fn read_report(args: &ReportArgs) -> Result<Dataset> {
    info!("reading report {}", args.report.display());
    let dataset = Dataset::read(&args.report, args.delimiter)
        .with_context(|| format!("loading report {}", args.report.display()))?;
    info!("{} rows, {} columns", dataset.len(), dataset.headers().len());
    Ok(dataset)
}

fn finish(args: &ReportArgs, dataset: &Dataset, summary: &RunSummary) -> Result<()> {
    let output = args.output.as_ref().unwrap_or(&args.report);
    dataset
        .write(output, args.delimiter)
        .with_context(|| format!("writing report {}", output.display()))?;
    info!("wrote {}", output.display());

    if let Some(path) = &args.report_json {
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, summary)
            .with_context(|| format!("write {}", path.display()))?;
        writer.flush()?;
        info!("run summary written to {}", path.display());
    }
    Ok(())
}

fn require_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("missing input file: {}", path.display());
    }
    Ok(())
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some('\\'), Some('t')) if raw.len() == 2 => Ok(b'\t'),
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!("delimiter must be a single ASCII character, got {raw:?}")),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
