//! Saved places sorter.
//!
//! Loads borough and colonia boundaries, classifies every saved place in
//! the region, and prints them grouped in curated display order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use barrio::config::Config;
use barrio::pip::{BoundarySet, Classifier, SubregionSet};
use barrio::places::load_saved_places;
use barrio::ranking::{classify_all, group_for_display, order_for_display, RankTable, RunSummary};
use barrio::render::{render, Format};

#[derive(Parser, Debug)]
#[command(name = "sort")]
#[command(about = "Group saved places by borough and neighborhood")]
struct Args {
    /// Saved places export (GeoJSON)
    #[arg(short, long, default_value = "Saved Places.json")]
    places: PathBuf,

    /// Directory holding the boundary GeoJSON files
    #[arg(short, long, default_value = "geojson")]
    data_dir: PathBuf,

    /// Region configuration (TOML); defaults to the built-in Mexico City one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document name for KML output
    #[arg(short, long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for the listing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::builtin().context("Failed to parse built-in config")?,
    };
    info!("Region: {}", config.region.name);

    let boundaries =
        BoundarySet::load(&config, &args.data_dir).context("Failed to load borough boundaries")?;
    let subregions =
        SubregionSet::load(&config, &args.data_dir).context("Failed to load colonias")?;
    let ranks = RankTable::build(&config.neighborhoods).context("Invalid neighborhood ranks")?;
    let classifier = Classifier::new(
        boundaries,
        subregions,
        ranks,
        config.region.outside_label.as_str(),
    );

    let saved = load_saved_places(&args.places, &config.bbox, &config.region.country)
        .with_context(|| format!("Failed to load {}", args.places.display()))?;

    let ordered = order_for_display(classify_all(&classifier, saved));
    let entries = group_for_display(&ordered);

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    render(&mut out, args.format, &entries, args.name.as_deref())
        .context("Failed to write output")?;
    out.flush()?;

    RunSummary::new(&classifier, &entries).log();

    Ok(())
}
