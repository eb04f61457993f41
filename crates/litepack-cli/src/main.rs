//! litepack driver.
//!
//! Enumerates the corpus and runs the batch: one pass over instance
//! documents, one over the work-directory instance documents, one over
//! person documents, then a single flush. Per-document failures are logged
//! and the batch continues.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use litepack_pipeline::{PassthroughConverter, Pipeline, PipelineConfig};

#[derive(Parser)]
#[command(name = "litepack")]
#[command(
    author,
    version,
    about = "Convert a linked-data corpus into a sharded JSON store plus title indexes"
)]
struct Cli {
    /// Corpus root (contains instances/, works/, persons/, outlines/)
    source: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    out: PathBuf,

    /// Per-document progress logging
    #[arg(short, long)]
    verbose: bool,

    /// Only emit open-access instances
    #[arg(long)]
    open_access_only: bool,

    /// Drop instances flagged as restricted in the configured region
    #[arg(long)]
    restricted_region: bool,

    /// Hex digits of the output shard key (0 writes one file per entity)
    #[arg(long, default_value_t = 2)]
    shard_digits: usize,

    /// Whitelist table (default: {source}/whitelist.csv)
    #[arg(long)]
    whitelist: Option<PathBuf>,

    /// Instance → outline mapping table (default: {source}/outlines.csv)
    #[arg(long)]
    outline_map: Option<PathBuf>,
}

/// Sorted `.trig` files under `dir` whose stem starts with `prefix`.
/// Instance documents are `MW*`, person documents `P*`; the work directory
/// holds both `W*` work documents and `MW*` work-sourced instances, so the
/// prefix filter is what keeps the second pass to instances only.
fn trig_files(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "trig"))
        .filter(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map_or(false, |stem| stem.starts_with(prefix))
        })
        .collect();
    files.sort();
    files
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = PipelineConfig::new(&cli.source, &cli.out);
    config.verbose = cli.verbose;
    config.open_access_only = cli.open_access_only;
    config.restricted_region = cli.restricted_region;
    config.shard_digits = cli.shard_digits;
    if let Some(whitelist) = cli.whitelist {
        config.whitelist_path = whitelist;
    }
    if let Some(outline_map) = cli.outline_map {
        config.outline_map_path = outline_map;
    }

    let converter = PassthroughConverter;
    let mut pipeline =
        Pipeline::new(config, &converter).context("failed to initialize pipeline")?;

    let mut failures = 0usize;

    // Instances live in two places: the instances directory and, for
    // work-sourced records, the works directory.
    for pass_dir in ["instances", "works"] {
        let files = trig_files(&cli.source.join(pass_dir), "MW");
        info!("{}: {} instance documents", pass_dir, files.len());
        for (i, path) in files.iter().enumerate() {
            match pipeline.process_instance(path) {
                Ok(_) => {}
                Err(err) => {
                    failures += 1;
                    warn!("skipping {}: {err}", path.display());
                }
            }
            if (i + 1) % 10_000 == 0 {
                info!("{}: {}/{}", pass_dir, i + 1, files.len());
            }
        }
    }

    let files = trig_files(&cli.source.join("persons"), "P");
    info!("persons: {} documents", files.len());
    for (i, path) in files.iter().enumerate() {
        match pipeline.process_person(path) {
            Ok(_) => {}
            Err(err) => {
                failures += 1;
                warn!("skipping {}: {err}", path.display());
            }
        }
        if (i + 1) % 10_000 == 0 {
            info!("persons: {}/{}", i + 1, files.len());
        }
    }

    let stats = pipeline.finish().context("failed to write output")?;

    println!(
        "{} {} instance records, {} person records, {} record files, {} index files, {} failed documents",
        "done:".green().bold(),
        stats.instances,
        stats.persons,
        stats.record_files,
        stats.index_files,
        failures
    );
    Ok(())
}
