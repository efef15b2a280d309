//! CLI tool exporting a Sosa-numbered genealogy table to JSON.
//!
//! # Usage
//!
//! ```bash
//! # Read source/raw_page.txt, write export/genealogy.json
//! genealogy-export
//!
//! # Custom locations, with debug logging on stderr
//! RUST_LOG=debug genealogy-export --source dump.txt --output out/ancestors.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use genealogy::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default location of the raw tab-separated dump.
const DEFAULT_SOURCE: &str = "source/raw_page.txt";

/// Default location of the exported JSON document.
const DEFAULT_OUTPUT: &str = "export/genealogy.json";

/// Parse Sosa-numbered genealogy data and export JSON.
///
/// Lines that do not start with a digit (headers, blank lines, notes)
/// are skipped. Later lines win when the same Sosa number repeats.
#[derive(Parser, Debug)]
#[command(name = "genealogy-export")]
#[command(version, about)]
struct Args {
    /// Path to the tab-separated source table.
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Destination JSON file. Missing parent directories are created.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let count = export(&args.source, &args.output)?;
    println!("Exported {count} people to {}", args.output.display());

    Ok(())
}

/// Loads every person from `source` and writes them to `output`.
///
/// Returns the number of exported people.
fn export(source: &Path, output: &Path) -> Result<usize> {
    if !source.exists() {
        bail!("Source file not found: {}", source.display());
    }

    let people = load_people_from_path(source)
        .with_context(|| format!("Failed to read source file: {}", source.display()))?;
    info!(count = people.len(), source = %source.display(), "loaded people");

    export_people(people.values(), output)
        .with_context(|| format!("Failed to write output file: {}", output.display()))
}
