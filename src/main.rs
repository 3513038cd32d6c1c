//! Assembly: Endgame - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use assembly_endgame::{Catalog, RandomWords, run_tui};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(args) => play(args),
        Command::Catalog { catalog } => print_catalog(catalog.as_deref()),
    }
}

/// Loads the catalog from `path`, or the built-in one.
#[instrument]
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin().context("Built-in catalog is invalid")?,
    };
    Ok(catalog)
}

/// Setup logging to file to avoid interfering with the TUI.
fn init_file_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the game.
fn play(args: PlayArgs) -> Result<()> {
    init_file_tracing(&args.log_file)?;
    info!(catalog = ?args.catalog, seed = ?args.seed, "Starting game");

    let catalog = load_catalog(args.catalog.as_deref())?;
    let words = catalog.words().clone();
    let words = match args.seed {
        Some(seed) => RandomWords::seeded(words, seed)?,
        None => RandomWords::new(words)?,
    };

    run_tui(catalog, words)
}

/// Validates a catalog and prints what it contains.
fn print_catalog(path: Option<&Path>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = load_catalog(path)?;

    println!("Languages ({}):", catalog.languages().len());
    for (i, language) in catalog.languages().iter().enumerate() {
        println!(
            "  {:>2}. {:<12} background {}  color {}",
            i + 1,
            language.name(),
            language.background(),
            language.color()
        );
    }
    println!("Words: {}", catalog.words().len());
    println!(
        "Wrong guesses tolerated: {} (survivor: {})",
        catalog.tolerance(),
        catalog.survivor().name()
    );
    Ok(())
}
