//! Command-line interface for assembly_endgame.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default log file for the `play` command.
pub const DEFAULT_LOG_FILE: &str = "assembly_endgame.log";

/// Assembly: Endgame - save the programming world from Assembly
#[derive(Parser, Debug)]
#[command(name = "assembly_endgame")]
#[command(about = "Terminal word-guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the game in the terminal
    Play(PlayArgs),

    /// Validate a catalog and print a summary
    Catalog {
        /// Catalog TOML file (built-in catalog if omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Options for the `play` command.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Catalog TOML file (built-in catalog if omitted)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Seed for reproducible word selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs (the terminal is busy with the game)
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            catalog: None,
            seed: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
