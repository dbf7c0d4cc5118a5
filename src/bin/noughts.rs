//! noughts CLI - Game-tree search for noughts and crosses
//!
//! This CLI provides:
//! - Interactive play against minimax, alpha-beta or random-blocking AI
//! - Per-position analysis with node counts and timing
//! - Exhaustive verification of the search

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Minimax and alpha-beta search for noughts and crosses", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the AI
    Play(noughts::cli::commands::play::PlayArgs),

    /// Analyze a position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),

    /// Verify the search over the whole game
    Verify(noughts::cli::commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
        Commands::Verify(args) => noughts::cli::commands::verify::execute(args),
    }
}
