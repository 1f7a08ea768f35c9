//! negamax CLI - Score positions and pit search engines against each other
//!
//! This CLI provides a unified interface for:
//! - Scoring a Subtract-Square or Tippy position with any engine
//! - Suggesting a move for the player to act
//! - Playing a single match with a move-by-move transcript
//! - Comparing two engines over a series of matches

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "negamax")]
#[command(version, about = "Adversarial search over two-player games", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a position for the player to move
    Score(negamax::cli::commands::score::ScoreArgs),

    /// Suggest a move for the player to move
    Suggest(negamax::cli::commands::suggest::SuggestArgs),

    /// Play one match between two engines
    Play(negamax::cli::commands::play::PlayArgs),

    /// Compare two engines over a series of matches
    Compare(negamax::cli::commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score(args) => negamax::cli::commands::score::execute(args),
        Commands::Suggest(args) => negamax::cli::commands::suggest::execute(args),
        Commands::Play(args) => negamax::cli::commands::play::execute(args),
        Commands::Compare(args) => negamax::cli::commands::compare::execute(args),
    }
}
