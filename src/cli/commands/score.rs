//! Score command - Evaluate a position with one of the search engines

use std::fmt;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    app::App,
    cli::{
        config::{EngineArgs, GameArgs, Position},
        output::{
            BucketReport, bucket_reports, create_spinner, describe_score, print_buckets, print_kv,
            print_json, print_section, print_stats, print_subsection,
        },
    },
    ports::GameState,
    strategy::SearchStats,
    types::{Player, Score},
};

#[derive(Parser, Debug)]
#[command(about = "Score a position for the player to move")]
pub struct ScoreArgs {
    #[command(flatten)]
    pub game: GameArgs,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Also score every legal move
    #[arg(long)]
    pub moves: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ScoreReport {
    game: String,
    position: String,
    next_player: Player,
    engine: String,
    score: Score,
    stats: SearchStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<BucketReport>>,
}

pub fn execute(args: ScoreArgs) -> Result<()> {
    match args.game.initial_position()? {
        Position::SubtractSquare(state) => run(&args, state),
        Position::Tippy(state) => run(&args, state),
    }
}

fn run<S>(args: &ScoreArgs, state: S) -> Result<()>
where
    S: GameState + fmt::Display + 'static,
{
    let config = args.engine.to_config(None);
    let mut engine = App::new().create_evaluator::<S>(&config)?;

    let spinner = if args.json {
        None
    } else {
        Some(create_spinner(&format!("Searching with {}...", engine.name()))?)
    };

    let score = engine.score(&state)?;
    let stats = engine.stats();
    let moves = if args.moves {
        Some(bucket_reports(&engine.bundle_score(&state)?))
    } else {
        None
    };

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let report = ScoreReport {
        game: args.game.game.to_string(),
        position: state.to_string(),
        next_player: state.next_player(),
        engine: engine.name().to_string(),
        score,
        stats,
        moves,
    };

    if args.json {
        print_json(&report)?;
        return Ok(());
    }

    print_section(&format!("{} position", report.game));
    println!("{state}");
    print_kv("To move", report.next_player.as_str());
    print_kv("Engine", &report.engine);
    print_kv("Score", &describe_score(report.score));
    print_stats(&report.stats);

    if let Some(buckets) = &report.moves {
        print_subsection("Moves by score");
        print_buckets(buckets);
    }

    Ok(())
}
