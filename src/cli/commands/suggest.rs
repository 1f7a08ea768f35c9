//! Suggest command - Pick a move for the player to act

use std::fmt;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    app::App,
    cli::{
        config::{EngineArgs, GameArgs, Position},
        output::{describe_score, print_json, print_kv, print_stats},
    },
    ports::GameState,
    strategy::SearchStats,
    types::{Player, Score},
};

#[derive(Parser, Debug)]
#[command(about = "Suggest a move for the player to move")]
pub struct SuggestArgs {
    #[command(flatten)]
    pub game: GameArgs,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Random seed for reproducibility (random engine)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SuggestReport {
    next_player: Player,
    engine: String,
    #[serde(rename = "move")]
    mv: String,
    /// Score of the position after the suggested move, for the mover
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<SearchStats>,
}

pub fn execute(args: SuggestArgs) -> Result<()> {
    match args.game.initial_position()? {
        Position::SubtractSquare(state) => run(&args, state),
        Position::Tippy(state) => run(&args, state),
    }
}

fn run<S>(args: &SuggestArgs, state: S) -> Result<()>
where
    S: GameState + fmt::Display + 'static,
{
    let config = args.engine.to_config(args.seed);
    let app = App::new();

    let report = if config.kind.is_evaluator() {
        let mut engine = app.create_evaluator::<S>(&config)?;
        let mv = engine
            .suggest_move(&state)
            .with_context(|| format!("no move to suggest from\n{state}"))?;
        let score = -engine.score(&state.apply_move(&mv)?)?;
        SuggestReport {
            next_player: state.next_player(),
            engine: engine.name().to_string(),
            mv: mv.to_string(),
            score: Some(score),
            stats: Some(engine.stats()),
        }
    } else {
        let mut strategy = app.create_strategy::<S>(&config)?;
        let mv = strategy
            .suggest_move(&state)
            .with_context(|| format!("no move to suggest from\n{state}"))?;
        SuggestReport {
            next_player: state.next_player(),
            engine: strategy.name().to_string(),
            mv: mv.to_string(),
            score: None,
            stats: None,
        }
    };

    if args.json {
        print_json(&report)?;
        return Ok(());
    }

    println!("{state}");
    print_kv("To move", report.next_player.as_str());
    print_kv("Engine", &report.engine);
    print_kv("Suggested move", &report.mv);
    if let Some(score) = report.score {
        print_kv("Expected result", &describe_score(score));
    }
    if let Some(stats) = &report.stats {
        print_stats(stats);
    }
    Ok(())
}
