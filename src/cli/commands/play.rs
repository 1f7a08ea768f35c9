//! Play command - Play one match between two engines

use std::fmt;

use anyhow::Result;
use clap::Parser;

use crate::{
    app::{App, EngineConfig, EngineKind},
    cli::{
        config::{CommonConfig, GameArgs, Position},
        output::{print_json, print_kv, print_section},
    },
    pipeline::{MatchConfig, MatchRunner, TranscriptObserver},
    ports::GameState,
    strategy::DEFAULT_LOOKAHEAD,
};

#[derive(Parser, Debug)]
#[command(about = "Play one match between two engines")]
pub struct PlayArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Engine controlling p1
    #[arg(long, value_enum, default_value_t = EngineKind::Memoize)]
    pub p1: EngineKind,

    /// Engine controlling p2
    #[arg(long, value_enum, default_value_t = EngineKind::Random)]
    pub p2: EngineKind,

    /// Horizon for myopic engines
    #[arg(long, default_value_t = DEFAULT_LOOKAHEAD)]
    pub lookahead: usize,

    /// Random seed for reproducibility (p2 gets seed + 1)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the position after every move
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print the match record as JSON instead of a transcript
    #[arg(long)]
    pub json: bool,
}

impl PlayArgs {
    fn common(&self) -> CommonConfig {
        CommonConfig {
            seed: self.seed,
            progress: false,
            verbose: self.verbose,
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    match args.game.initial_position()? {
        Position::SubtractSquare(state) => run(&args, state),
        Position::Tippy(state) => run(&args, state),
    }
}

fn seat_config(kind: EngineKind, seat: &str, lookahead: usize, seed: Option<u64>) -> EngineConfig {
    let config = EngineConfig::new(kind)
        .with_lookahead(lookahead)
        .with_name(format!("{}-{seat}", kind.default_name()));
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn run<S>(args: &PlayArgs, state: S) -> Result<()>
where
    S: GameState + fmt::Display + 'static,
{
    let common = args.common();
    let app = App::new();
    let mut p1 = app.create_strategy::<S>(&seat_config(args.p1, "p1", args.lookahead, common.seed))?;
    let mut p2 = app.create_strategy::<S>(&seat_config(
        args.p2,
        "p2",
        args.lookahead,
        common.seed.map(|s| s.wrapping_add(1)),
    ))?;

    let mut runner = MatchRunner::new(MatchConfig {
        num_matches: 1,
        seed: common.seed,
        swap_sides: false,
    });
    if !args.json {
        print_section(&format!("{} vs {}", p1.name(), p2.name()));
        runner = runner.with_observer(Box::new(TranscriptObserver::stdout(common.verbose)));
    }

    let record = runner.play(state, p1.as_mut(), p2.as_mut())?;

    if args.json {
        print_json(&record)?;
    } else {
        print_kv("Plies", &record.plies().to_string());
        print_kv("Outcome", &record.outcome.to_string());
    }
    Ok(())
}
