//! Compare command - Play a series between two engines

use std::{fmt, path::PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    app::{App, EngineConfig, EngineKind},
    cli::{
        config::{CommonConfig, GameArgs, Position},
        output::{print_json, print_kv, print_section},
    },
    pipeline::{MatchConfig, MatchRunner, ProgressObserver, SeriesResult},
    ports::GameState,
    strategy::DEFAULT_LOOKAHEAD,
};

#[derive(Parser, Debug)]
#[command(about = "Compare two engines over a series of matches")]
pub struct CompareArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Engines to compare
    #[arg(required = true, num_args = 2, value_enum)]
    pub engines: Vec<EngineKind>,

    /// Number of matches
    #[arg(long, short = 'm', default_value_t = 10)]
    pub matches: usize,

    /// Horizon for myopic engines
    #[arg(long, default_value_t = DEFAULT_LOOKAHEAD)]
    pub lookahead: usize,

    /// Keep the first engine on p1 for every match
    #[arg(long)]
    pub no_swap: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Save the series result as JSON
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the series result as JSON
    #[arg(long)]
    pub json: bool,
}

impl CompareArgs {
    fn common(&self) -> CommonConfig {
        CommonConfig {
            seed: self.seed,
            progress: !self.no_progress && !self.json,
            verbose: false,
        }
    }
}

pub fn execute(args: CompareArgs) -> Result<()> {
    if args.engines.len() != 2 {
        return Err(anyhow!("Need exactly 2 engines to compare"));
    }

    match args.game.initial_position()? {
        Position::SubtractSquare(state) => run(&args, state),
        Position::Tippy(state) => run(&args, state),
    }
}

fn run<S>(args: &CompareArgs, state: S) -> Result<()>
where
    S: GameState + Clone + fmt::Display + 'static,
{
    let common = args.common();
    let app = App::new();

    // Suffixes keep names distinct when the same engine plays itself.
    let configs: Vec<EngineConfig> = args
        .engines
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            EngineConfig::new(*kind)
                .with_lookahead(args.lookahead)
                .with_name(format!("{}-{}", kind.default_name(), i + 1))
        })
        .collect();
    let mut a = app.create_strategy::<S>(&configs[0])?;
    let mut b = app.create_strategy::<S>(&configs[1])?;

    let mut runner = MatchRunner::new(MatchConfig {
        num_matches: args.matches,
        seed: common.seed,
        swap_sides: !args.no_swap,
    });
    if common.progress {
        runner = runner.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = runner.play_series(&state, a.as_mut(), b.as_mut())?;

    if let Some(path) = &args.output {
        result.save(path)?;
    }

    if args.json {
        print_json(&result)?;
        return Ok(());
    }

    print_results(&result);
    if let Some(path) = &args.output {
        println!("\nResults exported to: {}", path.display());
    }
    Ok(())
}

fn print_results(result: &SeriesResult) {
    print_section("Comparison Results");
    print_kv("Matches", &result.total_matches.to_string());
    print_kv(
        &result.strategy_a,
        &format!("{} wins ({:.1}%)", result.a_wins, result.a_win_rate * 100.0),
    );
    print_kv(
        &result.strategy_b,
        &format!("{} wins ({:.1}%)", result.b_wins, result.b_win_rate * 100.0),
    );
    print_kv(
        "Ties",
        &format!("{} ({:.1}%)", result.ties, result.tie_rate * 100.0),
    );
    print_kv("Average plies", &format!("{:.1}", result.avg_plies));
}
