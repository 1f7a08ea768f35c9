//! Match runner for pitting two strategies against each other

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{GameState, Observer, Strategy},
    types::{MatchOutcome, Player},
};

/// Match series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of matches in a series
    pub num_matches: usize,

    /// Random seed handed to both strategies (the second gets `seed + 1`)
    pub seed: Option<u64>,

    /// Alternate which strategy controls `p1` from match to match
    pub swap_sides: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_matches: 10,
            seed: None,
            swap_sides: true,
        }
    }
}

/// One finished match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_num: usize,
    /// Name of the strategy controlling `p1`
    pub p1: String,
    /// Name of the strategy controlling `p2`
    pub p2: String,
    /// Player to move in the initial state
    pub first_player: Player,
    /// Moves in play order, rendered with `Display`
    pub moves: Vec<String>,
    pub outcome: MatchOutcome,
}

impl MatchRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Result of a series between strategies A and B
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesResult {
    pub strategy_a: String,
    pub strategy_b: String,
    pub total_matches: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub ties: usize,
    pub a_win_rate: f64,
    pub b_win_rate: f64,
    pub tie_rate: f64,
    pub avg_plies: f64,
    pub matches: Vec<MatchRecord>,
}

impl SeriesResult {
    /// Tally `matches` from strategy A's point of view.
    pub fn new(strategy_a: String, strategy_b: String, matches: Vec<MatchRecord>) -> Self {
        let total_matches = matches.len();
        let mut a_wins = 0;
        let mut b_wins = 0;
        let mut ties = 0;
        for record in &matches {
            let winner_name = match record.outcome {
                MatchOutcome::Win(Player::One) => Some(&record.p1),
                MatchOutcome::Win(Player::Two) => Some(&record.p2),
                MatchOutcome::Tie => None,
            };
            match winner_name {
                Some(name) if *name == strategy_a => a_wins += 1,
                Some(_) => b_wins += 1,
                None => ties += 1,
            }
        }

        let rate = |count: usize| {
            if total_matches > 0 {
                count as f64 / total_matches as f64
            } else {
                0.0
            }
        };
        let avg_plies = if total_matches > 0 {
            matches.iter().map(MatchRecord::plies).sum::<usize>() as f64 / total_matches as f64
        } else {
            0.0
        };

        Self {
            a_win_rate: rate(a_wins),
            b_win_rate: rate(b_wins),
            tie_rate: rate(ties),
            strategy_a,
            strategy_b,
            total_matches,
            a_wins,
            b_wins,
            ties,
            avg_plies,
            matches,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Outcome of a finished state
pub fn outcome_of<S: GameState>(state: &S) -> MatchOutcome {
    if state.winner(Player::One) {
        MatchOutcome::Win(Player::One)
    } else if state.winner(Player::Two) {
        MatchOutcome::Win(Player::Two)
    } else {
        MatchOutcome::Tie
    }
}

/// Plays matches between two strategies and reports to observers
pub struct MatchRunner<S: GameState> {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer<S>>>,
}

impl<S: GameState> MatchRunner<S> {
    /// Create a new match runner
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer<S>>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play a single match from `initial`, `p1` and `p2` each moving when it
    /// is their player's turn.
    pub fn play(
        &mut self,
        initial: S,
        p1: &mut dyn Strategy<S>,
        p2: &mut dyn Strategy<S>,
    ) -> Result<MatchRecord> {
        self.play_match(0, initial, p1, p2)
    }

    /// Play `num_matches` matches of `a` against `b`, each from a clone of
    /// `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if both strategies share a
    /// name, since results are attributed by name.
    pub fn play_series(
        &mut self,
        initial: &S,
        a: &mut dyn Strategy<S>,
        b: &mut dyn Strategy<S>,
    ) -> Result<SeriesResult>
    where
        S: Clone,
    {
        if let Some(seed) = self.config.seed {
            a.set_rng_seed(seed)?;
            b.set_rng_seed(seed.wrapping_add(1))?;
        }

        let strategy_a = a.name().to_string();
        let strategy_b = b.name().to_string();
        if strategy_a == strategy_b {
            return Err(Error::InvalidConfiguration {
                message: format!("both strategies are named '{strategy_a}'"),
            });
        }

        for observer in &mut self.observers {
            observer.on_series_start(self.config.num_matches)?;
        }

        let mut matches = Vec::with_capacity(self.config.num_matches);
        for match_num in 0..self.config.num_matches {
            let a_is_p1 = !self.config.swap_sides || match_num.is_multiple_of(2);
            let record = if a_is_p1 {
                self.play_match(match_num, initial.clone(), a, b)?
            } else {
                self.play_match(match_num, initial.clone(), b, a)?
            };
            matches.push(record);
        }

        for observer in &mut self.observers {
            observer.on_series_end()?;
        }

        Ok(SeriesResult::new(strategy_a, strategy_b, matches))
    }

    fn play_match(
        &mut self,
        match_num: usize,
        initial: S,
        p1: &mut dyn Strategy<S>,
        p2: &mut dyn Strategy<S>,
    ) -> Result<MatchRecord> {
        for observer in &mut self.observers {
            observer.on_match_start(match_num, &initial)?;
        }

        let first_player = initial.next_player();
        let mut state = initial;
        let mut moves = Vec::new();

        while !state.is_over() {
            let player = state.next_player();
            let strategy: &mut dyn Strategy<S> = match player {
                Player::One => &mut *p1,
                Player::Two => &mut *p2,
            };

            let mv = strategy.suggest_move(&state)?;
            let next = state.apply_move(&mv)?;

            for observer in &mut self.observers {
                observer.on_move(match_num, moves.len(), player, &mv, &next)?;
            }

            moves.push(mv.to_string());
            state = next;
        }

        let outcome = outcome_of(&state);
        for observer in &mut self.observers {
            observer.on_match_end(match_num, outcome)?;
        }

        Ok(MatchRecord {
            match_num,
            p1: p1.name().to_string(),
            p2: p2.name().to_string(),
            first_player,
            moves,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        strategy::{Minimax, RandomStrategy},
        subtract_square::SubtractSquareState,
    };

    #[test]
    fn test_single_match_follows_next_player() {
        let mut runner = MatchRunner::new(MatchConfig::default());
        let mut minimax = Minimax::new();
        let mut random = RandomStrategy::with_seed("Random", 3);

        // Total 4 with p1 to move: minimax takes 4 and wins at once.
        let record = runner
            .play(SubtractSquareState::new(Player::One, 4), &mut minimax, &mut random)
            .unwrap();
        assert_eq!(record.moves, vec!["-4".to_string()]);
        assert_eq!(record.outcome, MatchOutcome::Win(Player::One));
        assert_eq!(record.p1, "Minimax");
    }

    #[test]
    fn test_series_counts_from_a_perspective() {
        let config = MatchConfig {
            num_matches: 4,
            seed: Some(11),
            swap_sides: true,
        };
        let mut runner = MatchRunner::new(config);
        let mut minimax = Minimax::new();
        let mut random = RandomStrategy::new("Random");

        // Total 3 is a win for the mover, so whoever controls p1 wins.
        let initial = SubtractSquareState::new(Player::One, 3);
        let result = runner
            .play_series(&initial, &mut minimax, &mut random)
            .unwrap();

        assert_eq!(result.total_matches, 4);
        assert_eq!(result.a_wins, 2);
        assert_eq!(result.b_wins, 2);
        assert_eq!(result.ties, 0);
        assert_eq!(result.matches[1].p1, "Random");
        assert!((result.avg_plies - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_series_rejects_duplicate_names() {
        let mut runner = MatchRunner::new(MatchConfig::default());
        let initial = SubtractSquareState::new(Player::One, 3);
        let result = runner.play_series(&initial, &mut Minimax::new(), &mut Minimax::new());
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_empty_series_rates_are_zero() {
        let result = SeriesResult::new("A".into(), "B".into(), Vec::new());
        assert_eq!(result.a_win_rate, 0.0);
        assert_eq!(result.avg_plies, 0.0);
    }
}
