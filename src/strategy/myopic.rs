//! Depth-bounded negamax

use super::{SearchStats, best_bundled_move, expand, successor, terminal_score};
use crate::{
    Error, Result,
    ports::{Evaluator, GameState, Strategy},
    types::Score,
};

/// Lookahead used by [`Myopic::new`]
pub const DEFAULT_LOOKAHEAD: usize = 3;

/// Negamax that trusts [`GameState::rough_outcome`] past a fixed depth.
///
/// Scoring starts at step 1. A non-terminal state reached at step
/// `lookahead` is not expanded; its heuristic estimate is used instead.
/// [`bundle_score`](Evaluator::bundle_score) always plays one real ply
/// before scoring the successors from step 1, so the bound applies one level
/// below the root's moves.
///
/// Worst-case cost is the branching factor raised to `lookahead`, at the
/// price of accuracy: results are only as good as the game's heuristic.
#[derive(Debug, Clone)]
pub struct Myopic {
    name: String,
    lookahead: usize,
    stats: SearchStats,
}

impl Myopic {
    /// Create an engine with the default lookahead of 3.
    pub fn new() -> Self {
        Self {
            name: "Myopic".to_string(),
            lookahead: DEFAULT_LOOKAHEAD,
            stats: SearchStats::default(),
        }
    }

    /// Create an engine that looks `lookahead` steps ahead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `lookahead` is zero.
    pub fn with_lookahead(lookahead: usize) -> Result<Self> {
        if lookahead == 0 {
            return Err(Error::InvalidConfiguration {
                message: "myopic lookahead must be at least 1".to_string(),
            });
        }
        Ok(Self {
            lookahead,
            ..Self::new()
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    /// Score `state` as if it had been reached at search step `step`.
    pub fn score_at_step<S: GameState>(&mut self, state: &S, step: usize) -> Result<Score> {
        self.stats.nodes += 1;

        if state.is_over() {
            return Ok(terminal_score(state));
        }

        if step >= self.lookahead {
            self.stats.heuristic_evaluations += 1;
            return Ok(state.rough_outcome());
        }

        let mut best = Score::LOSE;
        for mv in expand(state)? {
            let next = successor(state, &mv)?;
            best = best.max(-self.score_at_step(&next, step + 1)?);
        }
        Ok(best)
    }
}

impl Default for Myopic {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Strategy<S> for Myopic {
    fn suggest_move(&mut self, state: &S) -> Result<S::Move> {
        best_bundled_move(self, state)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<S: GameState> Evaluator<S> for Myopic {
    fn score(&mut self, state: &S) -> Result<Score> {
        self.score_at_step(state, 1)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }

    fn reset_stats(&mut self) {
        self.stats.reset();
    }
}
