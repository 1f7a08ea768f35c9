//! Negamax with a transposition cache

use std::collections::HashMap;

use super::{SearchStats, best_bundled_move, expand, successor, terminal_score};
use crate::{
    Result,
    ports::{Evaluator, GameState, Strategy},
    types::Score,
};

/// Exhaustive negamax that remembers the score of every state it finishes.
///
/// Scores are cached under [`GameState::canonical_key`], so a subtree
/// reachable through different move orders is searched once. The table is
/// owned by this engine, starts empty, and only grows; call
/// [`clear_memo`](Memoize::clear_memo) to drop it.
///
/// # Examples
///
/// ```
/// use negamax::{
///     ports::Evaluator,
///     strategy::Memoize,
///     subtract_square::SubtractSquareState,
///     types::{Player, Score},
/// };
///
/// let mut memoize = Memoize::new();
/// let state = SubtractSquareState::new(Player::One, 20);
/// let first = memoize.score(&state)?;
/// let cached = memoize.memo_len();
///
/// assert_eq!(memoize.score(&state)?, first);
/// assert_eq!(memoize.memo_len(), cached);
/// # Ok::<(), negamax::Error>(())
/// ```
pub struct Memoize<S: GameState> {
    name: String,
    memo: HashMap<S::Key, Score>,
    stats: SearchStats,
}

impl<S: GameState> Memoize<S> {
    pub fn new() -> Self {
        Self::with_name("Memoize")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            memo: HashMap::new(),
            stats: SearchStats::default(),
        }
    }

    /// Number of states with a cached score
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Cached score for `state`, if it has been searched
    pub fn cached(&self, state: &S) -> Option<Score> {
        self.memo.get(&state.canonical_key()).copied()
    }

    pub fn clear_memo(&mut self) {
        self.memo.clear();
    }

    fn negamax(&mut self, state: &S) -> Result<Score> {
        self.stats.nodes += 1;

        let key = state.canonical_key();
        if let Some(&score) = self.memo.get(&key) {
            self.stats.cache_hits += 1;
            return Ok(score);
        }

        let score = if state.is_over() {
            terminal_score(state)
        } else {
            let mut best = Score::LOSE;
            for mv in expand(state)? {
                let next = successor(state, &mv)?;
                best = best.max(-self.negamax(&next)?);
            }
            best
        };

        self.memo.insert(key, score);
        Ok(score)
    }
}

impl<S: GameState> Default for Memoize<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Strategy<S> for Memoize<S> {
    fn suggest_move(&mut self, state: &S) -> Result<S::Move> {
        best_bundled_move(self, state)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<S: GameState> Evaluator<S> for Memoize<S> {
    fn score(&mut self, state: &S) -> Result<Score> {
        self.negamax(state)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }

    fn reset_stats(&mut self) {
        self.stats.reset();
    }
}
