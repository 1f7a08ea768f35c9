//! Strategy port - abstraction over move selection
//!
//! [`Strategy`] is the single operation callers need: pick a move. Search
//! engines additionally implement [`Evaluator`], which exposes the scores
//! behind that choice for composition and testing.

use super::GameState;
use crate::{
    Result,
    strategy::{ScoreBundle, SearchStats, successor},
    types::Score,
};

/// Anything that can choose a move for the player to act.
///
/// # Examples
///
/// ```
/// use negamax::{
///     ports::Strategy,
///     strategy::Minimax,
///     subtract_square::{SubtractSquareMove, SubtractSquareState},
///     types::Player,
/// };
///
/// let mut minimax = Minimax::new();
/// let state = SubtractSquareState::new(Player::One, 4);
/// assert_eq!(minimax.suggest_move(&state)?, SubtractSquareMove::new(4));
/// # Ok::<(), negamax::Error>(())
/// ```
pub trait Strategy<S: GameState> {
    /// Select a legal move for the player to move in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if `state` offers no move.
    fn suggest_move(&mut self, state: &S) -> Result<S::Move>;

    /// Get the strategy's name.
    ///
    /// Used for identification in match transcripts and comparisons.
    fn name(&self) -> &str;

    /// Seed the strategy's internal random number generator.
    ///
    /// Deterministic strategies ignore this.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}

/// A strategy backed by a negamax scorer.
pub trait Evaluator<S: GameState>: Strategy<S> {
    /// Score of `state` for the player about to move.
    fn score(&mut self, state: &S) -> Result<Score>;

    /// Partition every legal move of `state` by the score it yields for the
    /// mover, i.e. the negated score of the successor.
    ///
    /// Moves inside a bucket keep their enumeration order.
    fn bundle_score(&mut self, state: &S) -> Result<ScoreBundle<S::Move>> {
        let mut bundle = ScoreBundle::new();
        for mv in state.possible_next_moves() {
            let next = successor(state, &mv)?;
            let score = -self.score(&next)?;
            bundle.insert(score, mv);
        }
        Ok(bundle)
    }

    /// Counters accumulated since construction or the last reset.
    fn stats(&self) -> SearchStats;

    /// Zero the search counters.
    fn reset_stats(&mut self);
}
