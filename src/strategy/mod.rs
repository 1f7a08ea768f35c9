//! Negamax search engines
//!
//! Four engines share one recursion, `score(s) = max over m of -score(apply(s, m))`,
//! and differ only in how much of the tree they are willing to look at:
//!
//! - [`Minimax`] explores the full game tree.
//! - [`Memoize`] caches scores by [`GameState::canonical_key`].
//! - [`Prune`] threads a single lower bound and stops once it is met.
//! - [`Myopic`] substitutes [`GameState::rough_outcome`] past a fixed depth.
//!
//! [`RandomStrategy`] is a baseline for matches and tests.

pub mod bundle;
pub mod memoize;
pub mod minimax;
pub mod myopic;
pub mod prune;
pub mod random;
pub mod stats;

pub use bundle::ScoreBundle;
pub use memoize::Memoize;
pub use minimax::Minimax;
pub use myopic::{DEFAULT_LOOKAHEAD, Myopic};
pub use prune::Prune;
pub use random::RandomStrategy;
pub use stats::SearchStats;

use crate::{
    Error, Result,
    ports::{Evaluator, GameState},
    types::Score,
};

/// Score of a finished game for the player to move.
///
/// A terminal state where neither player holds a win scores as a tie.
pub(crate) fn terminal_score<S: GameState>(state: &S) -> Score {
    if state.winner(state.next_player()) {
        Score::WIN
    } else if state.winner(state.opponent()) {
        Score::LOSE
    } else {
        Score::TIE
    }
}

/// Apply a move drawn from `possible_next_moves()`.
///
/// A failure here means the game broke its own contract, so the error is
/// reported as [`Error::LegalMoveFailed`] rather than an illegal caller move.
pub(crate) fn successor<S: GameState>(state: &S, mv: &S::Move) -> Result<S> {
    state.apply_move(mv).map_err(|e| Error::LegalMoveFailed {
        message: format!("{mv:?} from {state:?}: {e}"),
    })
}

/// Legal moves of a non-terminal state.
///
/// # Errors
///
/// Returns [`Error::NoActionsAvailable`] when the state claims the game is
/// still on but offers no move.
pub(crate) fn expand<S: GameState>(state: &S) -> Result<Vec<S::Move>> {
    let moves = state.possible_next_moves();
    if moves.is_empty() {
        return Err(Error::NoActionsAvailable {
            state: format!("{state:?}"),
        });
    }
    Ok(moves)
}

/// First move of the highest-scoring bucket.
pub(crate) fn best_bundled_move<S, E>(engine: &mut E, state: &S) -> Result<S::Move>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    let bundle = engine.bundle_score(state)?;
    bundle.best_move().cloned().ok_or(Error::NoValidMoves)
}
