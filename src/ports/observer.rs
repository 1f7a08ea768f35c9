//! Observer port - abstraction for match observation and reporting
//!
//! This port defines the interface for observing matches between
//! strategies, allowing progress reporting, transcripts and metrics without
//! coupling the match runner to specific output formats.

use super::GameState;
use crate::{
    Result,
    types::{MatchOutcome, Player},
};

/// Observer trait for monitoring matches
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_series_start(total_matches)` - Once at the beginning
/// 2. For each match:
///    - `on_match_start(match_num, initial)`
///    - `on_move(...)` - For each move in the match
///    - `on_match_end(match_num, outcome)`
/// 3. `on_series_end()` - Once at the end
///
/// A single match played with
/// [`MatchRunner::play`](crate::pipeline::MatchRunner::play) skips the
/// series events.
///
/// # Examples
///
/// ```no_run
/// use negamax::{
///     ports::{GameState, Observer},
///     types::MatchOutcome,
/// };
///
/// struct CountingObserver {
///     finished: usize,
/// }
///
/// impl<S: GameState> Observer<S> for CountingObserver {
///     fn on_match_end(&mut self, _match_num: usize, _outcome: MatchOutcome) -> negamax::Result<()> {
///         self.finished += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer<S: GameState> {
    /// Called when a series of matches starts.
    fn on_series_start(&mut self, _total_matches: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a match starts, with the position it starts from.
    fn on_match_start(&mut self, _match_num: usize, _initial: &S) -> Result<()> {
        Ok(())
    }

    /// Called after each move has been applied.
    ///
    /// # Parameters
    ///
    /// * `match_num` - Index of the current match
    /// * `ply` - Ply number within the match (0-based)
    /// * `player` - Player who made the move
    /// * `mv` - The move that was played
    /// * `next` - State after the move
    fn on_move(
        &mut self,
        _match_num: usize,
        _ply: usize,
        _player: Player,
        _mv: &S::Move,
        _next: &S,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a match reaches a terminal state.
    fn on_match_end(&mut self, _match_num: usize, _outcome: MatchOutcome) -> Result<()> {
        Ok(())
    }

    /// Called when the series completes.
    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}
