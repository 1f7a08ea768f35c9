//! Game state port - the capability set every searchable game exposes
//!
//! Search engines never look inside a position. They enumerate moves, apply
//! them, ask whether the game is over and who won, and (for depth-bounded
//! search) ask for a heuristic estimate. Concrete games implement this trait;
//! engines are generic over it.

use std::{fmt, hash::Hash};

use crate::{
    Result,
    types::{Player, Score},
};

/// A position in a two-player, zero-sum, perfect-information game.
///
/// States are immutable values: [`apply_move`](GameState::apply_move)
/// returns a fresh successor and leaves `self` untouched.
///
/// # Contract
///
/// - `is_over()` is true iff no legal move remains or a win condition holds.
/// - `apply_move` on a move from `possible_next_moves()` always succeeds,
///   flips the player to move, and recomputes `is_over()`.
/// - `winner(p)` is false while the game is ongoing.
/// - `rough_outcome()` lies in `[Score::LOSE, Score::WIN]`.
/// - `canonical_key()` is a total, collision-free function of the logical
///   state: equal positions give equal keys and distinct positions never
///   share one.
/// - Play must make progress (for instance a strictly decreasing number of
///   remaining moves); the exhaustive engines do not detect cycles.
///
/// # Examples
///
/// ```
/// use negamax::{
///     ports::GameState,
///     subtract_square::{SubtractSquareMove, SubtractSquareState},
///     types::Player,
/// };
///
/// let state = SubtractSquareState::new(Player::One, 4);
/// assert_eq!(
///     state.possible_next_moves(),
///     vec![SubtractSquareMove::new(1), SubtractSquareMove::new(4)]
/// );
///
/// let next = state.apply_move(&SubtractSquareMove::new(4))?;
/// assert!(next.is_over());
/// assert!(next.winner(Player::One));
/// # Ok::<(), negamax::Error>(())
/// ```
pub trait GameState: Sized + fmt::Debug {
    /// Opaque action identifier scoped to one state
    type Move: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Hashable identity of the logical state, used as a memo key
    type Key: Eq + Hash;

    /// The player about to move
    fn next_player(&self) -> Player;

    /// The player other than [`next_player`](GameState::next_player)
    fn opponent(&self) -> Player {
        self.next_player().opponent()
    }

    /// All legal moves from this state, in a stable enumeration order.
    fn possible_next_moves(&self) -> Vec<Self::Move>;

    /// Return the state reached when the player to move plays `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if `mv` is not currently legal.
    fn apply_move(&self, mv: &Self::Move) -> Result<Self>;

    /// Whether the game has ended
    fn is_over(&self) -> bool;

    /// Whether the game has ended with `player` holding a winning configuration
    fn winner(&self, player: Player) -> bool;

    /// Cheap estimate of the best score the player to move can guarantee.
    fn rough_outcome(&self) -> Score;

    /// Canonical identity of this position for memoization.
    fn canonical_key(&self) -> Self::Key;
}
