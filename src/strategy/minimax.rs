//! Exhaustive negamax

use super::{SearchStats, best_bundled_move, expand, successor, terminal_score};
use crate::{
    Result,
    ports::{Evaluator, GameState, Strategy},
    types::Score,
};

/// Full-depth negamax over the entire remaining game tree.
///
/// Cost is exponential in the number of remaining plies; there is no
/// pruning and no caching.
#[derive(Debug, Clone)]
pub struct Minimax {
    name: String,
    stats: SearchStats,
}

impl Minimax {
    pub fn new() -> Self {
        Self::with_name("Minimax")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: SearchStats::default(),
        }
    }

    fn negamax<S: GameState>(&mut self, state: &S) -> Result<Score> {
        self.stats.nodes += 1;

        if state.is_over() {
            return Ok(terminal_score(state));
        }

        let mut best = Score::LOSE;
        for mv in expand(state)? {
            let next = successor(state, &mv)?;
            best = best.max(-self.negamax(&next)?);
        }
        Ok(best)
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Strategy<S> for Minimax {
    fn suggest_move(&mut self, state: &S) -> Result<S::Move> {
        best_bundled_move(self, state)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<S: GameState> Evaluator<S> for Minimax {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        subtract_square::{SubtractSquareMove, SubtractSquareState},
        types::Player,
    };

    #[test]
    fn small_totals_alternate_between_win_and_loss() {
        let mut minimax = Minimax::new();
        // 2 -> 1 -> 0 leaves the mover without a move; 3 -> 2 hands that to the opponent.
        let two = SubtractSquareState::new(Player::One, 2);
        let three = SubtractSquareState::new(Player::One, 3);
        assert_eq!(minimax.score(&two).unwrap(), Score::LOSE);
        assert_eq!(minimax.score(&three).unwrap(), Score::WIN);
    }

    #[test]
    fn terminal_state_scores_without_recursion() {
        let mut minimax = Minimax::new();
        let state = SubtractSquareState::new(Player::Two, 0);
        assert_eq!(minimax.score(&state).unwrap(), Score::LOSE);
        assert_eq!(Evaluator::<SubtractSquareState>::stats(&minimax).nodes, 1);
    }

    #[test]
    fn bundle_separates_winning_and_losing_moves() {
        let mut minimax = Minimax::new();
        let state = SubtractSquareState::new(Player::One, 4);
        let bundle = minimax.bundle_score(&state).unwrap();

        assert_eq!(bundle.moves(Score::WIN), &[SubtractSquareMove::new(4)]);
        assert_eq!(bundle.moves(Score::LOSE), &[SubtractSquareMove::new(1)]);
        assert_eq!(
            minimax.suggest_move(&state).unwrap(),
            SubtractSquareMove::new(4)
        );
    }

    #[test]
    fn suggest_move_on_finished_game_fails() {
        let mut minimax = Minimax::new();
        let state = SubtractSquareState::new(Player::One, 0);
        assert!(matches!(
            minimax.suggest_move(&state),
            Err(crate::Error::NoValidMoves)
        ));
    }
}
