//! Negamax with a single-bound cutoff

use super::{SearchStats, expand, successor, terminal_score};
use crate::{
    Error, Result,
    ports::{Evaluator, GameState, Strategy},
    types::Score,
};

/// Negamax with branch-and-bound pruning.
///
/// Each call receives `least`, the best score the parent has already secured.
/// Once this node's running maximum reaches `-least`, the parent can no
/// longer prefer this branch, so the remaining siblings are skipped. Only
/// this one bound is threaded down; there is no alpha-beta window.
///
/// Scores reported at the root (`least = LOSE`) are exact and equal to
/// [`Minimax`](super::Minimax)'s. Inner nodes may return a lower bound once
/// the cutoff fires, which the parent never picks.
#[derive(Debug, Clone)]
pub struct Prune {
    name: String,
    stats: SearchStats,
}

impl Prune {
    pub fn new() -> Self {
        Self::with_name("Prune")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: SearchStats::default(),
        }
    }

    /// Score `state`, stopping early once `-least` is guaranteed.
    pub fn score_with_bound<S: GameState>(&mut self, state: &S, least: Score) -> Result<Score> {
        self.stats.nodes += 1;

        if state.is_over() {
            return Ok(terminal_score(state));
        }

        let moves = expand(state)?;
        let total = moves.len();
        let mut guaranteed = Score::LOSE;
        for (idx, mv) in moves.into_iter().enumerate() {
            let next = successor(state, &mv)?;
            let next_score = -self.score_with_bound(&next, guaranteed)?;
            if next_score > guaranteed {
                guaranteed = next_score;
            }
            if guaranteed >= -least {
                if idx + 1 < total {
                    self.stats.cutoffs += 1;
                }
                break;
            }
        }
        Ok(guaranteed)
    }
}

impl Default for Prune {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Strategy<S> for Prune {
    /// Return the first winning move as soon as one is found; otherwise the
    /// first tying move; otherwise the first legal move.
    ///
    /// The last fallback does not look for the least-bad loss.
    fn suggest_move(&mut self, state: &S) -> Result<S::Move> {
        let moves = state.possible_next_moves();
        let fallback = moves.first().cloned().ok_or(Error::NoValidMoves)?;

        let mut first_tie = None;
        for mv in moves {
            let next = successor(state, &mv)?;
            let score = -self.score_with_bound(&next, Score::LOSE)?;
            if score.is_win() {
                return Ok(mv);
            }
            if score.is_tie() && first_tie.is_none() {
                first_tie = Some(mv);
            }
        }

        Ok(first_tie.unwrap_or(fallback))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<S: GameState> Evaluator<S> for Prune {
    fn score(&mut self, state: &S) -> Result<Score> {
        self.score_with_bound(state, Score::LOSE)
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
        strategy::Minimax,
        subtract_square::{SubtractSquareMove, SubtractSquareState},
        tippy::{TippyMove, TippyState},
        types::Player,
    };

    #[test]
    fn agrees_with_minimax_on_small_totals() {
        for total in 0..=20 {
            let state = SubtractSquareState::new(Player::One, total);
            let mut minimax = Minimax::new();
            let mut prune = Prune::new();
            assert_eq!(
                prune.score(&state).unwrap(),
                minimax.score(&state).unwrap(),
                "total {total}"
            );
        }
    }

    #[test]
    fn visits_no_more_nodes_than_minimax() {
        let state = SubtractSquareState::new(Player::One, 18);
        let mut minimax = Minimax::new();
        let mut prune = Prune::new();
        minimax.score(&state).unwrap();
        prune.score(&state).unwrap();

        let exhaustive = Evaluator::<SubtractSquareState>::stats(&minimax).nodes;
        let pruned = Evaluator::<SubtractSquareState>::stats(&prune).nodes;
        assert!(pruned <= exhaustive, "{pruned} > {exhaustive}");
        assert!(Evaluator::<SubtractSquareState>::stats(&prune).cutoffs > 0);
    }

    #[test]
    fn returns_winning_move_immediately() {
        let mut prune = Prune::new();
        let state = SubtractSquareState::new(Player::One, 4);
        assert_eq!(prune.suggest_move(&state).unwrap(), SubtractSquareMove::new(4));
    }

    #[test]
    fn falls_back_to_first_move_when_every_move_loses() {
        // Total 5: subtracting 1 leaves 4 and subtracting 4 leaves 1; both are
        // wins for the opponent.
        let mut prune = Prune::new();
        let state = SubtractSquareState::new(Player::One, 5);
        assert_eq!(prune.score(&state).unwrap(), Score::LOSE);
        assert_eq!(prune.suggest_move(&state).unwrap(), SubtractSquareMove::new(1));
    }

    #[test]
    fn settles_for_the_first_tying_move() {
        // X to move: (0,0) and (0,1) lose, (0,2) is the first move that holds the tie.
        let state = TippyState::from_label(".../X.O/.OX").unwrap();
        let mut minimax = Minimax::new();
        let bundle = minimax.bundle_score(&state).unwrap();
        assert_eq!(bundle.best_score(), Some(Score::TIE));

        let mut prune = Prune::new();
        let mv = prune.suggest_move(&state).unwrap();
        assert_eq!(mv, TippyMove::new(0, 2));
        assert_eq!(mv, bundle.moves(Score::TIE)[0]);
        assert_ne!(mv, state.possible_next_moves()[0]);
    }
}
