//! Subtract-Square scenarios across engines

use negamax::{
    Player, Score,
    ports::{Evaluator, GameState, Strategy},
    strategy::{Memoize, Minimax, Myopic, Prune},
    subtract_square::{SubtractSquareMove, SubtractSquareState},
};

/// Totals up to 40 from which the player to move loses under best play
const LOSING_TOTALS: [u32; 12] = [0, 2, 5, 7, 10, 12, 15, 17, 20, 22, 34, 39];

#[test]
fn test_memoized_engine_finds_losing_totals() {
    let mut memoize = Memoize::new();
    for total in 0..=40 {
        let state = SubtractSquareState::new(Player::One, total);
        let expected = if LOSING_TOTALS.contains(&total) {
            Score::LOSE
        } else {
            Score::WIN
        };
        assert_eq!(memoize.score(&state).unwrap(), expected, "total {total}");
    }
}

#[test]
fn test_pruned_engine_matches_memoized_on_larger_totals() {
    let mut memoize = Memoize::new();
    for total in [25, 30, 34, 39] {
        let state = SubtractSquareState::new(Player::Two, total);
        assert_eq!(
            Prune::new().score(&state).unwrap(),
            memoize.score(&state).unwrap(),
            "total {total}"
        );
    }
}

#[test]
fn test_every_exact_engine_takes_the_immediate_win() {
    let state = SubtractSquareState::new(Player::One, 4);
    let mut engines: Vec<Box<dyn Strategy<SubtractSquareState>>> = vec![
        Box::new(Minimax::new()),
        Box::new(Memoize::<SubtractSquareState>::new()),
        Box::new(Prune::new()),
        Box::new(Myopic::new()),
    ];
    for engine in &mut engines {
        assert_eq!(
            engine.suggest_move(&state).unwrap(),
            SubtractSquareMove::new(4),
            "{}",
            engine.name()
        );
    }
}

#[test]
fn test_short_games_by_hand() {
    let mut minimax = Minimax::new();
    // 3 -> 2 -> 1 -> 0: the mover makes the last move.
    assert_eq!(
        minimax.score(&SubtractSquareState::new(Player::One, 3)).unwrap(),
        Score::WIN
    );
    // 2 -> 1 -> 0: the opponent makes the last move.
    assert_eq!(
        minimax.score(&SubtractSquareState::new(Player::One, 2)).unwrap(),
        Score::LOSE
    );
}

#[test]
fn test_myopic_bundle_on_one_hundred() {
    let mut myopic = Myopic::with_lookahead(1).unwrap();
    let state = SubtractSquareState::new(Player::One, 100);
    let bundle = myopic.bundle_score(&state).unwrap();

    assert_eq!(
        bundle.moves(Score::LOSE),
        &[SubtractSquareMove::new(36), SubtractSquareMove::new(64)]
    );
    assert_eq!(bundle.moves(Score::WIN), &[SubtractSquareMove::new(100)]);
    assert_eq!(bundle.len(), state.possible_next_moves().len());
    assert_eq!(
        myopic.suggest_move(&state).unwrap(),
        SubtractSquareMove::new(100)
    );
}

#[test]
fn test_memo_table_is_bounded_by_distinct_states() {
    let mut memoize = Memoize::new();
    let state = SubtractSquareState::new(Player::One, 500);
    memoize.score(&state).unwrap();
    assert!(memoize.memo_len() <= 2 * 501);
    assert!(memoize.stats().cache_hits > 0);
}

#[test]
fn test_losing_position_still_gets_a_move() {
    let state = SubtractSquareState::new(Player::One, 20);
    for mut engine in [
        Box::new(Minimax::new()) as Box<dyn Strategy<SubtractSquareState>>,
        Box::new(Prune::new()),
    ] {
        let mv = engine.suggest_move(&state).unwrap();
        assert!(state.possible_next_moves().contains(&mv));
    }
}
