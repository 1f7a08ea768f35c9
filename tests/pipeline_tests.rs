//! Tests for the match pipeline

use std::{
    fs,
    io::{BufRead, BufReader},
};

use negamax::{
    MatchOutcome, Player,
    pipeline::{
        JsonlObserver, MatchConfig, MatchObservation, MatchRunner, SeriesResult, outcome_of,
    },
    ports::GameState,
    strategy::{Memoize, Myopic, Prune, RandomStrategy},
    subtract_square::SubtractSquareState,
    tippy::TippyState,
};
use tempfile::tempdir;

/// Random vs random on Tippy always finishes within the grid size
#[test]
fn test_random_series_terminates() {
    let config = MatchConfig {
        num_matches: 30,
        seed: Some(42),
        swap_sides: true,
    };
    let mut runner = MatchRunner::new(config);
    let mut a = RandomStrategy::new("Random-1");
    let mut b = RandomStrategy::new("Random-2");
    let initial = TippyState::new(Player::One, 3).unwrap();

    let result = runner.play_series(&initial, &mut a, &mut b).unwrap();

    assert_eq!(result.total_matches, 30);
    assert_eq!(result.a_wins + result.b_wins + result.ties, 30);
    assert!(result.a_win_rate >= 0.0 && result.a_win_rate <= 1.0);
    for record in &result.matches {
        assert!(record.plies() <= 9);
        assert!(record.plies() >= 7, "no tippy fits in fewer than 7 plies");
    }
}

#[test]
fn test_seeded_series_is_reproducible() {
    let initial = TippyState::new(Player::One, 4).unwrap();
    let play = || {
        let config = MatchConfig {
            num_matches: 5,
            seed: Some(7),
            swap_sides: true,
        };
        let mut a = RandomStrategy::new("A");
        let mut b = RandomStrategy::new("B");
        MatchRunner::new(config)
            .play_series(&initial, &mut a, &mut b)
            .unwrap()
    };

    let first = play();
    let second = play();
    for (x, y) in first.matches.iter().zip(&second.matches) {
        assert_eq!(x.moves, y.moves);
        assert_eq!(x.outcome, y.outcome);
    }
}

/// The first player wins 3x3 Tippy, so perfect play on p1 never drops a game
#[test]
fn test_memoized_first_player_beats_random() {
    let config = MatchConfig {
        num_matches: 10,
        seed: Some(3),
        swap_sides: false,
    };
    let mut runner = MatchRunner::new(config);
    let mut engine = Memoize::<TippyState>::new();
    let mut random = RandomStrategy::new("Random");
    let initial = TippyState::new(Player::One, 3).unwrap();

    let result = runner
        .play_series(&initial, &mut engine, &mut random)
        .unwrap();
    assert_eq!(result.a_wins, 10);
    assert!(
        result
            .matches
            .iter()
            .all(|m| m.outcome == MatchOutcome::Win(Player::One))
    );
}

#[test]
fn test_winning_total_is_converted() {
    let mut runner = MatchRunner::new(MatchConfig::default());
    let mut prune = Prune::new();
    let mut myopic = Myopic::new();

    // 21 is a win for the player to move.
    let record = runner
        .play(SubtractSquareState::new(Player::Two, 21), &mut myopic, &mut prune)
        .unwrap();
    assert_eq!(record.first_player, Player::Two);
    assert_eq!(record.p2, "Prune");
    assert_eq!(record.outcome, MatchOutcome::Win(Player::Two));
}

#[test]
fn test_outcome_of_finished_states() {
    let win = TippyState::from_label("XXO/OXX/..O").unwrap();
    assert_eq!(outcome_of(&win), MatchOutcome::Win(Player::One));

    let tie = TippyState::from_label("XOX/XOX/OXO").unwrap();
    assert!(tie.is_over());
    assert_eq!(outcome_of(&tie), MatchOutcome::Tie);
}

#[test]
fn test_series_result_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("series.json");

    let config = MatchConfig {
        num_matches: 4,
        seed: Some(1),
        swap_sides: true,
    };
    let mut a = Prune::new();
    let mut b = RandomStrategy::new("Random");
    let result = MatchRunner::new(config)
        .play_series(&SubtractSquareState::new(Player::One, 30), &mut a, &mut b)
        .unwrap();
    result.save(&path).unwrap();

    let loaded = SeriesResult::load(&path).unwrap();
    assert_eq!(loaded.strategy_a, "Prune");
    assert_eq!(loaded.total_matches, 4);
    assert_eq!(loaded.a_wins, result.a_wins);
    assert_eq!(loaded.matches.len(), 4);
    assert_eq!(loaded.matches[2].moves, result.matches[2].moves);
}

#[test]
fn test_jsonl_observer_writes_one_line_per_match() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("matches.jsonl");

    let config = MatchConfig {
        num_matches: 3,
        seed: Some(9),
        swap_sides: true,
    };
    let mut runner = MatchRunner::new(config)
        .with_observer(Box::new(JsonlObserver::new(&path).unwrap()));
    let mut a = RandomStrategy::new("A");
    let mut b = RandomStrategy::new("B");
    let result = runner
        .play_series(&TippyState::new(Player::One, 3).unwrap(), &mut a, &mut b)
        .unwrap();
    drop(runner);

    let file = fs::File::open(&path).unwrap();
    let observations: Vec<MatchObservation> = BufReader::new(file)
        .lines()
        .map(|line| serde_json::from_str(&line.unwrap()).unwrap())
        .collect();

    assert_eq!(observations.len(), 3);
    for (observation, record) in observations.iter().zip(&result.matches) {
        assert_eq!(observation.match_num, record.match_num);
        assert_eq!(observation.outcome, record.outcome);
        assert_eq!(observation.moves.len(), record.plies());
        assert_eq!(observation.moves[0].ply, 0);
    }
}
