//! Common test utilities for the negamax test suite.

use negamax::ports::GameState;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Play up to `plies` uniformly random moves from `state`.
///
/// Stops early if the game ends.
pub fn random_playout<S: GameState>(mut state: S, plies: usize, rng: &mut StdRng) -> S {
    for _ in 0..plies {
        let moves = state.possible_next_moves();
        let Some(mv) = moves.choose(rng) else {
            break;
        };
        state = state.apply_move(mv).unwrap();
    }
    state
}

/// Deterministic RNG for a test case
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
