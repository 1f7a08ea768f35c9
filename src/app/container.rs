//! Engine factory for the application layer.
//!
//! The container turns an [`EngineConfig`] into a boxed strategy or evaluator
//! so callers (the CLI, match series) stay independent of concrete engine
//! types.

use super::config::{EngineConfig, EngineKind};
use crate::{
    Error, Result,
    ports::{Evaluator, GameState, Strategy},
    strategy::{Memoize, Minimax, Myopic, Prune, RandomStrategy},
};

/// Application with engine factories.
///
/// # Examples
///
/// ```
/// use negamax::{
///     app::{App, EngineConfig, EngineKind},
///     subtract_square::{SubtractSquareMove, SubtractSquareState},
///     types::Player,
/// };
///
/// let app = App::new();
/// let mut engine = app.create_evaluator::<SubtractSquareState>(&EngineConfig::new(EngineKind::Prune))?;
///
/// let state = SubtractSquareState::new(Player::One, 4);
/// assert_eq!(engine.suggest_move(&state)?, SubtractSquareMove::new(4));
/// # Ok::<(), negamax::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct App {
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with no default seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a default random seed for every strategy created by this app.
    ///
    /// Useful for creating deterministic tests.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build any engine, random baseline included.
    pub fn create_strategy<S: GameState + 'static>(
        &self,
        config: &EngineConfig,
    ) -> Result<Box<dyn Strategy<S>>> {
        config.validate()?;
        let name = config.name().to_string();
        let strategy: Box<dyn Strategy<S>> = match config.kind {
            EngineKind::Random => {
                // Apply seed from config or use app default
                match config.seed.or(self.default_seed) {
                    Some(seed) => Box::new(RandomStrategy::with_seed(name, seed)),
                    None => Box::new(RandomStrategy::new(name)),
                }
            }
            EngineKind::Minimax => Box::new(Minimax::with_name(name)),
            EngineKind::Memoize => Box::new(Memoize::<S>::with_name(name)),
            EngineKind::Prune => Box::new(Prune::with_name(name)),
            EngineKind::Myopic => Box::new(Myopic::with_lookahead(config.lookahead)?.with_name(name)),
        };
        Ok(strategy)
    }

    /// Build a scoring engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for [`EngineKind::Random`],
    /// which has no scores to report.
    pub fn create_evaluator<S: GameState + 'static>(
        &self,
        config: &EngineConfig,
    ) -> Result<Box<dyn Evaluator<S>>> {
        config.validate()?;
        let name = config.name().to_string();
        let evaluator: Box<dyn Evaluator<S>> = match config.kind {
            EngineKind::Minimax => Box::new(Minimax::with_name(name)),
            EngineKind::Memoize => Box::new(Memoize::<S>::with_name(name)),
            EngineKind::Prune => Box::new(Prune::with_name(name)),
            EngineKind::Myopic => Box::new(Myopic::with_lookahead(config.lookahead)?.with_name(name)),
            EngineKind::Random => {
                return Err(Error::InvalidConfiguration {
                    message: "the random strategy does not score positions".to_string(),
                });
            }
        };
        Ok(evaluator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{subtract_square::SubtractSquareState, types::Player};

    #[test]
    fn test_app_creates_every_strategy() {
        let app = App::new();
        let state = SubtractSquareState::new(Player::One, 10);
        for kind in [
            EngineKind::Minimax,
            EngineKind::Memoize,
            EngineKind::Prune,
            EngineKind::Myopic,
            EngineKind::Random,
        ] {
            let mut strategy = app
                .create_strategy::<SubtractSquareState>(&EngineConfig::new(kind))
                .unwrap();
            assert_eq!(strategy.name(), kind.default_name());
            let mv = strategy.suggest_move(&state).unwrap();
            assert!(state.possible_next_moves().contains(&mv));
        }
    }

    #[test]
    fn test_random_is_not_an_evaluator() {
        let app = App::new();
        let result = app.create_evaluator::<SubtractSquareState>(&EngineConfig::new(EngineKind::Random));
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_app_default_seed_is_deterministic() {
        let app = App::new().with_default_seed(42);
        let config = EngineConfig::new(EngineKind::Random);
        let state = SubtractSquareState::new(Player::One, 99);

        let mut a = app.create_strategy::<SubtractSquareState>(&config).unwrap();
        let mut b = app.create_strategy::<SubtractSquareState>(&config).unwrap();
        for _ in 0..5 {
            assert_eq!(
                a.suggest_move(&state).unwrap(),
                b.suggest_move(&state).unwrap()
            );
        }
    }

    #[test]
    fn test_evaluator_uses_configured_lookahead() {
        let app = App::new();
        let config = EngineConfig::new(EngineKind::Myopic).with_lookahead(0);
        assert!(app.create_evaluator::<SubtractSquareState>(&config).is_err());
    }
}
