//! Shared configuration types for CLI commands

use std::fmt;

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    app::{EngineConfig, EngineKind},
    strategy::DEFAULT_LOOKAHEAD,
    subtract_square::SubtractSquareState,
    tippy::{DEFAULT_DIMENSION, TippyState},
    types::Player,
};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
            verbose: false,
        }
    }
}

/// Which game a command operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    SubtractSquare,
    Tippy,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameKind::SubtractSquare => f.write_str("subtract-square"),
            GameKind::Tippy => f.write_str("tippy"),
        }
    }
}

/// Starting position flags shared by every command
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct GameArgs {
    /// Game to play
    #[arg(long, value_enum, default_value_t = GameKind::SubtractSquare)]
    pub game: GameKind,

    /// Starting total (subtract-square)
    #[arg(long, default_value_t = 20)]
    pub total: u32,

    /// Grid dimension for an empty board (tippy)
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    pub dimension: usize,

    /// Board label such as "X.O/.../..._X" (tippy); overrides --dimension
    #[arg(long)]
    pub position: Option<String>,

    /// Player to move first (`p1` or `p2`); ignored when --position is given
    #[arg(long = "first-player", default_value = "p1")]
    pub first_player: Player,
}

impl Default for GameArgs {
    fn default() -> Self {
        Self {
            game: GameKind::SubtractSquare,
            total: 20,
            dimension: DEFAULT_DIMENSION,
            position: None,
            first_player: Player::One,
        }
    }
}

/// A starting position for one of the supported games
#[derive(Debug, Clone)]
pub enum Position {
    SubtractSquare(SubtractSquareState),
    Tippy(TippyState),
}

impl GameArgs {
    /// Build the starting position these flags describe.
    pub fn initial_position(&self) -> Result<Position> {
        match self.game {
            GameKind::SubtractSquare => Ok(Position::SubtractSquare(SubtractSquareState::new(
                self.first_player,
                self.total,
            ))),
            GameKind::Tippy => {
                let state = match &self.position {
                    Some(label) => TippyState::from_label(label)?,
                    None => TippyState::new(self.first_player, self.dimension)?,
                };
                Ok(Position::Tippy(state))
            }
        }
    }
}

/// Engine selection flags
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct EngineArgs {
    /// Search engine
    #[arg(long, short = 'e', value_enum, default_value_t = EngineKind::Memoize)]
    pub engine: EngineKind,

    /// Horizon for the myopic engine
    #[arg(long, default_value_t = DEFAULT_LOOKAHEAD)]
    pub lookahead: usize,
}

impl EngineArgs {
    pub fn to_config(&self, seed: Option<u64>) -> EngineConfig {
        let config = EngineConfig::new(self.engine).with_lookahead(self.lookahead);
        match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::GameState;

    #[test]
    fn test_default_position_is_subtract_square() {
        let position = GameArgs::default().initial_position().unwrap();
        match position {
            Position::SubtractSquare(state) => {
                assert_eq!(state.current_total, 20);
                assert_eq!(state.next_player(), Player::One);
            }
            Position::Tippy(_) => panic!("expected subtract-square"),
        }
    }

    #[test]
    fn test_tippy_label_overrides_dimension() {
        let args = GameArgs {
            game: GameKind::Tippy,
            dimension: 5,
            position: Some("X../.../...".to_string()),
            ..GameArgs::default()
        };
        match args.initial_position().unwrap() {
            Position::Tippy(state) => {
                assert_eq!(state.dimension(), 3);
                assert_eq!(state.next_player(), Player::Two);
            }
            Position::SubtractSquare(_) => panic!("expected tippy"),
        }
    }

    #[test]
    fn test_small_tippy_grid_is_rejected() {
        let args = GameArgs {
            game: GameKind::Tippy,
            dimension: 2,
            ..GameArgs::default()
        };
        assert!(args.initial_position().is_err());
    }
}
