//! Negamax search over two-player, zero-sum, perfect-information games
//!
//! This crate provides:
//! - A game-state abstraction ([`ports::GameState`]) that games implement
//! - Four negamax engines: exhaustive, memoized, pruned and depth-bounded
//! - Two games: Subtract-Square and Tippy
//! - A match runner with observers for transcripts, progress and metrics
//! - A command-line front end
//!
//! # Examples
//!
//! ```
//! use negamax::{
//!     ports::{Evaluator, Strategy},
//!     strategy::Memoize,
//!     tippy::{TippyMove, TippyState},
//!     Score,
//! };
//!
//! // p1 to move can complete a tippy at the top-left corner.
//! let state = TippyState::from_label(".XO/OXX/O.._X")?;
//! let mut engine = Memoize::new();
//! assert_eq!(engine.score(&state)?, Score::WIN);
//! assert_eq!(engine.suggest_move(&state)?, TippyMove::new(0, 0));
//! # Ok::<(), negamax::Error>(())
//! ```

pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod strategy;
pub mod subtract_square;
pub mod tippy;
pub mod types;

pub use error::{Error, Result};
pub use types::{MatchOutcome, Player, Score};
