//! Ports (trait boundaries) between the search core and its collaborators.
//!
//! Games plug in through [`GameState`], strategies through [`Strategy`] and
//! [`Evaluator`], and reporting through [`Observer`]. Engines, games and
//! observers are adapters that implement these traits.

pub mod game_state;
pub mod observer;
pub mod strategy;

pub use game_state::GameState;
pub use observer::Observer;
pub use strategy::{Evaluator, Strategy};
