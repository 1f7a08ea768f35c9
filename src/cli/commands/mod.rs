//! CLI subcommands
//!
//! Each command parses its own arguments, builds the starting position for
//! the selected game and dispatches to a handler generic over the game.

pub mod compare;
pub mod play;
pub mod score;
pub mod suggest;
