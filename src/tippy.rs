//! Tippy: a placement game on an N x N grid won by forming a Z/S tetromino

pub mod board;
pub mod pattern;

pub use board::{Cell, DEFAULT_DIMENSION, TippyMove, TippyState};
pub use pattern::{GridTransform, contains_tippy, winning_moves};
