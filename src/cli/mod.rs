//! CLI infrastructure for the negamax toolkit
//!
//! This module provides the command-line interface for scoring positions,
//! suggesting moves, and playing or comparing engines.

pub mod commands;
pub mod config;
pub mod output;
