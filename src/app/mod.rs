//! Application layer: engine configuration and construction.
//!
//! ```text
//!   EngineConfig ──► App::create_strategy / create_evaluator
//!                         │
//!                         ▼
//!        Box<dyn Strategy<S>> / Box<dyn Evaluator<S>>   (ports)
//!                         │ implemented by
//!                         ▼
//!        Minimax, Memoize, Prune, Myopic, RandomStrategy (strategy)
//! ```

pub mod config;
pub mod container;

pub use config::{EngineConfig, EngineKind};
pub use container::App;
