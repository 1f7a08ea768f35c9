//! Configuration types for engine creation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, strategy::DEFAULT_LOOKAHEAD};

/// Which move-selection engine to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Exhaustive negamax
    Minimax,
    /// Negamax with a transposition cache
    Memoize,
    /// Negamax with single-bound pruning
    Prune,
    /// Depth-bounded negamax with a heuristic past the horizon
    Myopic,
    /// Uniformly random legal moves
    Random,
}

impl EngineKind {
    /// Whether the engine exposes scores (every kind except `Random`)
    pub fn is_evaluator(self) -> bool {
        !matches!(self, EngineKind::Random)
    }

    pub fn default_name(self) -> &'static str {
        match self {
            EngineKind::Minimax => "Minimax",
            EngineKind::Memoize => "Memoize",
            EngineKind::Prune => "Prune",
            EngineKind::Myopic => "Myopic",
            EngineKind::Random => "Random",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

/// Configuration for creating an engine.
///
/// # Examples
///
/// ```
/// use negamax::app::{EngineConfig, EngineKind};
///
/// let config = EngineConfig::new(EngineKind::Myopic)
///     .with_lookahead(2)
///     .with_name("Shallow");
/// assert_eq!(config.name(), "Shallow");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub kind: EngineKind,
    /// Display name; defaults to the kind's name
    pub name: Option<String>,
    /// Myopic search horizon
    pub lookahead: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Create a configuration with the default lookahead and no seed.
    pub fn new(kind: EngineKind) -> Self {
        Self {
            kind,
            name: None,
            lookahead: DEFAULT_LOOKAHEAD,
            seed: None,
        }
    }

    /// Set the myopic lookahead.
    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.kind.default_name())
    }

    /// Check the configuration before any engine is built.
    pub fn validate(&self) -> Result<()> {
        if self.kind == EngineKind::Myopic && self.lookahead == 0 {
            return Err(Error::InvalidConfiguration {
                message: "myopic lookahead must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(EngineKind::Memoize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.kind, EngineKind::Memoize);
        assert_eq!(config.name(), "Memoize");
        assert_eq!(config.lookahead, DEFAULT_LOOKAHEAD);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_rejects_zero_lookahead() {
        let config = EngineConfig::new(EngineKind::Myopic).with_lookahead(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
        // Lookahead only matters to the myopic engine.
        assert!(EngineConfig::new(EngineKind::Prune).with_lookahead(0).validate().is_ok());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&EngineKind::Prune).unwrap();
        assert_eq!(json, "\"prune\"");
        assert!(!EngineKind::Random.is_evaluator());
    }
}
