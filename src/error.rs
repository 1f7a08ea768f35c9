//! Error types for the negamax crate

use thiserror::Error;

/// Main error type for the negamax crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move {mv} in state '{state}'")]
    IllegalMove { mv: String, state: String },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("non-terminal state '{state}' has no available actions")]
    NoActionsAvailable { state: String },

    #[error("legal move from possible_next_moves() failed unexpectedly: {message}")]
    LegalMoveFailed { message: String },

    #[error("score {value} is outside [-1.0, 1.0]")]
    ScoreOutOfRange { value: f64 },

    #[error("grid dimension {dimension} is too small (must be at least 3)")]
    InvalidDimension { dimension: usize },

    #[error("grid string has {got} cells, which is not a square of a dimension >= 3, in '{context}'")]
    InvalidGridLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid mark counts: p1={p1_count}, p2={p2_count} (must differ by at most 1)")]
    InvalidMarkCounts { p1_count: usize, p2_count: usize },

    #[error("invalid player '{player}' (expected 'p1' or 'p2')")]
    InvalidPlayerString { player: String },

    #[error("invalid move '{input}': {reason}")]
    ParseMove { input: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
