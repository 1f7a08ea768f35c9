//! Match pipeline
//!
//! This module provides:
//! - Playing single matches and series between two strategies
//! - Observers for progress, transcripts, metrics and JSONL export

pub mod observers;
pub mod play;

// Re-export observer implementations (adapters)
pub use observers::{
    JsonlObserver, MatchObservation, MetricsObserver, MetricsSummary, MoveObservation,
    ProgressObserver, TranscriptObserver,
};
pub use play::{MatchConfig, MatchRecord, MatchRunner, SeriesResult, outcome_of};

pub use crate::ports::Observer;
