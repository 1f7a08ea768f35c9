//! Observer adapters for match runs
//!
//! Observers collect progress, transcripts and metrics without coupling the
//! match runner to specific output formats.

use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{GameState, Observer},
    types::{MatchOutcome, Player},
};

/// Progress bar observer - Shows series progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    p1_wins: usize,
    p2_wins: usize,
    ties: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            p1_wins: 0,
            p2_wins: 0,
            ties: 0,
        }
    }

    fn tally(&self) -> String {
        format!("p1:{} p2:{} tie:{}", self.p1_wins, self.p2_wins, self.ties)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Observer<S> for ProgressObserver {
    fn on_series_start(&mut self, total_matches: usize) -> Result<()> {
        let pb = ProgressBar::new(total_matches as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} matches ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_match_end(&mut self, match_num: usize, outcome: MatchOutcome) -> Result<()> {
        match outcome {
            MatchOutcome::Win(Player::One) => self.p1_wins += 1,
            MatchOutcome::Win(Player::Two) => self.p2_wins += 1,
            MatchOutcome::Tie => self.ties += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(match_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Transcript observer - Writes every move, and optionally the position
/// after it, as plain text
pub struct TranscriptObserver<W: Write> {
    writer: W,
    show_positions: bool,
}

impl TranscriptObserver<io::Stdout> {
    /// Transcript on standard output
    pub fn stdout(show_positions: bool) -> Self {
        Self::new(io::stdout(), show_positions)
    }
}

impl<W: Write> TranscriptObserver<W> {
    pub fn new(writer: W, show_positions: bool) -> Self {
        Self {
            writer,
            show_positions,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<S, W> Observer<S> for TranscriptObserver<W>
where
    S: GameState + fmt::Display,
    W: Write,
{
    fn on_match_start(&mut self, match_num: usize, initial: &S) -> Result<()> {
        writeln!(
            self.writer,
            "match {}: {} moves first",
            match_num + 1,
            initial.next_player()
        )?;
        if self.show_positions {
            writeln!(self.writer, "{initial}")?;
        }
        Ok(())
    }

    fn on_move(
        &mut self,
        _match_num: usize,
        ply: usize,
        player: Player,
        mv: &S::Move,
        next: &S,
    ) -> Result<()> {
        writeln!(self.writer, "  {:>3}. {player} plays {mv}", ply + 1)?;
        if self.show_positions {
            for line in next.to_string().lines() {
                writeln!(self.writer, "       {line}")?;
            }
        }
        Ok(())
    }

    fn on_match_end(&mut self, _match_num: usize, outcome: MatchOutcome) -> Result<()> {
        writeln!(self.writer, "  result: {outcome}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Metrics observer - Tracks match metrics
pub struct MetricsObserver {
    p1_wins: usize,
    p2_wins: usize,
    ties: usize,
    total_matches: usize,
    move_counts: Vec<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            p1_wins: 0,
            p2_wins: 0,
            ties: 0,
            total_matches: 0,
            move_counts: Vec::new(),
        }
    }

    fn rate(&self, count: usize) -> f64 {
        if self.total_matches == 0 {
            0.0
        } else {
            count as f64 / self.total_matches as f64
        }
    }

    /// Get average match length in plies
    pub fn avg_match_length(&self) -> f64 {
        if self.move_counts.is_empty() {
            0.0
        } else {
            self.move_counts.iter().sum::<usize>() as f64 / self.move_counts.len() as f64
        }
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_matches: self.total_matches,
            p1_wins: self.p1_wins,
            p2_wins: self.p2_wins,
            ties: self.ties,
            p1_win_rate: self.rate(self.p1_wins),
            p2_win_rate: self.rate(self.p2_wins),
            tie_rate: self.rate(self.ties),
            avg_match_length: self.avg_match_length(),
        }
    }
}

/// Summary of match metrics, by seat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_matches: usize,
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub ties: usize,
    pub p1_win_rate: f64,
    pub p2_win_rate: f64,
    pub tie_rate: f64,
    pub avg_match_length: f64,
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Observer<S> for MetricsObserver {
    fn on_match_start(&mut self, _match_num: usize, _initial: &S) -> Result<()> {
        self.move_counts.push(0);
        Ok(())
    }

    fn on_move(
        &mut self,
        _match_num: usize,
        _ply: usize,
        _player: Player,
        _mv: &S::Move,
        _next: &S,
    ) -> Result<()> {
        if let Some(last) = self.move_counts.last_mut() {
            *last += 1;
        }
        Ok(())
    }

    fn on_match_end(&mut self, _match_num: usize, outcome: MatchOutcome) -> Result<()> {
        self.total_matches += 1;
        match outcome {
            MatchOutcome::Win(Player::One) => self.p1_wins += 1,
            MatchOutcome::Win(Player::Two) => self.p2_wins += 1,
            MatchOutcome::Tie => self.ties += 1,
        }
        Ok(())
    }
}

/// One match as written by [`JsonlObserver`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchObservation {
    pub match_num: usize,
    pub outcome: MatchOutcome,
    pub moves: Vec<MoveObservation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveObservation {
    pub ply: usize,
    pub player: Player,
    #[serde(rename = "move")]
    pub mv: String,
}

/// JSONL observer - Exports one JSON object per finished match
pub struct JsonlObserver {
    writer: BufWriter<File>,
    current: Vec<MoveObservation>,
}

impl JsonlObserver {
    /// Create a new JSONL observer
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            current: Vec::new(),
        })
    }
}

impl<S: GameState> Observer<S> for JsonlObserver {
    fn on_match_start(&mut self, _match_num: usize, _initial: &S) -> Result<()> {
        self.current.clear();
        Ok(())
    }

    fn on_move(
        &mut self,
        _match_num: usize,
        ply: usize,
        player: Player,
        mv: &S::Move,
        _next: &S,
    ) -> Result<()> {
        self.current.push(MoveObservation {
            ply,
            player,
            mv: mv.to_string(),
        });
        Ok(())
    }

    fn on_match_end(&mut self, match_num: usize, outcome: MatchOutcome) -> Result<()> {
        let observation = MatchObservation {
            match_num,
            outcome,
            moves: std::mem::take(&mut self.current),
        };

        serde_json::to_writer(&mut self.writer, &observation)?;
        writeln!(&mut self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtract_square::{SubtractSquareMove, SubtractSquareState};

    type Sub = SubtractSquareState;

    #[test]
    fn test_metrics_observer() {
        let mut observer = MetricsObserver::new();
        assert_eq!(observer.summary().p1_win_rate, 0.0);

        let initial = Sub::new(Player::One, 2);
        Observer::<Sub>::on_match_start(&mut observer, 0, &initial).unwrap();
        for ply in 0..2 {
            Observer::<Sub>::on_move(
                &mut observer,
                0,
                ply,
                Player::One,
                &SubtractSquareMove::new(1),
                &initial,
            )
            .unwrap();
        }
        Observer::<Sub>::on_match_end(&mut observer, 0, MatchOutcome::Win(Player::Two)).unwrap();
        Observer::<Sub>::on_match_end(&mut observer, 1, MatchOutcome::Tie).unwrap();

        let summary = observer.summary();
        assert_eq!(summary.total_matches, 2);
        assert_eq!(summary.p2_wins, 1);
        assert_eq!(summary.ties, 1);
        assert!((summary.p2_win_rate - 0.5).abs() < f64::EPSILON);
        assert!((summary.avg_match_length - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_transcript_observer() {
        let mut observer = TranscriptObserver::new(Vec::new(), false);
        let initial = Sub::new(Player::One, 4);
        let next = Sub::new(Player::Two, 0);

        observer.on_match_start(0, &initial).unwrap();
        Observer::<Sub>::on_move(
            &mut observer,
            0,
            0,
            Player::One,
            &SubtractSquareMove::new(4),
            &next,
        )
        .unwrap();
        Observer::<Sub>::on_match_end(&mut observer, 0, MatchOutcome::Win(Player::One)).unwrap();

        let text = String::from_utf8(observer.into_inner()).unwrap();
        assert!(text.contains("match 1: p1 moves first"));
        assert!(text.contains("1. p1 plays -4"));
        assert!(text.contains("result: p1 wins"));
    }
}
