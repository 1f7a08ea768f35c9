//! Newtype wrappers for scores and player identities.

use std::{cmp::Ordering, fmt, hash, ops::Neg, str::FromStr};

use serde::{Deserialize, Serialize};

/// Minimax score from the perspective of the player about to move.
///
/// Scores live in `[Score::LOSE, Score::WIN]`. The canonical values are
/// `-1.0`, `0.0` and `1.0`; heuristic estimates may land in between.
///
/// Negative zero is folded into zero on construction and negation, so
/// `-Score::TIE == Score::TIE` and both hash identically. Together with the
/// NaN check in [`Score::new`] this gives a total order, which lets scores
/// key the buckets of a [`ScoreBundle`](crate::strategy::ScoreBundle).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// The player to move is guaranteed to win.
    pub const WIN: Score = Score(1.0);
    /// Neither player can force a win.
    pub const TIE: Score = Score(0.0);
    /// The opponent is guaranteed to win.
    pub const LOSE: Score = Score(-1.0);

    /// Create a new score, validating it lies in `[LOSE, WIN]`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ScoreOutOfRange`] for NaN or out-of-range values.
    pub fn new(value: f64) -> Result<Self, crate::Error> {
        if (Self::LOSE.0..=Self::WIN.0).contains(&value) {
            Ok(Score(value + 0.0))
        } else {
            Err(crate::Error::ScoreOutOfRange { value })
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }

    pub fn is_tie(&self) -> bool {
        *self == Self::TIE
    }

    pub fn is_loss(&self) -> bool {
        *self == Self::LOSE
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        Score(-self.0 + 0.0)
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl hash::Hash for Score {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl TryFrom<f64> for Score {
    type Error = crate::Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// One of the two players of a zero-sum game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "p1")]
    One,
    #[serde(rename = "p2")]
    Two,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::One => "p1",
            Player::Two => "p2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p1" | "1" | "x" => Ok(Player::One),
            "p2" | "2" | "o" => Ok(Player::Two),
            _ => Err(crate::Error::InvalidPlayerString {
                player: s.to_string(),
            }),
        }
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win(Player),
    Tie,
}

impl MatchOutcome {
    /// Score of this outcome for `player`.
    pub fn score_for(self, player: Player) -> Score {
        match self {
            MatchOutcome::Win(winner) if winner == player => Score::WIN,
            MatchOutcome::Win(_) => Score::LOSE,
            MatchOutcome::Tie => Score::TIE,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Win(player) => write!(f, "{player} wins"),
            MatchOutcome::Tie => f.write_str("tie"),
        }
    }
}
