//! Subtract-Square: players alternately remove a positive perfect square from
//! a shared total. The player left facing zero cannot move and loses.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, ports::GameState, types::Player, types::Score};

/// Subtract `amount` (a positive perfect square) from the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtractSquareMove {
    pub amount: u32,
}

impl SubtractSquareMove {
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }
}

impl fmt::Display for SubtractSquareMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.amount)
    }
}

impl FromStr for SubtractSquareMove {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('-');
        let amount = trimmed.parse::<u32>().map_err(|e| Error::ParseMove {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(amount))
    }
}

/// Position in a game of Subtract-Square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtractSquareState {
    pub current_total: u32,
    pub next_player: Player,
}

impl SubtractSquareState {
    pub fn new(next_player: Player, current_total: u32) -> Self {
        Self {
            current_total,
            next_player,
        }
    }

    fn is_square(n: u32) -> bool {
        let root = n.isqrt();
        root * root == n
    }

    fn is_legal(&self, mv: &SubtractSquareMove) -> bool {
        mv.amount > 0 && mv.amount <= self.current_total && Self::is_square(mv.amount)
    }
}

impl GameState for SubtractSquareState {
    type Move = SubtractSquareMove;
    type Key = (u32, Player);

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn possible_next_moves(&self) -> Vec<SubtractSquareMove> {
        (1..=self.current_total.isqrt())
            .map(|root| SubtractSquareMove::new(root * root))
            .collect()
    }

    fn apply_move(&self, mv: &SubtractSquareMove) -> Result<Self> {
        if !self.is_legal(mv) {
            return Err(Error::IllegalMove {
                mv: mv.to_string(),
                state: self.to_string(),
            });
        }
        Ok(Self::new(self.next_player.opponent(), self.current_total - mv.amount))
    }

    fn is_over(&self) -> bool {
        self.current_total == 0
    }

    fn winner(&self, player: Player) -> bool {
        self.is_over() && player == self.next_player.opponent()
    }

    fn rough_outcome(&self) -> Score {
        if self.is_over() {
            return Score::LOSE;
        }
        if Self::is_square(self.current_total) {
            return Score::WIN;
        }
        let every_reply_wins = self
            .possible_next_moves()
            .iter()
            .all(|mv| Self::is_square(self.current_total - mv.amount));
        if every_reply_wins {
            Score::LOSE
        } else {
            Score::TIE
        }
    }

    fn canonical_key(&self) -> (u32, Player) {
        (self.current_total, self.next_player)
    }
}

impl fmt::Display for SubtractSquareState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "total {} ({} to move)", self.current_total, self.next_player)
    }
}
