//! Tippy board state and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::pattern::{contains_tippy, winning_moves};
use crate::{
    Error, Result,
    ports::GameState,
    types::{Player, Score},
};

/// Grid size used when none is given
pub const DEFAULT_DIMENSION: usize = 3;

/// A cell on the Tippy grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    P1,
    P2,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::P1 => 'X',
            Cell::P2 => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '0' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::P1),
            'O' | 'o' => Some(Cell::P2),
            _ => None,
        }
    }

    pub fn of(player: Player) -> Cell {
        match player {
            Player::One => Cell::P1,
            Player::Two => Cell::P2,
        }
    }
}

/// Place a mark at `(row, col)`, both 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TippyMove {
    pub row: usize,
    pub col: usize,
}

impl TippyMove {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for TippyMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for TippyMove {
    type Err = Error;

    /// Parse `"row,col"`, optionally parenthesized.
    fn from_str(s: &str) -> Result<Self> {
        let parse_error = |reason: &str| Error::ParseMove {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = inner
            .split_once(',')
            .ok_or_else(|| parse_error("expected 'row,col'"))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| parse_error("row is not a number"))?;
        let col = col
            .trim()
            .parse()
            .map_err(|_| parse_error("column is not a number"))?;
        Ok(Self::new(row, col))
    }
}

/// Position in a game of Tippy on a `dimension x dimension` grid
///
/// Cells are stored row-major. `over` is recomputed on every transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TippyState {
    dimension: usize,
    cells: Vec<Cell>,
    next_player: Player,
    over: bool,
}

impl TippyState {
    /// Empty grid with `first_player` to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `dimension < 3`.
    pub fn new(first_player: Player, dimension: usize) -> Result<Self> {
        if dimension < 3 {
            return Err(Error::InvalidDimension { dimension });
        }
        Ok(Self {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
            next_player: first_player,
            over: false,
        })
    }

    /// Parse a board from rows of `X`, `O` and `.` separated by `/`, with an
    /// optional `_X`/`_O` suffix naming the player to move.
    ///
    /// Without a suffix the player to move is inferred from the mark counts:
    /// equal counts mean `p1` moves, otherwise the player behind moves.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The cell count is not a square of a dimension >= 3
    /// - Any character is not a valid cell representation
    /// - The mark counts differ by more than one
    /// - A provided suffix conflicts with the mark counts
    pub fn from_label(label: &str) -> Result<Self> {
        let cleaned: String = label.chars().filter(|c| !c.is_whitespace()).collect();
        let (board, suffix) = match cleaned.split_once('_') {
            Some((board, suffix)) => (board, Some(suffix)),
            None => (cleaned.as_str(), None),
        };

        let cells = Self::parse_cells(board, label)?;
        let dimension = cells.len().isqrt();
        if dimension < 3 || dimension * dimension != cells.len() {
            return Err(Error::InvalidGridLength {
                got: cells.len(),
                context: label.to_string(),
            });
        }

        let p1_count = cells.iter().filter(|&&c| c == Cell::P1).count();
        let p2_count = cells.iter().filter(|&&c| c == Cell::P2).count();
        let inferred = match p1_count as isize - p2_count as isize {
            0 => None,
            1 => Some(Player::Two),
            -1 => Some(Player::One),
            _ => return Err(Error::InvalidMarkCounts { p1_count, p2_count }),
        };

        let next_player = match (suffix, inferred) {
            (Some(suffix), inferred) => {
                let player: Player = suffix.parse()?;
                if inferred.is_some_and(|p| p != player) {
                    return Err(Error::InvalidConfiguration {
                        message: format!(
                            "invalid board label '{label}': {player} cannot move with p1={p1_count}, p2={p2_count}"
                        ),
                    });
                }
                player
            }
            (None, Some(player)) => player,
            (None, None) => Player::One,
        };

        let mut state = Self {
            dimension,
            cells,
            next_player,
            over: false,
        };
        state.over = state.compute_over();
        Ok(state)
    }

    fn parse_cells(board: &str, context: &str) -> Result<Vec<Cell>> {
        board
            .chars()
            .filter(|&c| c != '/')
            .enumerate()
            .map(|(position, character)| {
                Cell::from_char(character).ok_or_else(|| Error::InvalidCellCharacter {
                    character,
                    position,
                    context: context.to_string(),
                })
            })
            .collect()
    }

    /// Compact label, the inverse of [`TippyState::from_label`]
    pub fn to_label(&self) -> String {
        let rows: Vec<String> = self
            .cells
            .chunks(self.dimension)
            .map(|row| row.iter().map(|c| c.to_char()).collect())
            .collect();
        let turn = Cell::of(self.next_player).to_char();
        format!("{}_{turn}", rows.join("/"))
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.dimension + col]
    }

    /// Count the number of occupied cells on the grid.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.cells.len()
    }

    /// Whether `player` holds a tippy anywhere on the grid
    pub fn has_tippy(&self, player: Player) -> bool {
        contains_tippy(&self.cells, self.dimension, Cell::of(player))
    }

    fn compute_over(&self) -> bool {
        self.is_full() || self.has_tippy(Player::One) || self.has_tippy(Player::Two)
    }

    fn index_of(&self, mv: &TippyMove) -> Option<usize> {
        (mv.row < self.dimension && mv.col < self.dimension)
            .then_some(mv.row * self.dimension + mv.col)
    }
}

impl GameState for TippyState {
    type Move = TippyMove;
    type Key = (Vec<Cell>, Player);

    fn next_player(&self) -> Player {
        self.next_player
    }

    /// Empty cells in row-major order; none once the game is over.
    fn possible_next_moves(&self) -> Vec<TippyMove> {
        if self.over {
            return Vec::new();
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| TippyMove::new(i / self.dimension, i % self.dimension))
            .collect()
    }

    fn apply_move(&self, mv: &TippyMove) -> Result<Self> {
        let illegal = || Error::IllegalMove {
            mv: mv.to_string(),
            state: self.to_label(),
        };
        if self.over {
            return Err(illegal());
        }
        let idx = self.index_of(mv).ok_or_else(illegal)?;
        if self.cells[idx] != Cell::Empty {
            return Err(illegal());
        }

        let mut next = self.clone();
        next.cells[idx] = Cell::of(self.next_player);
        next.next_player = self.next_player.opponent();
        next.over = next.compute_over();
        Ok(next)
    }

    fn is_over(&self) -> bool {
        self.over
    }

    fn winner(&self, player: Player) -> bool {
        self.has_tippy(player)
    }

    fn rough_outcome(&self) -> Score {
        if self.has_tippy(self.opponent()) {
            Score::LOSE
        } else if !self.over
            && !winning_moves(&self.cells, self.dimension, Cell::of(self.next_player)).is_empty()
        {
            Score::WIN
        } else {
            Score::TIE
        }
    }

    fn canonical_key(&self) -> (Vec<Cell>, Player) {
        (self.cells.clone(), self.next_player)
    }
}

impl fmt::Display for TippyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.dimension).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
