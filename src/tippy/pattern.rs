//! Tippy detection over a square grid
//!
//! A type-1 tippy occupies `(i, j) (i, j+1) (i+1, j+1) (i+1, j+2)`. Every
//! other orientation of the shape is a type-1 tippy in one of the grid's
//! transpose, horizontal reflection, or reflected transpose, so detection
//! scans those four views instead of enumerating shapes.

use serde::{Deserialize, Serialize};

use super::board::Cell;

/// Offsets of a type-1 tippy relative to its top-left cell
const TYPE1_OFFSETS: [(usize, usize); 4] = [(0, 0), (0, 1), (1, 1), (1, 2)];

/// View of an `n x n` grid under one of the transforms that expose every
/// tippy orientation as type 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridTransform {
    Identity,
    Transpose,
    Reflect,
    ReflectTranspose,
}

impl GridTransform {
    pub fn all() -> [GridTransform; 4] {
        [
            GridTransform::Identity,
            GridTransform::Transpose,
            GridTransform::Reflect,
            GridTransform::ReflectTranspose,
        ]
    }

    /// Map a `(row, col)` of the transformed view back to the original grid.
    ///
    /// Requires `dimension >= 1`.
    pub(crate) fn source(self, dimension: usize, row: usize, col: usize) -> (usize, usize) {
        let last = dimension - 1;
        match self {
            GridTransform::Identity => (row, col),
            GridTransform::Transpose => (col, row),
            GridTransform::Reflect => (row, last - col),
            GridTransform::ReflectTranspose => (last - col, row),
        }
    }

    /// Row-major index into the original grid
    pub(crate) fn source_index(self, dimension: usize, row: usize, col: usize) -> usize {
        let (r, c) = self.source(dimension, row, col);
        r * dimension + c
    }
}

/// Whether the view of `cells` under `transform` holds a type-1 tippy of `mark`.
pub fn has_type1_tippy(cells: &[Cell], dimension: usize, mark: Cell, transform: GridTransform) -> bool {
    if dimension < 3 {
        return false;
    }
    (0..dimension - 1).any(|i| {
        (0..dimension - 2).any(|j| {
            TYPE1_OFFSETS.iter().all(|&(di, dj)| {
                cells[transform.source_index(dimension, i + di, j + dj)] == mark
            })
        })
    })
}

/// Whether `cells` contains a tippy of `mark` in any orientation.
pub fn contains_tippy(cells: &[Cell], dimension: usize, mark: Cell) -> bool {
    GridTransform::all()
        .into_iter()
        .any(|transform| has_type1_tippy(cells, dimension, mark, transform))
}

/// Empty positions where placing `mark` completes a tippy for it.
pub fn winning_moves(cells: &[Cell], dimension: usize, mark: Cell) -> Vec<usize> {
    let mut scratch = cells.to_vec();
    let mut result = Vec::new();
    for pos in 0..cells.len() {
        if cells[pos] != Cell::Empty {
            continue;
        }
        scratch[pos] = mark;
        if contains_tippy(&scratch, dimension, mark) {
            result.push(pos);
        }
        scratch[pos] = Cell::Empty;
    }
    result
}
