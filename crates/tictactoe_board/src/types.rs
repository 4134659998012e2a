//! Core domain types for the board.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// Mark of the first player.
    #[strum(serialize = "x")]
    X,
    /// Mark of the second player.
    #[strum(serialize = "o")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns true if no mark has been placed in this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Zero-based grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({}, {})", row, col)]
pub struct Coords {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coords {
    /// Creates coordinates from a row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Maps a 1-based box number (left to right, top to bottom) onto a
    /// board of the given dimension.
    ///
    /// Returns `None` when the number falls outside `1..=dimension²`.
    pub fn from_box_number(choice: usize, dimension: usize) -> Option<Self> {
        if choice == 0 || dimension == 0 || choice > dimension.checked_mul(dimension)? {
            return None;
        }
        Some(Self {
            row: (choice - 1) / dimension,
            col: (choice - 1) % dimension,
        })
    }

    /// Returns the 1-based box number of these coordinates.
    pub fn box_number(self, dimension: usize) -> usize {
        self.row * dimension + self.col + 1
    }
}
