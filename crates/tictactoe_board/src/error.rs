//! Board errors.

use super::types::Mark;
use derive_more::{Display, Error};

/// Errors returned by board construction and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Win threshold was zero or negative.
    #[display("Number of boxes to fill to win must be positive, got {}", _0)]
    InvalidWinCount(#[error(not(source))] i64),

    /// Board dimension was zero, negative or too large to allocate.
    #[display("Board dimension must be between 1 and {}, got {}", crate::MAX_DIMENSION, _0)]
    InvalidDimension(#[error(not(source))] i64),

    /// Target cell already holds a mark.
    #[display("Box at ({}, {}) is already occupied by {}", row, col, occupant)]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
        /// Mark already in the cell.
        occupant: Mark,
    },

    /// Coordinates fall outside the board.
    #[display("Position ({}, {}) is outside a {}x{} board", row, col, dimension, dimension)]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board dimension.
        dimension: usize,
    },
}
