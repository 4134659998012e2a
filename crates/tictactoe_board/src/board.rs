//! The n×n grid and anchored win detection.

use super::direction::{WinLine, win_lines};
use super::error::BoardError;
use super::types::{Cell, Coords, Mark};
use tracing::instrument;

/// Largest accepted board dimension.
pub const MAX_DIMENSION: usize = 4096;

/// Square tic-tac-toe board of any size.
///
/// The board only tracks cells. Whose turn it is, and when the game is over,
/// is decided by the caller from the results of [`Board::place`] and
/// [`Board::check_win`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    win_count: usize,
    cells: Vec<Vec<Cell>>,
    win_lines: [WinLine; 4],
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidWinCount`] if `win_count` is not
    /// positive, then [`BoardError::InvalidDimension`] if `dimension` is not
    /// in `1..=MAX_DIMENSION` or the grid cannot be allocated.
    #[instrument(level = "trace")]
    pub fn new(win_count: i64, dimension: i64) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidDimension(dimension);
        let win_count = positive(win_count).ok_or(BoardError::InvalidWinCount(win_count))?;
        let size = positive(dimension)
            .filter(|&size| size <= MAX_DIMENSION)
            .ok_or(invalid)?;

        Ok(Self {
            win_count,
            cells: empty_grid(size).ok_or(invalid)?,
            win_lines: win_lines(),
        })
    }

    /// Number of rows (and columns).
    pub fn dimension(&self) -> usize {
        self.cells.len()
    }

    /// Consecutive marks needed to win.
    pub fn win_count(&self) -> usize {
        self.win_count
    }

    /// Returns the cell at `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Iterates the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Number of cells holding a mark.
    pub fn cells_filled(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Maps a 1-based box number onto this board.
    pub fn coords_of(&self, choice: usize) -> Option<Coords> {
        Coords::from_box_number(choice, self.dimension())
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`BoardError::IndexOutOfRange`] if the position is off the board.
    /// - [`BoardError::CellOccupied`] if the cell already holds a mark. The
    ///   board is left untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        self.check_bounds(row, col)?;

        let cell = &mut self.cells[row][col];
        if let Cell::Occupied(occupant) = *cell {
            return Err(BoardError::CellOccupied { row, col, occupant });
        }

        *cell = Cell::Occupied(mark);
        Ok(())
    }

    /// Checks whether the mark at `(row, col)` completes a line of
    /// [`win_count`](Self::win_count) marks.
    ///
    /// Only lines through `(row, col)` are examined, so this is meant to be
    /// called right after a successful [`place`](Self::place) with the same
    /// arguments. The anchor cell itself is assumed to hold `mark` and is not
    /// re-read; asking about a cell that holds something else gives a
    /// meaningless answer.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] if the position is off the
    /// board.
    #[instrument(level = "trace", skip(self))]
    pub fn check_win(&self, mark: Mark, row: usize, col: usize) -> Result<bool, BoardError> {
        self.check_bounds(row, col)?;

        if self.win_count <= 1 {
            return Ok(true);
        }

        let target = Cell::Occupied(mark);
        let dimension = self.dimension();

        for line in &self.win_lines {
            let mut consecutive = 1;

            for step in line.steps {
                for distance in 1..self.win_count {
                    let Some((r, c)) = step.walk(row, col, distance, dimension) else {
                        break;
                    };
                    if self.cells[r][c] != target {
                        break;
                    }

                    consecutive += 1;
                    if consecutive == self.win_count {
                        return Ok(true);
                    }
                }
            }
        }

        Ok(false)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        let dimension = self.dimension();
        if row >= dimension || col >= dimension {
            return Err(BoardError::IndexOutOfRange {
                row,
                col,
                dimension,
            });
        }
        Ok(())
    }
}

fn positive(value: i64) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v > 0)
}

/// Allocates a `size`×`size` grid of empty cells, or `None` if the
/// allocator refuses.
fn empty_grid(size: usize) -> Option<Vec<Vec<Cell>>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(size).ok()?;
    for _ in 0..size {
        let mut row = Vec::new();
        row.try_reserve_exact(size).ok()?;
        row.resize(size, Cell::Empty);
        cells.push(row);
    }
    Some(cells)
}
