//! Stepping directions used by win detection.
//!
//! A win line is checked along one [`Axis`] at a time. Each axis is a pair of
//! opposite [`Step`]s walked outward from the last placed mark.

/// Row offset towards the top of the board.
pub const UP: isize = -1;
/// Row offset towards the bottom of the board.
pub const DOWN: isize = 1;
/// Column offset towards the left edge.
pub const LEFT: isize = -1;
/// Column offset towards the right edge.
pub const RIGHT: isize = 1;
/// Zero offset: stay in the current row or column.
pub const STAY: isize = 0;

/// A unit move across the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    /// Offset applied to the row index.
    pub row_delta: isize,
    /// Offset applied to the column index.
    pub col_delta: isize,
}

impl Step {
    /// Creates a step from row and column offsets.
    pub const fn new(row_delta: isize, col_delta: isize) -> Self {
        Self {
            row_delta,
            col_delta,
        }
    }

    /// Returns the coordinates `distance` steps away from `(row, col)`, or
    /// `None` if that leaves a `dimension`-sized grid.
    pub fn walk(self, row: usize, col: usize, distance: usize, dimension: usize) -> Option<(usize, usize)> {
        let distance = isize::try_from(distance).ok()?;
        let row = offset(row, self.row_delta * distance, dimension)?;
        let col = offset(col, self.col_delta * distance, dimension)?;
        Some((row, col))
    }
}

fn offset(index: usize, delta: isize, dimension: usize) -> Option<usize> {
    index.checked_add_signed(delta).filter(|&moved| moved < dimension)
}

/// One of the four lines a win can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Axis {
    /// The two opposite steps that together span this axis.
    pub const fn steps(self) -> [Step; 2] {
        match self {
            Axis::Horizontal => [Step::new(STAY, RIGHT), Step::new(STAY, LEFT)],
            Axis::Vertical => [Step::new(DOWN, STAY), Step::new(UP, STAY)],
            Axis::Diagonal => [Step::new(DOWN, RIGHT), Step::new(UP, LEFT)],
            Axis::AntiDiagonal => [Step::new(DOWN, LEFT), Step::new(UP, RIGHT)],
        }
    }
}

/// An axis together with its precomputed step pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    /// Which axis this line follows.
    pub axis: Axis,
    /// Opposite steps walked from the anchor.
    pub steps: [Step; 2],
}

/// Builds the fixed set of win lines checked for every move.
pub fn win_lines() -> [WinLine; 4] {
    [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ]
    .map(|axis| WinLine {
        axis,
        steps: axis.steps(),
    })
}
