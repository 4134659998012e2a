//! Board engine for n×n tic-tac-toe.
//!
//! Holds the grid, rejects placements onto occupied cells and answers
//! whether the last placed mark completed a line of the configured length.
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{Board, Mark};
//!
//! let mut board = Board::new(3, 3)?;
//! for col in 0..3 {
//!     board.place(0, col, Mark::X)?;
//! }
//! assert!(board.check_win(Mark::X, 0, 2)?);
//! # Ok::<(), tictactoe_board::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod direction;
mod error;
mod types;

pub use board::{Board, MAX_DIMENSION};
pub use direction::{Axis, DOWN, LEFT, RIGHT, STAY, Step, UP, WinLine};
pub use error::BoardError;
pub use types::{Cell, Coords, Mark};
