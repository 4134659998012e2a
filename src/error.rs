//! Game-level error type.

use crate::config::ConfigError;
use derive_more::{Display, Error, From};
use tictactoe_board::BoardError;

/// Errors that end a game session.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// Board could not be built or rejected a move.
    #[display("Board error: {}", _0)]
    Board(BoardError),

    /// Configuration could not be loaded.
    #[display("{}", _0)]
    Config(ConfigError),

    /// Reading from or writing to the terminal failed.
    #[display("Terminal I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input reached end of file while a prompt was waiting.
    #[display("Input closed before the game finished")]
    #[from(skip)]
    InputClosed,
}
