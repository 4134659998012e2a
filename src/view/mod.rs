//! Everything the turn loop needs from the person at the terminal.

mod render;
mod terminal;

pub use render::render_board;
pub use terminal::TerminalView;

use crate::{GameError, Player};
use tictactoe_board::Board;

/// Front end for a game: shows the board and collects choices.
pub trait View {
    /// Shows the current board.
    fn print_board(&mut self, board: &Board) -> Result<(), GameError>;

    /// Asks for the name of player `number` (1-based).
    fn ask_player_name(&mut self, number: usize) -> Result<String, GameError>;

    /// Asks for the board dimension.
    fn ask_dimension(&mut self) -> Result<i64, GameError>;

    /// Asks `player` for the 1-based box number of their next move.
    fn ask_box(&mut self, player: &Player) -> Result<usize, GameError>;

    /// Tells the players why their last input was not accepted.
    fn report(&mut self, message: &str) -> Result<(), GameError>;

    /// Announces the winner.
    fn declare_winner(&mut self, name: &str) -> Result<(), GameError>;

    /// Announces a draw.
    fn declare_draw(&mut self) -> Result<(), GameError>;
}
