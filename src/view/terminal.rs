//! Line-oriented terminal front end.

use super::{View, render_board};
use crate::{GameError, Player};
use std::io::{BufRead, Write};
use tictactoe_board::Board;
use tracing::{debug, instrument};

/// Reads answers line by line from `input` and writes prompts to `output`.
///
/// Generic over the streams so a scripted game can run against in-memory
/// buffers.
#[derive(Debug)]
pub struct TerminalView<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    /// Creates a view over the given streams.
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Consumes the view and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, message: &str) -> Result<String, GameError> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_number<T: std::str::FromStr>(&mut self, message: &str) -> Result<T, GameError> {
        loop {
            let answer = self.prompt(message)?;
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!(answer = %answer, "Rejected non-numeric input");
                    self.report(&format!("'{}' is not a valid number, try again.", answer))?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> View for TerminalView<R, W> {
    fn print_board(&mut self, board: &Board) -> Result<(), GameError> {
        writeln!(self.output, "{}", render_board(board, self.color))?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn ask_player_name(&mut self, number: usize) -> Result<String, GameError> {
        let name = self.prompt(&format!("Enter name for Player {}", number))?;
        if name.is_empty() {
            return Ok(format!("Player {}", number));
        }
        Ok(name)
    }

    #[instrument(skip(self))]
    fn ask_dimension(&mut self) -> Result<i64, GameError> {
        self.prompt_number("Enter game dimensions for tictactoe:")
    }

    #[instrument(skip(self, player), fields(player = %player))]
    fn ask_box(&mut self, player: &Player) -> Result<usize, GameError> {
        self.prompt_number(&format!(
            "{}, choose a box to place an '{}' into:",
            player.name(),
            player.mark()
        ))
    }

    fn report(&mut self, message: &str) -> Result<(), GameError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn declare_winner(&mut self, name: &str) -> Result<(), GameError> {
        writeln!(self.output, "Congratulations {}! You have won.", name)?;
        Ok(())
    }

    fn declare_draw(&mut self) -> Result<(), GameError> {
        writeln!(self.output, "This game has ended in a draw!")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_board::Mark;

    fn view(input: &str) -> TerminalView<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalView::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output(view: TerminalView<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(view.into_output()).unwrap()
    }

    #[test]
    fn test_name_is_trimmed() {
        let mut view = view("  Ada \n");
        assert_eq!(view.ask_player_name(1).unwrap(), "Ada");
        assert_eq!(output(view), "Enter name for Player 1\n");
    }

    #[test]
    fn test_blank_name_falls_back() {
        let mut view = view("\n");
        assert_eq!(view.ask_player_name(2).unwrap(), "Player 2");
    }

    #[test]
    fn test_box_reprompts_until_number() {
        let mut view = view("five\n\n5\n");
        let player = Player::new("Ada", Mark::O);
        assert_eq!(view.ask_box(&player).unwrap(), 5);

        let out = output(view);
        assert_eq!(out.matches("Ada, choose a box to place an 'o' into:").count(), 3);
        assert!(out.contains("'five' is not a valid number, try again."));
    }

    #[test]
    fn test_negative_dimension_is_passed_through() {
        let mut view = view("-3\n");
        assert_eq!(view.ask_dimension().unwrap(), -3);
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut view = view("");
        assert!(matches!(view.ask_dimension(), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_announcements() {
        let mut view = view("");
        view.declare_winner("Ada").unwrap();
        view.declare_draw().unwrap();
        assert_eq!(
            output(view),
            "Congratulations Ada! You have won.\nThis game has ended in a draw!\n"
        );
    }
}
