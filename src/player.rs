//! Human players.

use derive_getters::Getters;
use derive_new::new;
use tictactoe_board::Mark;

/// A person at the keyboard, identified by name and the mark they play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Mark placed on the board.
    mark: Mark,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
