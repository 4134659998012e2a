//! The turn loop.

use crate::view::View;
use crate::{GameConfig, GameError, Player};
use tictactoe_board::{Board, BoardError, Mark};
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Player),
    /// Every box was filled without a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// One game between two players on one board.
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    players: [Player; 2],
}

impl Match {
    /// Creates a match. `players[0]` moves first.
    pub fn new(board: Board, players: [Player; 2]) -> Self {
        Self { board, players }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until someone wins or the board fills up.
    ///
    /// A choice that is off the board or lands on an occupied box is
    /// reported and the same player is asked again.
    #[instrument(skip_all, fields(dimension = self.board.dimension(), win_count = self.board.win_count()))]
    pub fn play<V: View>(&mut self, view: &mut V) -> Result<Outcome, GameError> {
        let dimension = self.board.dimension();
        let mut available_moves = dimension * dimension - self.board.cells_filled();
        let mut turn = 0;

        info!("Game started");
        while available_moves > 0 {
            let player = &self.players[turn];
            let mark = *player.mark();

            view.print_board(&self.board)?;
            let choice = view.ask_box(player)?;

            let Some(coords) = self.board.coords_of(choice) else {
                debug!(choice, "Box number off the board");
                view.report(&format!(
                    "There is no box {}, choose a number from 1 to {}.",
                    choice,
                    dimension * dimension
                ))?;
                continue;
            };

            match self.board.place(coords.row, coords.col, mark) {
                Ok(()) => {}
                Err(BoardError::CellOccupied { occupant, .. }) => {
                    debug!(choice, %occupant, "Box already taken");
                    view.report(&format!(
                        "Box {} already holds an '{}', choose another.",
                        choice, occupant
                    ))?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            }
            debug!(player = %player, %coords, "Mark placed");

            if self.board.check_win(mark, coords.row, coords.col)? {
                view.print_board(&self.board)?;
                view.declare_winner(player.name())?;
                info!(winner = %player, "Game won");
                return Ok(Outcome::Winner(player.clone()));
            }

            turn = (turn + 1) % self.players.len();
            available_moves -= 1;
        }

        view.declare_draw()?;
        info!("Game drawn");
        Ok(Outcome::Draw)
    }
}

/// Sets up players and board from `config`, asking `view` for anything the
/// config leaves open, then plays one game.
///
/// Names are asked before the dimension.
///
/// # Errors
///
/// Fails if the dimension or win count is not positive, or if the view
/// fails.
#[instrument(skip_all)]
pub fn run<V: View>(view: &mut V, config: &GameConfig) -> Result<Outcome, GameError> {
    let first = Mark::X;
    let players = [
        player_for(view, 1, config.player_one().as_deref(), first)?,
        player_for(view, 2, config.player_two().as_deref(), first.opponent())?,
    ];

    let dimension = match config.dimension() {
        Some(dimension) => *dimension,
        None => view.ask_dimension()?,
    };

    let board = Board::new(*config.win_count(), dimension)?;
    info!(dimension, win_count = config.win_count(), "Board created");

    Match::new(board, players).play(view)
}

fn player_for<V: View>(
    view: &mut V,
    number: usize,
    configured: Option<&str>,
    mark: Mark,
) -> Result<Player, GameError> {
    let name = match configured {
        Some(name) => name.to_string(),
        None => view.ask_player_name(number)?,
    };
    Ok(Player::new(name, mark))
}
