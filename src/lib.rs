//! Two-player terminal tic-tac-toe on boards of any size.
//!
//! The board itself lives in [`tictactoe_board`]. This crate adds what it
//! takes to play a game on it: configuration, players, a terminal
//! [`View`] and the turn loop in [`Match`].
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe::{GameConfig, Outcome, TerminalView};
//!
//! let config = GameConfig::default()
//!     .with_dimension(Some(3))
//!     .with_player_one(Some("Ada".into()))
//!     .with_player_two(Some("Bob".into()));
//! let moves = Cursor::new("1\n4\n2\n5\n3\n");
//! let mut view = TerminalView::new(moves, Vec::new(), false);
//!
//! let outcome = tictactoe::run(&mut view, &config)?;
//! assert_eq!(outcome.winner().map(|p| p.name().as_str()), Some("Ada"));
//! # Ok::<(), tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod game;
mod player;
mod view;

pub use config::{ConfigError, GameConfig};
pub use error::GameError;
pub use game::{Match, Outcome, run};
pub use player::Player;
pub use view::{TerminalView, View, render_board};

pub use tictactoe_board::{Board, BoardError, Cell, Coords, Mark};
