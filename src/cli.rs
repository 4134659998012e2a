//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe on boards of any size
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on boards of any size", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board dimension (asked for at startup if neither set here nor in the config)
    #[arg(short, long, allow_negative_numbers = true)]
    pub dimension: Option<i64>,

    /// Consecutive marks needed to win [default: 3]
    #[arg(short, long, allow_negative_numbers = true)]
    pub win_count: Option<i64>,

    /// Path to a TOML config file (skipped if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Name of the player using 'x'
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the player using 'o'
    #[arg(long)]
    pub player_two: Option<String>,

    /// Colour the marks on the board
    #[arg(long)]
    pub color: bool,
}
