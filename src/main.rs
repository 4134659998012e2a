//! tictactoe - terminal game entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe::{GameConfig, TerminalView};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(cli)?;

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();
    let mut view = TerminalView::new(stdin, stdout, *config.color());

    let outcome = tictactoe::run(&mut view, &config).context("Game aborted")?;
    info!(%outcome, "Game over");

    Ok(())
}

/// Merges the config file with command-line overrides.
#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: Cli) -> Result<GameConfig> {
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_dimension(cli.dimension)
        .with_win_count(cli.win_count)
        .with_player_one(cli.player_one)
        .with_player_two(cli.player_two)
        .with_color(cli.color);

    info!(?config, "Configuration resolved");
    Ok(config)
}

/// Logs go to stderr so they never mix with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
