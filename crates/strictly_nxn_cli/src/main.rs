//! Strictly N×N - console game
//!
//! Two players share the terminal and play as many games as they like;
//! the scoreboard lasts until the process exits.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use strictly_nxn::{GameSession, Player};
use strictly_nxn_cli::{Cli, CliConfig, Console};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.log_level.as_deref())?;

    run(cli)
}

/// Plays games on stdin/stdout until the players quit.
#[instrument(skip_all, fields(config_path = %cli.config.display()))]
fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load_or_default(&cli.config)?
        .with_overrides(cli.first.map(Player::from), cli.size);

    let mut session = GameSession::with_config(config.session_config());

    {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut console = Console::new(stdin.lock(), stdout.lock());
        console.run(&mut session, *config.default_size())?;
    }

    let stats = session.statistics_snapshot();
    info!(games_played = stats.total(), "Session finished");

    if cli.stats_json {
        let json =
            serde_json::to_string_pretty(&stats).context("Failed to serialize scoreboard")?;
        println!("{}", json);
    }

    Ok(())
}

/// Logs to stderr so tracing output never mixes with the game board.
fn initialize_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level filter '{}'", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    Ok(())
}
