//! Command-line interface for strictly_nxn.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use strictly_nxn::{BoardSize, Player};

/// Strictly N×N - two-player tic-tac-toe on odd boards from 3×3 to 25×25
#[derive(Parser, Debug)]
#[command(name = "strictly_nxn")]
#[command(about = "Two-player N×N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "strictly_nxn.toml")]
    pub config: PathBuf,

    /// Board size for every game; skips the size prompt
    #[arg(short, long, value_parser = parse_board_size)]
    pub size: Option<BoardSize>,

    /// Player who opens every game
    #[arg(short, long, value_enum)]
    pub first: Option<PlayerArg>,

    /// Tracing filter, e.g. "debug" or "strictly_nxn=trace" (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the final scoreboard as JSON on exit
    #[arg(long)]
    pub stats_json: bool,
}

/// Player choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerArg {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}

fn parse_board_size(s: &str) -> Result<BoardSize, String> {
    let size: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid integer", s))?;
    BoardSize::new(size).map_err(|e| e.to_string())
}
