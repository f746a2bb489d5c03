//! Line-oriented console driver.
//!
//! Collects board sizes and moves from a reader, re-prompting until the
//! input is acceptable, and hands them to a [`GameSession`]. Generic over
//! the reader and writer so whole games can be scripted in tests.

use crate::render;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_nxn::{BoardSize, GameSession, Outcome};
use tracing::{debug, info, instrument, warn};

/// Console front end over any line reader and writer.
///
/// Squares are drawn with the glyphs of the session being played.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a prompt and reads one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            bail!("Input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Asks for a board size until an odd number between 3 and 25 is entered.
    #[instrument(skip(self))]
    pub fn prompt_board_size(&mut self) -> Result<BoardSize> {
        loop {
            let answer =
                self.ask("Please enter an odd number for board size (between 3-25): ")?;
            let Ok(size) = answer.parse::<usize>() else {
                writeln!(self.output, "Sorry, that's not a valid integer!")?;
                continue;
            };
            match BoardSize::new(size) {
                Ok(size) => return Ok(size),
                Err(err) => debug!(error = %err, "Re-prompting for board size"),
            }
        }
    }

    /// Asks for a row or column index until one in `0..size` is entered.
    ///
    /// Any integer is accepted as input; out-of-range values, negative
    /// ones included, are re-asked without a message.
    #[instrument(skip(self))]
    pub fn prompt_index(&mut self, label: &str, size: usize) -> Result<usize> {
        let prompt = format!("Which {}? ", label);
        loop {
            let answer = self.ask(&prompt)?;
            let Ok(index) = answer.parse::<i64>() else {
                writeln!(self.output, "Sorry, that's not a valid integer input.")?;
                continue;
            };
            match usize::try_from(index) {
                Ok(index) if index < size => return Ok(index),
                _ => debug!(index, size, "Index out of range"),
            }
        }
    }

    /// Asks whether to play again; accepts answers starting with y or n.
    pub fn prompt_repeat(&mut self) -> Result<bool> {
        loop {
            let answer = self.ask("Do you want to play again? (y/n) ")?;
            match answer.chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('y') => return Ok(true),
                Some('n') => return Ok(false),
                _ => continue,
            }
        }
    }

    /// Plays the session's current game to its end and finalizes it.
    #[instrument(skip(self, session))]
    pub fn play_game(&mut self, session: &mut GameSession) -> Result<Outcome> {
        let glyphs = session.config().glyphs().clone();
        loop {
            let board = session.board().context("No game has been started")?;
            let size = board.size();
            write!(self.output, "{}", render::board(board, &glyphs))?;
            writeln!(
                self.output,
                "{}, it is your turn.",
                glyphs.player(session.to_move())
            )?;

            let status = loop {
                let row = self.prompt_index("row", size)?;
                let col = self.prompt_index("column", size)?;
                match session.play_turn(row, col) {
                    Ok(status) => break status,
                    Err(err) if err.is_retryable() => {
                        warn!(error = %err, "Retrying move");
                        writeln!(self.output, "Bad location, try again...")?;
                    }
                    Err(err) => return Err(err.into()),
                }
            };

            if let Some(outcome) = status.outcome() {
                writeln!(self.output, "{}", render::outcome(outcome, &glyphs))?;
                if let Some(board) = session.board() {
                    write!(self.output, "{}", render::board(board, &glyphs))?;
                }
                session.finalize_game()?;
                return Ok(outcome);
            }
        }
    }

    /// Runs games until the players decline another one.
    ///
    /// With `fixed_size` every game uses that size; otherwise the size is
    /// asked before each game.
    #[instrument(skip(self, session))]
    pub fn run(&mut self, session: &mut GameSession, fixed_size: Option<BoardSize>) -> Result<()> {
        writeln!(self.output, "\nWelcome to TicTacToe!\n")?;

        loop {
            let size = match fixed_size {
                Some(size) => size,
                None => self.prompt_board_size()?,
            };
            session.start_new_game(size.get())?;

            let outcome = self.play_game(session)?;
            info!(%outcome, games_played = session.games_played(), "Game complete");

            let stats = session.statistics_snapshot();
            let glyphs = session.config().glyphs();
            write!(self.output, "{}", render::statistics(&stats, glyphs))?;

            if !self.prompt_repeat()? {
                break;
            }
        }

        writeln!(self.output, "\nThanks for playing! ;)\n")?;
        Ok(())
    }
}
