//! Plain-text rendering of boards, results and statistics.

use std::fmt;
use strictly_nxn::{Board, Glyphs, Outcome, Player, Scoreboard};
use strum::IntoEnumIterator;

/// Board drawn with row and column indices.
///
/// ```text
///
///    0  1  2
///  0 X| O|  |
///   ---------
/// ```
pub struct BoardView<'a> {
    board: &'a Board,
    glyphs: &'a Glyphs,
}

impl<'a> BoardView<'a> {
    /// Wraps a board for display.
    pub fn new(board: &'a Board, glyphs: &'a Glyphs) -> Self {
        Self { board, glyphs }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n ")?;
        for col in 0..self.board.size() {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        let separator = "---".repeat(self.board.size());
        for (row, squares) in self.board.rows().enumerate() {
            write!(f, "{:>2}", row)?;
            for square in squares {
                write!(f, "{:>2}|", self.glyphs.square(*square))?;
            }
            writeln!(f)?;
            writeln!(f, "  {}", separator)?;
        }
        Ok(())
    }
}

/// Session statistics: wins per player, then ties.
pub struct StatisticsView<'a> {
    scoreboard: &'a Scoreboard,
    glyphs: &'a Glyphs,
}

impl<'a> StatisticsView<'a> {
    /// Wraps a scoreboard for display.
    pub fn new(scoreboard: &'a Scoreboard, glyphs: &'a Glyphs) -> Self {
        Self { scoreboard, glyphs }
    }
}

impl fmt::Display for StatisticsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nGame Stats")?;
        for player in Player::iter() {
            writeln!(
                f,
                "{} has won {} games.",
                self.glyphs.player(player),
                self.scoreboard.wins(player)
            )?;
        }
        writeln!(f, "There have been {} tie games.", self.scoreboard.ties())
    }
}

/// Renders the board to a string.
pub fn board(board: &Board, glyphs: &Glyphs) -> String {
    BoardView::new(board, glyphs).to_string()
}

/// Line announcing the end of a game.
pub fn outcome(outcome: Outcome, glyphs: &Glyphs) -> String {
    match outcome {
        Outcome::Winner(player) => {
            format!("{}, you have won the game!", glyphs.player(player))
        }
        Outcome::Tie => "No winner, - it was a tie!".to_string(),
    }
}

/// Renders the statistics block to a string.
pub fn statistics(scoreboard: &Scoreboard, glyphs: &Glyphs) -> String {
    StatisticsView::new(scoreboard, glyphs).to_string()
}
