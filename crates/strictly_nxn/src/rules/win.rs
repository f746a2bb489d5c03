//! Win detection for N×N tic-tac-toe.
//!
//! Rows, columns and both diagonals differ only in where they start and
//! which direction they step, so a single [`Line`] describes all of them.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Player, Square};
use tracing::instrument;

/// A full-length line on the board: a start square and a `(row, col)` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// First square of the line.
    pub start: Position,
    /// Offset between consecutive squares.
    pub step: (isize, isize),
}

impl Line {
    /// The given row, scanned left to right.
    pub fn row(row: usize) -> Self {
        Self {
            start: Position::new(row, 0),
            step: (0, 1),
        }
    }

    /// The given column, scanned top to bottom.
    pub fn column(col: usize) -> Self {
        Self {
            start: Position::new(0, col),
            step: (1, 0),
        }
    }

    /// Top-left to bottom-right.
    pub fn diagonal() -> Self {
        Self {
            start: Position::new(0, 0),
            step: (1, 1),
        }
    }

    /// Top-right to bottom-left.
    pub fn anti_diagonal(size: usize) -> Self {
        Self {
            start: Position::new(0, size.saturating_sub(1)),
            step: (1, -1),
        }
    }

    /// The `size` positions the line covers, in scan order.
    pub fn positions(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| {
            let i = i as isize;
            Position::new(
                self.start.row.saturating_add_signed(self.step.0 * i),
                self.start.col.saturating_add_signed(self.step.1 * i),
            )
        })
    }
}

/// Every line of a board with the given side length, in scan order:
/// rows, then columns, then the main diagonal, then the anti-diagonal.
pub fn lines(size: usize) -> impl Iterator<Item = Line> {
    (0..size)
        .map(Line::row)
        .chain((0..size).map(Line::column))
        .chain([Line::diagonal(), Line::anti_diagonal(size)])
}

/// Returns the player owning every square of the line.
///
/// The first square decides: if it is empty the line cannot win, otherwise
/// every other square must match it.
pub fn scan_line(board: &Board, line: Line) -> Option<Player> {
    let mut positions = line.positions(board.size());
    let first = positions.next()?;
    let player = board.get(first.row, first.col)?.player()?;
    positions
        .all(|pos| board.get(pos.row, pos.col) == Some(Square::Occupied(player)))
        .then_some(player)
}

/// First complete line in scan order, with its owner.
///
/// Legal alternating play completes at most one player's lines, but a
/// board assembled by hand may hold several; the scan order decides.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    lines(board.size()).find_map(|line| scan_line(board, line).map(|player| (line, player)))
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}
