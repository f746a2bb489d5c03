//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board
//! storage so the session's contracts can compose them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{Line, check_winner, lines, scan_line, winning_line};

use crate::board::Board;
use crate::types::GameStatus;
use tracing::{debug, instrument};

/// Evaluates a board.
///
/// Returns `InProgress` without scanning while fewer than N marks are
/// placed, since no line can be complete yet. Otherwise the lines are
/// scanned in a fixed order (rows top to bottom, columns left to right,
/// main diagonal, anti-diagonal) and the first complete line decides the
/// winner. Only when no line is complete does a full board count as a tie,
/// so a winning last move is always a win.
#[instrument(skip(board), fields(size = board.size(), occupied = board.occupied_count()))]
pub fn compute_outcome(board: &Board) -> GameStatus {
    if board.occupied_count() < board.size() {
        return GameStatus::InProgress;
    }

    if let Some((line, winner)) = winning_line(board) {
        debug!(?line, %winner, "Complete line found");
        return GameStatus::Won(winner);
    }

    if is_full(board) {
        GameStatus::Tie
    } else {
        GameStatus::InProgress
    }
}
