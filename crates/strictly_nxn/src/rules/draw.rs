//! Tie detection for N×N tic-tac-toe.

use super::win::check_winner;
use crate::board::Board;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == board.capacity()
}

/// A full board with no complete line.
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
