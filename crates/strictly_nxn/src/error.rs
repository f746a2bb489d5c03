//! Error types for board and session operations.
//!
//! Every error here is recoverable: the operation that produced it left
//! the board, turn cursor and scoreboard exactly as they were.

use crate::position::Position;
use derive_more::Display;

/// Rejected board operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardError {
    /// Side length is even or outside 3..=25.
    #[display("Invalid board size {_0}: must be an odd number between 3 and 25")]
    InvalidSize(usize),

    /// Coordinates fall outside the board.
    #[display("Position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the board.
        size: usize,
    },

    /// The square already holds a mark.
    #[display("Square {_0} is already occupied")]
    CellOccupied(Position),
}

impl std::error::Error for BoardError {}

/// Rejected session operation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionError {
    /// The board refused the operation.
    #[display("{_0}")]
    Board(BoardError),

    /// No game has been started yet.
    #[display("No game has been started")]
    NoActiveGame,

    /// The current game already has a winner or is tied.
    #[display("Game is already over")]
    GameOver,

    /// Finalization requested before the game reached a terminal outcome.
    #[display("Game is still in progress")]
    GameNotFinished,

    /// The current game was already counted on the scoreboard.
    #[display("Game has already been finalized")]
    AlreadyFinalized,

    /// A postcondition failed after a move.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl SessionError {
    /// Returns true when the caller should collect new coordinates and try again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SessionError::Board(BoardError::OutOfBounds { .. } | BoardError::CellOccupied(_))
        )
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}
