//! Core domain types for N×N tic-tac-toe.

use crate::error::BoardError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Player {
    /// Player X (starts by default).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// Side length of a board: an odd number between [`BoardSize::MIN`] and [`BoardSize::MAX`].
///
/// Holding a `BoardSize` proves the value passed validation, so the board
/// itself never re-checks it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest supported board.
    pub const MIN: usize = 3;
    /// Largest supported board.
    pub const MAX: usize = 25;

    /// Validates a raw side length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is even or outside `MIN..=MAX`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if (Self::MIN..=Self::MAX).contains(&size) && size % 2 == 1 {
            Ok(Self(size))
        } else {
            Err(BoardError::InvalidSize(size))
        }
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of squares on a board of this size.
    pub fn cells(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// Current status of a game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("Player {_0} wins")]
    Won(Player),
    /// Board is full with no complete line.
    #[display("Tie")]
    Tie,
}

impl GameStatus {
    /// Returns the terminal outcome, or `None` while the game is in progress.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Tie => Some(Outcome::Tie),
        }
    }

    /// Returns true once the game has a winner or is tied.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Outcome of a finished game. Also the key of a scoreboard bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// Player won the game.
    #[display("Player {_0} wins")]
    Winner(Player),
    /// Game ended with a full board and no winner.
    #[display("Tie")]
    Tie,
}

impl Outcome {
    /// All outcome buckets in display order.
    pub const ALL: [Outcome; 3] = [
        Outcome::Winner(Player::X),
        Outcome::Winner(Player::O),
        Outcome::Tie,
    ];

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(player) => GameStatus::Won(player),
            Outcome::Tie => GameStatus::Tie,
        }
    }
}
