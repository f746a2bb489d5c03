//! The N×N grid and its placement rules.

use crate::error::BoardError;
use crate::position::Position;
use crate::rules;
use crate::types::{BoardSize, GameStatus, Player, Square};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// N×N tic-tac-toe board.
///
/// `occupied` always equals the number of non-empty squares. Squares only
/// change through [`Board::place`], which never overwrites a mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    /// Squares in row-major order.
    squares: Vec<Square>,
    occupied: usize,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()],
            occupied: 0,
        }
    }

    /// Replaces the grid with an empty one of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] and leaves the board untouched if
    /// `size` is even or outside 3..=25.
    #[instrument(skip(self), fields(previous = %self.size))]
    pub fn reset(&mut self, size: usize) -> Result<(), BoardError> {
        let size = BoardSize::new(size)?;
        *self = Self::new(size);
        debug!(size = %size, "Board reset");
        Ok(())
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Validated side length.
    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Total number of squares.
    pub fn capacity(&self) -> usize {
        self.squares.len()
    }

    /// Number of non-empty squares.
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Gets the square at the given coordinates, or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        let pos = Position::new(row, col);
        if !pos.is_within(self.size()) {
            return None;
        }
        self.squares.get(pos.to_index(self.size())).copied()
    }

    /// Returns true iff the coordinates are on the board and the square is empty.
    ///
    /// Out-of-bounds coordinates are reported as `false`, never as a usable square.
    pub fn is_valid_placement(&self, row: usize, col: usize) -> bool {
        self.check_placement(row, col).is_ok()
    }

    /// Explains why a placement would be rejected.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] or [`BoardError::CellOccupied`].
    pub fn check_placement(&self, row: usize, col: usize) -> Result<Position, BoardError> {
        match self.get(row, col) {
            None => Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size(),
            }),
            Some(Square::Occupied(_)) => Err(BoardError::CellOccupied(Position::new(row, col))),
            Some(Square::Empty) => Ok(Position::new(row, col)),
        }
    }

    /// Places a player's mark. Does not evaluate the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] or [`BoardError::CellOccupied`]
    /// without modifying the board.
    #[instrument(skip(self), fields(size = %self.size, occupied = self.occupied))]
    pub fn place(&mut self, player: Player, row: usize, col: usize) -> Result<(), BoardError> {
        let pos = self.check_placement(row, col).inspect_err(|err| {
            warn!(error = %err, "Placement rejected");
        })?;
        let index = pos.to_index(self.size());
        self.squares[index] = Square::Occupied(player);
        self.occupied += 1;
        debug!(position = %pos, occupied = self.occupied, "Mark placed");
        Ok(())
    }

    /// Evaluates the board: winner, tie, or still in progress.
    ///
    /// See [`rules::compute_outcome`] for the scan order.
    pub fn compute_outcome(&self) -> GameStatus {
        rules::compute_outcome(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size())
    }

    /// Positions of all empty squares in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| square.is_empty())
            .filter_map(|(index, _)| Position::from_index(index, self.size()))
            .collect()
    }

    /// Overwrites a square without bookkeeping, for invariant tests.
    #[cfg(test)]
    pub(crate) fn overwrite(&mut self, pos: Position, square: Square) {
        let index = pos.to_index(self.size());
        self.squares[index] = square;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
