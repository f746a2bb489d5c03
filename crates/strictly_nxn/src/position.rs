//! Row/column coordinates on an N×N board.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A square's coordinates, zero-based from the top-left corner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board with the given side length.
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Position::to_index`]. Returns `None` past the last square.
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        (size > 0 && index < size * size).then(|| Self::new(index / size, index % size))
    }

    /// Checks whether the position lies on a board with the given side length.
    pub fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping() {
        assert_eq!(Position::new(0, 0).to_index(5), 0);
        assert_eq!(Position::new(2, 3).to_index(5), 13);
        assert_eq!(Position::from_index(13, 5), Some(Position::new(2, 3)));
        assert_eq!(Position::from_index(24, 5), Some(Position::new(4, 4)));
        assert_eq!(Position::from_index(25, 5), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1, 2).to_string(), "(1, 2)");
    }

    #[test]
    fn test_is_within() {
        assert!(Position::new(2, 2).is_within(3));
        assert!(!Position::new(3, 0).is_within(3));
        assert!(!Position::new(0, 3).is_within(3));
    }
}
