//! First-class move type.
//!
//! A move is the player's intent, validated against the session's
//! contracts before it touches the board.

use crate::position::Position;
use crate::types::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{player} -> {position}")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}
