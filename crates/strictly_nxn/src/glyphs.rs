//! Display glyphs for squares.

use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};

/// Strings used to draw each square state.
///
/// Owned by a session's configuration, so two sessions can render with
/// different symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Glyph for player X.
    pub x: String,
    /// Glyph for player O.
    pub o: String,
    /// Glyph for an empty square.
    pub empty: String,
}

impl Glyphs {
    /// Creates a glyph set.
    pub fn new(x: impl Into<String>, o: impl Into<String>, empty: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
            empty: empty.into(),
        }
    }

    /// Glyph for a player.
    pub fn player(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Glyph for a square.
    pub fn square(&self, square: Square) -> &str {
        match square {
            Square::Empty => &self.empty,
            Square::Occupied(player) => self.player(player),
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new("X", "O", " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_glyphs() {
        let glyphs = Glyphs::default();
        assert_eq!(glyphs.square(Square::Empty), " ");
        assert_eq!(glyphs.square(Square::Occupied(Player::X)), "X");
        assert_eq!(glyphs.square(Square::Occupied(Player::O)), "O");
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let glyphs: Glyphs = serde_json::from_str(r##"{"x": "#"}"##).expect("valid json");
        assert_eq!(glyphs.player(Player::X), "#");
        assert_eq!(glyphs.player(Player::O), "O");
    }
}
