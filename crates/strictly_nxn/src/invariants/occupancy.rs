//! Occupancy invariant: the board's running count matches its squares.

use super::Invariant;
use crate::GameSession;

/// Invariant: `occupied_count` equals the number of non-empty squares.
pub struct OccupancyInvariant;

impl Invariant<GameSession> for OccupancyInvariant {
    fn holds(session: &GameSession) -> bool {
        let Some(board) = session.board() else {
            return true;
        };
        let filled = board.squares().iter().filter(|s| !s.is_empty()).count();
        filled == board.occupied_count() && filled <= board.capacity()
    }

    fn description() -> &'static str {
        "Occupied count matches the number of non-empty squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_fresh_game_holds() {
        let mut session = GameSession::new();
        session.start_new_game(5).expect("valid size");
        assert!(OccupancyInvariant::holds(&session));
    }

    #[test]
    fn test_overwrite_without_count_violates() {
        let mut session = GameSession::new();
        session.start_new_game(3).expect("valid size");
        if let Some(board) = session.board.as_mut() {
            board.overwrite(Position::new(2, 2), Square::Occupied(Player::X));
        }
        assert!(!OccupancyInvariant::holds(&session));
    }
}
