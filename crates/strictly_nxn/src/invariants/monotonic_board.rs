//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameSession};

/// Invariant: replaying the move history onto an empty board reproduces
/// the current board.
///
/// Each move must land on an empty square, and no square may be filled
/// without a move, so history length and occupancy always agree.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let Some(board) = session.board() else {
            return session.history().is_empty();
        };

        let mut reconstructed = Board::new(board.board_size());
        for mov in session.history() {
            let pos = mov.position;
            if reconstructed.place(mov.player, pos.row, pos.col).is_err() {
                return false;
            }
        }

        reconstructed.squares() == board.squares()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position, Square};

    fn started() -> GameSession {
        let mut session = GameSession::new();
        session.start_new_game(3).expect("valid size");
        session
    }

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&started()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut session = started();
        for (row, col) in [(0, 0), (1, 1), (0, 2), (2, 0)] {
            session.play_turn(row, col).expect("legal move");
        }
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut session = started();
        session.play_turn(1, 1).expect("legal move");
        if let Some(board) = session.board.as_mut() {
            board.overwrite(Position::new(1, 1), Square::Occupied(Player::O));
        }
        assert!(!MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_history_without_square_violates() {
        let mut session = started();
        session
            .history
            .push(Move::new(Player::X, Position::new(0, 0)));
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
