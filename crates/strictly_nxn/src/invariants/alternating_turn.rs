//! Alternating turn invariant: players alternate, starting with the configured player.

use super::Invariant;
use crate::GameSession;

/// Invariant: players alternate turns.
///
/// The history starts with the session's first player and never repeats a
/// player back to back; the cursor points at whoever moves next.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let first = session.config().first_player();
        let history = session.history();

        if history.first().is_some_and(|mov| mov.player != first) {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            first
        } else {
            first.opponent()
        };

        session.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
