//! Contract-based validation for session moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`.

use crate::action::Move;
use crate::error::SessionError;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::session::GameSession;
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SessionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

/// Precondition: a game is running and has not reached a terminal outcome.
pub struct GameActive;

impl GameActive {
    /// Fails with `NoActiveGame` or `GameOver`.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), SessionError> {
        let board = session.board().ok_or(SessionError::NoActiveGame)?;
        if session.is_finalized() || board.compute_outcome().is_terminal() {
            return Err(SessionError::GameOver);
        }
        Ok(())
    }
}

/// Precondition: the target square is on the board and empty.
pub struct SquareAvailable;

impl SquareAvailable {
    /// Fails with `OutOfBounds` or `CellOccupied`.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), SessionError> {
        let board = session.board().ok_or(SessionError::NoActiveGame)?;
        board.check_placement(mov.position.row, mov.position.col)?;
        Ok(())
    }
}

/// Composite precondition: the game is active and the square is available.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), SessionError> {
        GameActive::check(session)?;
        SquareAvailable::check(mov, session)?;
        Ok(())
    }
}

/// Contract for a single turn.
///
/// Preconditions:
/// - A game is active and not over
/// - The square is on the board and empty
///
/// Postconditions:
/// - Exactly one move was added and exactly one square was filled
/// - All [`SessionInvariants`] hold
pub struct MoveContract;

impl Contract<GameSession, Move> for MoveContract {
    fn pre(session: &GameSession, action: &Move) -> Result<(), SessionError> {
        LegalMove::check(action, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), SessionError> {
        let occupied = |s: &GameSession| s.board().map_or(0, |b| b.occupied_count());
        if after.history().len() != before.history().len() + 1
            || occupied(after) != occupied(before) + 1
        {
            return Err(SessionError::InvariantViolation(
                "Postcondition failed: a turn must place exactly one mark".to_string(),
            ));
        }

        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SessionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
