//! Game session: turn rotation for one game at a time and a scoreboard
//! across games.

use crate::action::Move;
use crate::board::Board;
use crate::contracts::{Contract, MoveContract};
use crate::error::{BoardError, SessionError};
use crate::glyphs::Glyphs;
use crate::position::Position;
use crate::scoreboard::Scoreboard;
use crate::types::{BoardSize, GameStatus, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Immutable per-session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    first_player: Player,
    glyphs: Glyphs,
}

impl SessionConfig {
    /// Creates a session configuration.
    pub fn new(first_player: Player, glyphs: Glyphs) -> Self {
        Self {
            first_player,
            glyphs,
        }
    }

    /// Player who opens every game of the session.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Glyphs used to render squares.
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Player::X, Glyphs::default())
    }
}

/// Plays games to completion and tallies their outcomes.
///
/// The session owns its board exclusively. Every game opens with the
/// configured first player; the starter never alternates between games.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    pub(crate) board: Option<Board>,
    pub(crate) to_move: Player,
    pub(crate) history: Vec<Move>,
    scoreboard: Scoreboard,
    finalized: bool,
}

impl GameSession {
    /// Creates a session with default settings and no game started.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session with the given settings and no game started.
    #[instrument]
    pub fn with_config(config: SessionConfig) -> Self {
        info!(first_player = %config.first_player, "Creating game session");
        Self {
            to_move: config.first_player,
            config,
            board: None,
            history: Vec::new(),
            scoreboard: Scoreboard::new(),
            finalized: false,
        }
    }

    /// Starts a fresh game on an empty board of the given side length.
    ///
    /// The scoreboard is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] before any board is created or
    /// modified if `size` is even or outside 3..=25.
    #[instrument(skip(self), fields(games_played = self.scoreboard.total()))]
    pub fn start_new_game(&mut self, size: usize) -> Result<(), BoardError> {
        let size = BoardSize::new(size).inspect_err(|err| {
            warn!(error = %err, "Rejected board size");
        })?;

        match self.board.as_mut() {
            Some(board) => board.reset(size.get())?,
            None => self.board = Some(Board::new(size)),
        }
        self.to_move = self.config.first_player;
        self.history.clear();
        self.finalized = false;

        info!(size = %size, first_player = %self.to_move, "New game started");
        Ok(())
    }

    /// Places the current player's mark and passes the turn.
    ///
    /// Returns the game status after the move.
    ///
    /// # Errors
    ///
    /// - [`BoardError::OutOfBounds`] / [`BoardError::CellOccupied`] (wrapped
    ///   in [`SessionError::Board`]): retryable, nothing changed
    /// - [`SessionError::NoActiveGame`] before the first game
    /// - [`SessionError::GameOver`] once the game has a terminal outcome
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play_turn(&mut self, row: usize, col: usize) -> Result<GameStatus, SessionError> {
        let action = Move::new(self.to_move, Position::new(row, col));

        MoveContract::pre(self, &action).inspect_err(|err| {
            warn!(error = %err, "Move rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let board = self.board.as_mut().ok_or(SessionError::NoActiveGame)?;
        board.place(action.player, row, col)?;
        self.history.push(action);
        self.to_move = self.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        let status = self.current_outcome();
        if status.is_terminal() {
            info!(%status, moves = self.history.len(), "Game reached a terminal outcome");
        } else {
            debug!(%action, next = %self.to_move, "Turn complete");
        }
        Ok(status)
    }

    /// Evaluates the current board. `InProgress` before the first game.
    pub fn current_outcome(&self) -> GameStatus {
        self.board
            .as_ref()
            .map_or(GameStatus::InProgress, Board::compute_outcome)
    }

    /// Records the finished game on the scoreboard, exactly once.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoActiveGame`] before the first game
    /// - [`SessionError::GameNotFinished`] while the game is in progress
    /// - [`SessionError::AlreadyFinalized`] on a second call for the same game
    #[instrument(skip(self))]
    pub fn finalize_game(&mut self) -> Result<Outcome, SessionError> {
        if self.board.is_none() {
            return Err(SessionError::NoActiveGame);
        }
        if self.finalized {
            return Err(SessionError::AlreadyFinalized);
        }

        let outcome = self
            .current_outcome()
            .outcome()
            .ok_or(SessionError::GameNotFinished)?;

        self.scoreboard.record(outcome);
        self.finalized = true;
        info!(
            %outcome,
            games_played = self.scoreboard.total(),
            "Game finalized"
        );
        Ok(outcome)
    }

    /// Copy of the scoreboard.
    pub fn statistics_snapshot(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Board of the current game, if one was started.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Player whose move is being collected.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Accepted moves of the current game, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of games counted on the scoreboard.
    pub fn games_played(&self) -> u32 {
        self.scoreboard.total()
    }

    /// Whether the current game was already counted.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Session settings.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
