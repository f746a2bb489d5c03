//! Strictly N×N - tic-tac-toe on any odd board from 3×3 to 25×25
//!
//! A win is a complete row, column or diagonal of length N. The crate is
//! pure game logic with no I/O; front ends drive it through
//! [`GameSession`].
//!
//! # Architecture
//!
//! - **Board**: grid storage, placement and the line-scanning [`rules`]
//! - **Session**: turn rotation, move contracts and a cross-game [`Scoreboard`]
//!
//! # Example
//!
//! ```
//! use strictly_nxn::{GameSession, GameStatus, Outcome, Player};
//!
//! let mut session = GameSession::new();
//! session.start_new_game(3)?;
//!
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     assert_eq!(session.play_turn(row, col)?, GameStatus::InProgress);
//! }
//! assert_eq!(session.play_turn(0, 2)?, GameStatus::Won(Player::X));
//!
//! session.finalize_game()?;
//! assert_eq!(session.statistics_snapshot().count(Outcome::Winner(Player::X)), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod error;
mod glyphs;
mod position;
mod scoreboard;
mod session;
mod types;

// Public modules
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Board engine
pub use board::Board;
pub use position::Position;
pub use types::{BoardSize, GameStatus, Outcome, Player, Square};

// Crate-level exports - Session
pub use action::Move;
pub use glyphs::Glyphs;
pub use scoreboard::Scoreboard;
pub use session::{GameSession, SessionConfig};

// Crate-level exports - Errors
pub use error::{BoardError, SessionError};
