//! Cross-game tally of wins and ties.

use crate::types::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of games won by each player plus the number of ties.
///
/// Every finalized game lands in exactly one bucket, so [`Scoreboard::total`]
/// is the number of games finalized so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one to the bucket for the given outcome.
    pub fn record(&mut self, outcome: Outcome) {
        let bucket = match outcome {
            Outcome::Winner(Player::X) => &mut self.x_wins,
            Outcome::Winner(Player::O) => &mut self.o_wins,
            Outcome::Tie => &mut self.ties,
        };
        *bucket = bucket.saturating_add(1);
        debug!(%outcome, count = *bucket, "Scoreboard updated");
    }

    /// Count for one bucket.
    pub fn count(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins,
            Outcome::Winner(Player::O) => self.o_wins,
            Outcome::Tie => self.ties,
        }
    }

    /// Games won by a player.
    pub fn wins(&self, player: Player) -> u32 {
        self.count(Outcome::Winner(player))
    }

    /// Games that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Games recorded in all buckets.
    pub fn total(&self) -> u32 {
        Outcome::ALL.iter().map(|outcome| self.count(*outcome)).sum()
    }

    /// Buckets with their counts, X wins first and ties last.
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, u32)> + '_ {
        Outcome::ALL.into_iter().map(|outcome| (outcome, self.count(outcome)))
    }
}
