//! The two players and their score.
//!
//! ## Player
//!
//! Paper soccer is strictly a two-player game, so players are a closed
//! enum rather than an index.
//!
//! ## Score
//!
//! Goals per player, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, player one first.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based player number, as shown to users.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Look a player up by its 1-based number.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Goals scored by each player.
///
/// Only ever grows during a session; [`Score::clear`] is used by a full reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    goals: [u32; 2],
}

impl Score {
    /// Create a 0-0 score.
    #[must_use]
    pub const fn new() -> Self {
        Self { goals: [0, 0] }
    }

    /// Credit one goal to `player`.
    pub fn credit(&mut self, player: Player) {
        self.goals[player.index()] += 1;
    }

    /// Total goals scored by both players.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.goals.iter().sum()
    }

    /// Reset to 0-0.
    pub fn clear(&mut self) {
        self.goals = [0, 0];
    }

    /// Iterate over `(Player, goals)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        Player::ALL.into_iter().map(|p| (p, self[p]))
    }
}

impl Index<Player> for Score {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.goals[player.index()]
    }
}

impl IndexMut<Player> for Score {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.goals[player.index()]
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self[Player::One], self[Player::Two])
    }
}
