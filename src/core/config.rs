//! Game configuration.
//!
//! A `GameConfig` fixes everything that shapes a game before the first
//! card is dealt: table size, shuffle seed and opening hand size.
//! Configs are plain values and are checked by `validate` when an engine
//! is built from them.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::cards::deck::DECK_SIZE;

/// Seed used when none is given. Every default game deals identically.
pub const DEFAULT_SEED: u64 = 1234;

/// Cards dealt to each player at the start of a game.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (at least 1).
    pub player_count: usize,

    /// Seed for the deck shuffle.
    pub seed: u64,

    /// Cards dealt to each player during `initialize`.
    pub hand_size: usize,
}

impl GameConfig {
    /// Create a configuration with the default seed and hand size.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            seed: DEFAULT_SEED,
            hand_size: DEFAULT_HAND_SIZE,
        }
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Largest table that can be dealt `hand_size` cards each and still
    /// leave one card to flip onto the discard pile.
    #[must_use]
    pub fn max_players(&self) -> usize {
        if self.hand_size == 0 {
            return 255;
        }
        ((DECK_SIZE - 1) / self.hand_size).min(255)
    }

    /// Check that a full deal is possible with this configuration.
    pub fn validate(&self) -> Result<()> {
        if self.hand_size == 0 || self.hand_size >= DECK_SIZE {
            return Err(GameError::InvalidHandSize {
                size: self.hand_size,
                max: DECK_SIZE - 1,
            });
        }

        let max = self.max_players();
        if self.player_count == 0 || self.player_count > max {
            return Err(GameError::InvalidPlayerCount {
                count: self.player_count,
                max,
            });
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(2)
    }
}
