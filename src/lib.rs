//! # uno-engine
//!
//! A deterministic UNO-style card game engine.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The deck is shuffled with a seeded MT19937 RNG
//!    using libstdc++'s `std::shuffle` draw sequence. Same seed and player
//!    count means the same game, turn for turn.
//!
//! 2. **Owned State**: Each `UnoGame` owns its deck, discard pile and hands.
//!    No globals, no sharing between games.
//!
//! 3. **Pluggable Rules**: Legality and card effects go through the
//!    `RuleSet` trait. The turn engine only owns turn order.
//!
//! ## Modules
//!
//! - `core`: Players, state, RNG, configuration, errors
//! - `cards`: Card values and the standard 100-card deck
//! - `zones`: Piles (deck, discard) and hands
//! - `rules`: `RuleSet` trait and the standard rules
//! - `games`: The UNO turn engine and state reporting

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameError, GameRng, GameState, PlayerId, PlayerMap, Result,
    DEFAULT_HAND_SIZE, DEFAULT_SEED,
};

pub use crate::cards::{standard_deck, Card, CardKind, Color, DECK_SIZE};

pub use crate::zones::{Hand, Pile};

pub use crate::rules::{Effect, RuleSet, StandardRules};

pub use crate::games::uno::{GameSnapshot, TurnOutcome, UnoGame};
