//! Cards and the standard deck.
//!
//! ## Key Types
//!
//! - `Color`: one of the four suits
//! - `CardKind`: number (with face value) or one of the three actions
//! - `Card`: immutable color + kind pair
//! - `standard_deck`: the 100 cards in construction order

pub mod card;
pub mod deck;

pub use card::{Card, CardKind, Color};
pub use deck::{standard_deck, DECK_SIZE};
