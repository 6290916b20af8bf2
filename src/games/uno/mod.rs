//! UNO with the four basic card types.
//!
//! - 100-card deck: per color one 0, two each of 1-9, two Skip, two
//!   Reverse, two DrawTwo
//! - 7 cards dealt to each player, one card flipped to start the pile
//! - Play the first legal card in hand, otherwise draw one and play it
//!   if legal
//! - First player to empty their hand wins
//!
//! Supports 1-14 players with the default hand size.

mod game;
mod report;

pub use game::{TurnOutcome, UnoGame};
pub use report::GameSnapshot;
