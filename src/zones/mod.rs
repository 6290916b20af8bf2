//! Card containers.
//!
//! - `Pile`: ordered stack used for the draw deck and the discard pile
//! - `Hand`: a player's cards, iterated newest first
//!
//! Cards are copied between containers; nothing is shared.

pub mod hand;
pub mod pile;

pub use hand::Hand;
pub use pile::Pile;
