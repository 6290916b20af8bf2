//! The standard 100-card deck.

use super::card::{Card, CardKind, Color};

/// Cards of one color: one 0, two each of 1-9, two Skip, two Reverse,
/// two DrawTwo.
const CARDS_PER_COLOR: usize = 1 + 2 * 9 + 2 * 3;

/// Cards in a freshly built deck.
pub const DECK_SIZE: usize = Color::ALL.len() * CARDS_PER_COLOR;

/// Build the unshuffled deck in enumeration order.
///
/// Colors in `Color::ALL` order; within a color the 0, then pairs of
/// 1 through 9, then the Skip, Reverse and DrawTwo pairs.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for color in Color::ALL {
        cards.push(Card::number(color, 0));

        for value in 1..=9 {
            cards.push(Card::number(color, value));
            cards.push(Card::number(color, value));
        }

        for kind in [CardKind::Skip, CardKind::Reverse, CardKind::DrawTwo] {
            cards.push(Card::new(color, kind));
            cards.push(Card::new(color, kind));
        }
    }

    debug_assert_eq!(cards.len(), DECK_SIZE);
    cards
}
