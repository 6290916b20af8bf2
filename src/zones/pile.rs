//! Ordered card piles: the draw deck and the discard pile.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::rng::GameRng;

/// An ordered stack of cards.
///
/// Index 0 is the bottom, the last element is the top. Both push and
/// draw work on the top in O(1).
///
/// ```
/// use uno_engine::cards::{Card, Color};
/// use uno_engine::zones::Pile;
///
/// let mut pile = Pile::new();
/// pile.push_top(Card::number(Color::Red, 1));
/// pile.push_top(Card::number(Color::Blue, 2));
///
/// assert_eq!(pile.top_card(), Some(&Card::number(Color::Blue, 2)));
/// assert_eq!(pile.draw(), Some(Card::number(Color::Blue, 2)));
/// assert_eq!(pile.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pile from cards listed bottom to top.
    #[must_use]
    pub fn from_bottom_up(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Place a card on top.
    pub fn push_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card. `None` when empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Shuffle the whole pile in place.
    ///
    /// The cards are permuted as read from the top down, so the first
    /// element of the shuffled sequence becomes the new top.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.cards.reverse();
        rng.shuffle(&mut self.cards);
        self.cards.reverse();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
