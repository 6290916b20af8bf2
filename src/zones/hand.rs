//! A player's hand.
//!
//! Hands iterate newest card first. The "first playable card" tie-break
//! depends on this order, so every lookup goes through `iter`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Cards held by one player.
///
/// Stored oldest to newest so adding is a push; iteration runs in
/// reverse to put the most recently added card first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 16]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card. It becomes the first card in iteration order.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate newest card first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().rev()
    }

    /// Does the hand hold a card structurally equal to `card`?
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// First card (newest first) matching `pred`.
    pub fn find(&self, mut pred: impl FnMut(&Card) -> bool) -> Option<&Card> {
        self.iter().find(|&c| pred(c))
    }

    /// Remove and return the first card (newest first) matching `pred`.
    ///
    /// Removes exactly that entry; other copies of an equal card stay.
    pub fn take_first(&mut self, mut pred: impl FnMut(&Card) -> bool) -> Option<Card> {
        let idx = self.cards.iter().rposition(|c| pred(c))?;
        Some(self.cards.remove(idx))
    }

    /// Remove and return the first card (newest first) equal to `card`.
    pub fn remove(&mut self, card: &Card) -> Option<Card> {
        self.take_first(|c| c == card)
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    /// Cards are added in iterator order, so the last one yielded is
    /// the newest.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
