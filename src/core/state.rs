//! Table state for one game.
//!
//! ## GameState
//!
//! Everything a game mutates while it runs:
//! - Whose turn it is and which way play moves
//! - Draw deck and discard pile
//! - One hand per player
//! - The shuffle RNG
//!
//! A `GameState` is owned by exactly one engine. There is no shared or
//! global state between games.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::Card;
use crate::zones::{Hand, Pile};

/// Direction of play around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing seat index.
    #[default]
    Clockwise,
    /// Decreasing seat index.
    CounterClockwise,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    #[must_use]
    pub const fn is_clockwise(self) -> bool {
        matches!(self, Direction::Clockwise)
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Direction::Clockwise => "Clockwise",
            Direction::CounterClockwise => "Counter-clockwise",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Player whose turn it is.
    pub current_player: PlayerId,

    /// Current direction of play.
    pub direction: Direction,

    /// Draw deck (top = last card).
    pub deck: Pile,

    /// Discard pile (top = most recently played card).
    pub discard: Pile,

    /// Shuffle RNG.
    pub rng: GameRng,

    hands: PlayerMap<Hand>,
}

impl GameState {
    /// Create an empty table: no cards anywhere, player 0 to act, clockwise.
    #[must_use]
    pub fn new(player_count: usize, seed: u64) -> Self {
        Self {
            current_player: PlayerId::new(0),
            direction: Direction::Clockwise,
            deck: Pile::new(),
            discard: Pile::new(),
            rng: GameRng::new(seed),
            hands: PlayerMap::with_default(player_count),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    // === Hands ===

    /// Get a player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// Get a player's hand mutably.
    pub fn hand_mut(&mut self, player: PlayerId) -> &mut Hand {
        &mut self.hands[player]
    }

    /// All hands in seat order.
    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }

    /// Hand sizes in seat order.
    #[must_use]
    pub fn hand_sizes(&self) -> Vec<(PlayerId, usize)> {
        self.hands.iter().map(|(p, h)| (p, h.len())).collect()
    }

    /// Draw the deck's top card into a player's hand.
    ///
    /// Returns the drawn card, or `None` (and changes nothing) if the deck
    /// is empty.
    pub fn draw_to_hand(&mut self, player: PlayerId) -> Option<Card> {
        let card = self.deck.draw()?;
        self.hands[player].add(card);
        Some(card)
    }

    // === Turn order ===

    /// The seat `steps` places away from `from` in the current direction.
    #[must_use]
    pub fn seat_after(&self, from: PlayerId, steps: usize) -> PlayerId {
        let n = self.player_count() as isize;
        let steps = steps as isize;
        let from = from.index() as isize;

        let next = match self.direction {
            Direction::Clockwise => (from + steps).rem_euclid(n),
            Direction::CounterClockwise => (from - steps).rem_euclid(n),
        };
        PlayerId::new(next as u8)
    }

    /// The player who would act after the current one.
    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        self.seat_after(self.current_player, 1)
    }

    /// Move the turn `steps` seats along the current direction.
    pub fn advance(&mut self, steps: usize) {
        self.current_player = self.seat_after(self.current_player, steps);
    }

    /// Flip the direction of play.
    pub fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }

    // === Totals ===

    /// Top card of the discard pile.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.discard.top_card()
    }

    /// Cards across deck, discard pile and every hand.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.discard.len() + self.hands.values().map(Hand::len).sum::<usize>()
    }

    /// Lowest seat holding no cards.
    #[must_use]
    pub fn first_empty_hand(&self) -> Option<PlayerId> {
        self.hands
            .iter()
            .find(|(_, hand)| hand.is_empty())
            .map(|(p, _)| p)
    }

    /// Clear every container and return to player 0, clockwise.
    ///
    /// The RNG is reseeded so the next shuffle matches a fresh game.
    pub fn reset(&mut self, seed: u64) {
        self.current_player = PlayerId::new(0);
        self.direction = Direction::Clockwise;
        self.deck.clear();
        self.discard.clear();
        self.rng = GameRng::new(seed);
        for (_, hand) in self.hands.iter_mut() {
            hand.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    #[test]
    fn test_new_state() {
        let state = GameState::new(3, 1234);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.current_player, PlayerId::new(0));
        assert_eq!(state.direction, Direction::Clockwise);
        assert_eq!(state.total_cards(), 0);
        assert_eq!(state.top_card(), None);
    }

    #[test]
    fn test_seat_after_clockwise() {
        let state = GameState::new(4, 0);

        assert_eq!(state.seat_after(PlayerId::new(0), 1), PlayerId::new(1));
        assert_eq!(state.seat_after(PlayerId::new(3), 1), PlayerId::new(0));
        assert_eq!(state.seat_after(PlayerId::new(3), 2), PlayerId::new(1));
    }

    #[test]
    fn test_seat_after_counter_clockwise() {
        let mut state = GameState::new(4, 0);
        state.reverse();

        assert_eq!(state.seat_after(PlayerId::new(0), 1), PlayerId::new(3));
        assert_eq!(state.seat_after(PlayerId::new(1), 2), PlayerId::new(3));
        assert_eq!(state.seat_after(PlayerId::new(2), 2), PlayerId::new(0));
    }

    #[test]
    fn test_seat_after_small_tables() {
        let mut solo = GameState::new(1, 0);
        assert_eq!(solo.seat_after(PlayerId::new(0), 2), PlayerId::new(0));
        solo.reverse();
        assert_eq!(solo.seat_after(PlayerId::new(0), 2), PlayerId::new(0));

        let mut duo = GameState::new(2, 0);
        duo.reverse();
        assert_eq!(duo.seat_after(PlayerId::new(0), 1), PlayerId::new(1));
        assert_eq!(duo.seat_after(PlayerId::new(0), 2), PlayerId::new(0));
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::Clockwise.reversed(), Direction::CounterClockwise);
        assert_eq!(Direction::CounterClockwise.reversed(), Direction::Clockwise);
        assert!(Direction::Clockwise.is_clockwise());
        assert_eq!(Direction::CounterClockwise.to_string(), "Counter-clockwise");
    }

    #[test]
    fn test_draw_to_hand() {
        let mut state = GameState::new(2, 0);
        state.deck = Pile::from_bottom_up(vec![Card::number(Color::Red, 1)]);

        assert_eq!(state.draw_to_hand(PlayerId::new(1)), Some(Card::number(Color::Red, 1)));
        assert_eq!(state.hand(PlayerId::new(1)).len(), 1);

        // Empty deck: nothing happens
        assert_eq!(state.draw_to_hand(PlayerId::new(1)), None);
        assert_eq!(state.hand(PlayerId::new(1)).len(), 1);
        assert_eq!(state.total_cards(), 1);
    }

    #[test]
    fn test_first_empty_hand() {
        let mut state = GameState::new(3, 0);
        for player in PlayerId::all(3) {
            state.hand_mut(player).add(Card::number(Color::Red, 1));
        }
        assert_eq!(state.first_empty_hand(), None);

        state.hand_mut(PlayerId::new(2)).clear();
        state.hand_mut(PlayerId::new(1)).clear();
        assert_eq!(state.first_empty_hand(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::new(2, 0);
        state.hand_mut(PlayerId::new(0)).add(Card::skip(Color::Blue));
        state.discard.push_top(Card::skip(Color::Red));
        state.current_player = PlayerId::new(1);
        state.reverse();

        state.reset(5);

        assert_eq!(state.total_cards(), 0);
        assert_eq!(state.current_player, PlayerId::new(0));
        assert_eq!(state.direction, Direction::Clockwise);
        assert_eq!(state.rng.seed(), 5);
    }
}
