//! Read-only game snapshots.

use serde::Serialize;

use crate::cards::Card;
use crate::core::{Direction, GameState, PlayerId};

/// Point-in-time view of a table.
///
/// Capturing a snapshot never touches the game, so it can be taken any
/// number of times between turns. `Display` renders the one-line form:
///
/// ```text
/// Player 0's turn, Direction: Clockwise, Top: Red 5, Players cards: P0:7, P1:7
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub current_player: PlayerId,
    pub direction: Direction,
    pub top_card: Option<Card>,
    /// (seat, card count) in seat order.
    pub hand_sizes: Vec<(PlayerId, usize)>,
    pub deck_size: usize,
    pub discard_size: usize,
}

impl GameSnapshot {
    /// Capture the current table.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            current_player: state.current_player,
            direction: state.direction,
            top_card: state.top_card().copied(),
            hand_sizes: state.hand_sizes(),
            deck_size: state.deck.len(),
            discard_size: state.discard.len(),
        }
    }

    /// Cards across deck, discard pile and hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck_size + self.discard_size + self.hand_sizes.iter().map(|(_, n)| n).sum::<usize>()
    }
}

impl std::fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player {}'s turn, Direction: {}, ",
            self.current_player.0, self.direction
        )?;

        match &self.top_card {
            Some(card) => write!(f, "Top: {}, ", card)?,
            None => f.write_str("Top: none, ")?,
        }

        f.write_str("Players cards: ")?;
        for (i, (player, count)) in self.hand_sizes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "P{}:{}", player.0, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    #[test]
    fn test_display_format() {
        let mut state = GameState::new(2, 0);
        state.discard.push_top(Card::number(Color::Red, 5));
        for _ in 0..7 {
            state.hand_mut(PlayerId::new(0)).add(Card::number(Color::Blue, 1));
            state.hand_mut(PlayerId::new(1)).add(Card::number(Color::Blue, 2));
        }

        let snapshot = GameSnapshot::capture(&state);

        assert_eq!(
            snapshot.to_string(),
            "Player 0's turn, Direction: Clockwise, Top: Red 5, Players cards: P0:7, P1:7"
        );
    }

    #[test]
    fn test_display_action_and_direction() {
        let mut state = GameState::new(3, 0);
        state.discard.push_top(Card::draw_two(Color::Yellow));
        state.current_player = PlayerId::new(2);
        state.reverse();
        state.hand_mut(PlayerId::new(1)).add(Card::skip(Color::Green));

        let snapshot = GameSnapshot::capture(&state);

        assert_eq!(
            snapshot.to_string(),
            concat!(
                "Player 2's turn, Direction: Counter-clockwise, Top: Yellow Draw Two, ",
                "Players cards: P0:0, P1:1, P2:0"
            )
        );
    }

    #[test]
    fn test_capture_counts() {
        let mut state = GameState::new(2, 0);
        state.deck.push_top(Card::number(Color::Red, 1));
        state.deck.push_top(Card::number(Color::Red, 2));
        state.discard.push_top(Card::number(Color::Red, 3));

        let snapshot = GameSnapshot::capture(&state);

        assert_eq!(snapshot.deck_size, 2);
        assert_eq!(snapshot.discard_size, 1);
        assert_eq!(snapshot.total_cards(), 3);
    }

    #[test]
    fn test_empty_table() {
        let state = GameState::new(1, 0);
        let snapshot = GameSnapshot::capture(&state);

        assert_eq!(snapshot.top_card, None);
        assert!(snapshot.to_string().contains("Top: none"));
    }

    #[test]
    fn test_json() {
        let mut state = GameState::new(2, 0);
        state.discard.push_top(Card::skip(Color::Blue));

        let json = serde_json::to_value(GameSnapshot::capture(&state)).unwrap();

        assert_eq!(json["current_player"], 0);
        assert_eq!(json["direction"], "Clockwise");
        assert_eq!(json["top_card"]["color"], "Blue");
        assert_eq!(json["hand_sizes"][1][1], 0);
    }
}
