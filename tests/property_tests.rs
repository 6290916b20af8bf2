//! Property tests over dealt games.
//!
//! Seeds and table sizes are generated; each game is driven turn by turn
//! and the table invariants are checked after every call.

use proptest::prelude::*;
use uno_engine::core::PlayerId;
use uno_engine::games::uno::UnoGame;
use uno_engine::{Card, GameConfig, DECK_SIZE};

fn dealt(player_count: usize, seed: u64) -> UnoGame {
    let mut game = UnoGame::with_config(GameConfig::new(player_count).with_seed(seed)).unwrap();
    game.initialize();
    game
}

fn follows(card: &Card, previous_top: &Card) -> bool {
    card.color == previous_top.color
        || matches!((card.value(), previous_top.value()), (Some(a), Some(b)) if a == b)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Deck + discard + hands is always the full deck.
    #[test]
    fn prop_conservation(player_count in 1usize..=14, seed in any::<u64>(), turns in 0usize..300) {
        let mut game = dealt(player_count, seed);
        prop_assert_eq!(game.state().total_cards(), DECK_SIZE);

        for _ in 0..turns {
            game.play_turn().unwrap();
            prop_assert_eq!(game.state().total_cards(), DECK_SIZE);
            prop_assert_eq!(game.snapshot().total_cards(), DECK_SIZE);
        }
    }

    /// Every card reaching the discard pile matches the previous top.
    #[test]
    fn prop_legal_plays(player_count in 1usize..=14, seed in any::<u64>(), turns in 0usize..300) {
        let mut game = dealt(player_count, seed);

        for _ in 0..turns {
            let previous_top = *game.state().top_card().unwrap();
            let discard_before = game.state().discard.len();
            let outcome = game.play_turn().unwrap();

            match outcome.played_card() {
                Some(card) => {
                    prop_assert!(follows(&card, &previous_top), "{} on {}", card, previous_top);
                    prop_assert_eq!(game.state().top_card(), Some(&card));
                    prop_assert_eq!(game.state().discard.len(), discard_before + 1);
                }
                None => prop_assert_eq!(game.state().discard.len(), discard_before),
            }
        }
    }

    /// Same seed and table size: same outcomes and same state strings.
    #[test]
    fn prop_determinism(player_count in 1usize..=14, seed in any::<u64>(), turns in 0usize..150) {
        let mut a = dealt(player_count, seed);
        let mut b = dealt(player_count, seed);
        prop_assert_eq!(a.state_string(), b.state_string());

        for _ in 0..turns {
            prop_assert_eq!(a.play_turn().unwrap(), b.play_turn().unwrap());
            prop_assert_eq!(a.state_string(), b.state_string());
        }
    }

    /// Game over exactly when some hand is empty; the winner is the lowest such seat.
    #[test]
    fn prop_termination(player_count in 1usize..=14, seed in any::<u64>(), turns in 0usize..400) {
        let mut game = dealt(player_count, seed);

        for _ in 0..turns {
            let empty: Vec<PlayerId> = game
                .state()
                .hands()
                .iter()
                .filter(|(_, hand)| hand.is_empty())
                .map(|(p, _)| p)
                .collect();

            prop_assert_eq!(game.is_game_over(), !empty.is_empty());
            prop_assert_eq!(game.winner(), empty.first().copied());

            if game.is_game_over() {
                break;
            }
            game.play_turn().unwrap();
        }
    }

    /// The turn always lands on a valid seat.
    #[test]
    fn prop_current_player_in_range(
        player_count in 1usize..=14,
        seed in any::<u64>(),
        turns in 0usize..200,
    ) {
        let mut game = dealt(player_count, seed);

        for _ in 0..turns {
            game.play_turn().unwrap();
            prop_assert!(game.state().current_player.index() < player_count);
        }
    }
}
