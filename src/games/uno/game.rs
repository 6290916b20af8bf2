//! UNO turn engine.

use serde::Serialize;
use tracing::{debug, info, trace};

use super::report::GameSnapshot;
use crate::cards::{standard_deck, Card};
use crate::core::{GameConfig, GameError, GameState, PlayerId, Result};
use crate::rules::{Effect, RuleSet, StandardRules};
use crate::zones::Pile;

/// What happened during one call to `play_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TurnOutcome {
    /// The player played a card from their hand.
    Played { player: PlayerId, card: Card },
    /// Nothing was playable; the drawn card was playable and went
    /// straight to the discard pile.
    DrewAndAutoPlayed { player: PlayerId, card: Card },
    /// Nothing was playable and neither was the drawn card.
    DrewAndPassed { player: PlayerId, card: Card },
    /// Nothing was playable and the deck was empty.
    Passed { player: PlayerId },
}

impl TurnOutcome {
    /// The player who took the turn.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            TurnOutcome::Played { player, .. }
            | TurnOutcome::DrewAndAutoPlayed { player, .. }
            | TurnOutcome::DrewAndPassed { player, .. }
            | TurnOutcome::Passed { player } => player,
        }
    }

    /// The card that reached the discard pile this turn, if any.
    #[must_use]
    pub fn played_card(&self) -> Option<Card> {
        match *self {
            TurnOutcome::Played { card, .. } | TurnOutcome::DrewAndAutoPlayed { card, .. } => {
                Some(card)
            }
            _ => None,
        }
    }
}

/// One game of UNO.
///
/// Owns the deck, discard pile and every hand. Each player plays the
/// first legal card in their hand, otherwise draws one card and plays it
/// if it is legal.
///
/// ## Usage
///
/// ```
/// use uno_engine::games::uno::UnoGame;
///
/// let mut game = UnoGame::new(2).unwrap();
/// game.initialize();
///
/// while !game.is_game_over() && !game.state().deck.is_empty() {
///     game.play_turn().unwrap();
/// }
/// assert_eq!(game.state().total_cards(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct UnoGame<R: RuleSet = StandardRules> {
    config: GameConfig,
    rules: R,
    state: GameState,
}

impl UnoGame<StandardRules> {
    /// Create a game for `player_count` players with the default seed.
    pub fn new(player_count: usize) -> Result<Self> {
        Self::with_config(GameConfig::new(player_count))
    }

    /// Create a game from a configuration.
    pub fn with_config(config: GameConfig) -> Result<Self> {
        Self::with_rules(config, StandardRules)
    }

    /// Resume from an arranged table.
    ///
    /// The game counts as initialized once the discard pile has a card.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self::from_state_with_rules(state, StandardRules)
    }
}

impl<R: RuleSet> UnoGame<R> {
    /// Create a game with a custom rule set.
    pub fn with_rules(config: GameConfig, rules: R) -> Result<Self> {
        config.validate()?;
        let state = GameState::new(config.player_count, config.seed);

        Ok(Self {
            config,
            rules,
            state,
        })
    }

    /// Resume from an arranged table with a custom rule set.
    #[must_use]
    pub fn from_state_with_rules(state: GameState, rules: R) -> Self {
        let config = GameConfig::new(state.player_count()).with_seed(state.rng.seed());

        Self {
            config,
            rules,
            state,
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the rule set.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Read-only view of the table.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Build, shuffle, deal and flip.
    ///
    /// Any earlier game on this engine is thrown away. With the same seed
    /// the deal is identical every time.
    pub fn initialize(&mut self) {
        let player_count = self.config.player_count;
        self.state.reset(self.config.seed);

        let mut deck = Pile::from_bottom_up(standard_deck());
        deck.shuffle(&mut self.state.rng);
        self.state.deck = deck;

        // One card at a time around the table
        for _ in 0..self.config.hand_size {
            for player in PlayerId::all(player_count) {
                self.state.draw_to_hand(player);
            }
        }

        if let Some(card) = self.state.deck.draw() {
            self.state.discard.push_top(card);
        }

        info!(
            players = player_count,
            seed = self.config.seed,
            deck = self.state.deck.len(),
            "game initialized, top card {}",
            DisplayTop(self.state.top_card())
        );
    }

    /// Resolve one turn for the current player.
    ///
    /// Fails only if the game has not been initialized.
    pub fn play_turn(&mut self) -> Result<TurnOutcome> {
        let top = *self.state.top_card().ok_or(GameError::NotInitialized)?;
        let player = self.state.current_player;
        let rules = &self.rules;

        if let Some(card) = self
            .state
            .hand_mut(player)
            .take_first(|c| rules.is_playable(c, &top))
        {
            self.state.discard.push_top(card);
            debug!(%player, %card, "played");

            let effect = self.rules.effect(&card);
            self.apply_effect(effect);
            self.log_winner();
            return Ok(TurnOutcome::Played { player, card });
        }

        let outcome = match self.state.draw_to_hand(player) {
            None => {
                debug!(%player, "deck empty, passed");
                TurnOutcome::Passed { player }
            }
            Some(drawn) if self.rules.is_playable(&drawn, &top) => {
                match self.state.hand_mut(player).remove(&drawn) {
                    Some(card) => {
                        self.state.discard.push_top(card);
                        debug!(%player, %card, "drew and played");

                        if self.rules.auto_play_triggers_effects() {
                            let effect = self.rules.effect(&card);
                            self.apply_effect(effect);
                            self.log_winner();
                            return Ok(TurnOutcome::DrewAndAutoPlayed { player, card });
                        }
                        TurnOutcome::DrewAndAutoPlayed { player, card }
                    }
                    None => TurnOutcome::DrewAndPassed { player, card: drawn },
                }
            }
            Some(drawn) => {
                debug!(%player, card = %drawn, "drew and passed");
                TurnOutcome::DrewAndPassed { player, card: drawn }
            }
        };

        self.apply_effect(Effect::None);
        Ok(outcome)
    }

    /// Apply a played card's effect and move the turn on.
    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => self.state.advance(1),
            Effect::Skip => self.state.advance(2),
            Effect::Reverse => {
                self.state.reverse();
                trace!(direction = %self.state.direction, "direction reversed");
                self.state.advance(1);
            }
            Effect::DrawAndSkip(count) => {
                let target = self.state.next_player();
                let drawn = (0..count)
                    .map_while(|_| self.state.draw_to_hand(target))
                    .count();
                debug!(player = %target, drawn, "forced draw");
                self.state.advance(2);
            }
        }
        trace!(next = %self.state.current_player, "turn advanced");
    }

    fn log_winner(&self) {
        if let Some(winner) = self.winner() {
            info!(%winner, "hand emptied, game over");
        }
    }

    /// Has any player emptied their hand?
    ///
    /// Always false before `initialize`.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Lowest seat with an empty hand, or `None` while the game continues.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.top_card()?;
        self.state.first_empty_hand()
    }

    /// Read-only projection of the table.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state)
    }

    /// Human-readable one-line summary of the table.
    #[must_use]
    pub fn state_string(&self) -> String {
        self.snapshot().to_string()
    }
}

struct DisplayTop<'a>(Option<&'a Card>);

impl std::fmt::Display for DisplayTop<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(card) => write!(f, "{}", card),
            None => f.write_str("none"),
        }
    }
}
