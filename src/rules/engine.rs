//! Rule policy trait.
//!
//! A `RuleSet` decides:
//! - Which hand cards may be played on the current top card
//! - What a played card does to turn order and hands
//! - Whether a card auto-played right after being drawn fires its effect
//!
//! The turn engine owns the state machine and calls into the rule set,
//! so a variant ruleset is a new `RuleSet` impl rather than a new engine.

use crate::cards::{Card, CardKind};

/// What a played card does once it lands on the discard pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Plain play: the turn passes to the next player.
    None,
    /// The next player loses their turn.
    Skip,
    /// Direction of play flips, then the turn passes.
    Reverse,
    /// The next player draws this many cards and loses their turn.
    DrawAndSkip(usize),
}

/// Rule policy consulted by the turn engine.
pub trait RuleSet {
    /// Can `card` be played on `top`?
    fn is_playable(&self, card: &Card, top: &Card) -> bool;

    /// Effect of playing `card`.
    fn effect(&self, card: &Card) -> Effect {
        match card.kind {
            CardKind::Number(_) => Effect::None,
            CardKind::Skip => Effect::Skip,
            CardKind::Reverse => Effect::Reverse,
            CardKind::DrawTwo => Effect::DrawAndSkip(2),
        }
    }

    /// Does a card played straight after being drawn fire its effect?
    fn auto_play_triggers_effects(&self) -> bool {
        false
    }
}

/// The standard table rules.
///
/// A card is playable when it shares the top card's color, or when both
/// are number cards with the same value. Action cards only match by
/// color. Auto-played cards never fire their effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardRules;

impl RuleSet for StandardRules {
    fn is_playable(&self, card: &Card, top: &Card) -> bool {
        if card.color == top.color {
            return true;
        }
        match (card.value(), top.value()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
