//! Card values.
//!
//! A `Card` is a plain `Copy` value: moving it between deck, hand and
//! discard pile copies it, so no two containers can ever share one.

use serde::{Deserialize, Serialize};

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// All colors in deck-construction order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What a card does when played.
///
/// Number cards carry their face value (0-9); action cards carry none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl CardKind {
    /// Is this an action card (Skip, Reverse, DrawTwo)?
    #[must_use]
    pub const fn is_action(self) -> bool {
        !matches!(self, CardKind::Number(_))
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Number(v) => write!(f, "{}", v),
            CardKind::Skip => f.write_str("Skip"),
            CardKind::Reverse => f.write_str("Reverse"),
            CardKind::DrawTwo => f.write_str("Draw Two"),
        }
    }
}

/// A single card. Equality is structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub kind: CardKind,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(color: Color, kind: CardKind) -> Self {
        Self { color, kind }
    }

    /// Create a number card.
    ///
    /// Panics if `value` is not in 0..=9.
    #[must_use]
    pub fn number(color: Color, value: u8) -> Self {
        assert!(value <= 9, "Number cards range from 0 to 9");
        Self::new(color, CardKind::Number(value))
    }

    #[must_use]
    pub const fn skip(color: Color) -> Self {
        Self::new(color, CardKind::Skip)
    }

    #[must_use]
    pub const fn reverse(color: Color) -> Self {
        Self::new(color, CardKind::Reverse)
    }

    #[must_use]
    pub const fn draw_two(color: Color) -> Self {
        Self::new(color, CardKind::DrawTwo)
    }

    /// Face value for number cards, `None` for action cards.
    #[must_use]
    pub const fn value(&self) -> Option<u8> {
        match self.kind {
            CardKind::Number(v) => Some(v),
            _ => None,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Card::number(Color::Red, 5).to_string(), "Red 5");
        assert_eq!(Card::skip(Color::Green).to_string(), "Green Skip");
        assert_eq!(Card::reverse(Color::Blue).to_string(), "Blue Reverse");
        assert_eq!(Card::draw_two(Color::Yellow).to_string(), "Yellow Draw Two");
    }

    #[test]
    fn test_value() {
        assert_eq!(Card::number(Color::Red, 0).value(), Some(0));
        assert_eq!(Card::number(Color::Red, 9).value(), Some(9));
        assert_eq!(Card::skip(Color::Red).value(), None);
        assert_eq!(Card::draw_two(Color::Red).value(), None);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Card::number(Color::Blue, 3), Card::number(Color::Blue, 3));
        assert_ne!(Card::number(Color::Blue, 3), Card::number(Color::Red, 3));
        assert_ne!(Card::skip(Color::Blue), Card::reverse(Color::Blue));
    }

    #[test]
    fn test_is_action() {
        assert!(!CardKind::Number(4).is_action());
        assert!(CardKind::Skip.is_action());
        assert!(CardKind::Reverse.is_action());
        assert!(CardKind::DrawTwo.is_action());
    }

    #[test]
    #[should_panic(expected = "Number cards range from 0 to 9")]
    fn test_number_out_of_range() {
        let _ = Card::number(Color::Red, 10);
    }

    #[test]
    fn test_serde_roundtrip() {
        let card = Card::draw_two(Color::Yellow);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
