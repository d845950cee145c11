//! Cards on the board.
//!
//! A `Card` is a position on the board, the face value printed on it, and
//! whether that face is currently showing. Cards are created when a round
//! is dealt and are never moved afterwards, so the position doubles as
//! the card's identity.
//!
//! ```
//! use memory_match::core::{Card, CardId, CardStatus, Symbol};
//!
//! let card = Card::new(CardId::new(3), Symbol::from("A"));
//! assert_eq!(card.status, CardStatus::Hidden);
//! assert!(card.is_hidden());
//! ```

use serde::{Deserialize, Serialize};

/// Position of a card on the board (0-based, row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the board index of this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row and column of this card on a board with `columns` columns.
    ///
    /// ```
    /// use memory_match::core::CardId;
    ///
    /// assert_eq!(CardId::new(0).position(4), (0, 0));
    /// assert_eq!(CardId::new(6).position(4), (1, 2));
    /// ```
    #[must_use]
    pub const fn position(self, columns: usize) -> (usize, usize) {
        (self.index() / columns, self.index() % columns)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An opaque face value. Two cards match when their symbols are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The symbol's text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visibility of a card's face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, waiting for its pair to be decided.
    Revealed,
    /// Face up for the rest of the round.
    Matched,
}

/// A single card in a round's deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Board position.
    pub id: CardId,

    /// Face value.
    pub symbol: Symbol,

    /// Current visibility.
    pub status: CardStatus,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            status: CardStatus::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.status == CardStatus::Hidden
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.status == CardStatus::Matched
    }

    /// Whether this card shows the same face as `other`.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.symbol == other.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_starts_hidden() {
        let card = Card::new(CardId::new(0), Symbol::from("A"));
        assert!(card.is_hidden());
        assert!(!card.is_matched());
    }

    #[test]
    fn test_card_matches_on_symbol_only() {
        let a1 = Card::new(CardId::new(0), Symbol::from("A"));
        let mut a2 = Card::new(CardId::new(5), Symbol::from("A"));
        let b = Card::new(CardId::new(1), Symbol::from("B"));

        a2.status = CardStatus::Revealed;

        assert!(a1.matches(&a2));
        assert!(!a1.matches(&b));
    }

    #[test]
    fn test_card_id_position() {
        assert_eq!(CardId::new(15).position(4), (3, 3));
        assert_eq!(CardId::new(5).position(3), (1, 2));
    }

    #[test]
    fn test_symbol_serde_is_transparent() {
        let json = serde_json::to_string(&Symbol::from("🐶")).unwrap();
        assert_eq!(json, "\"🐶\"");
    }
}
