use std::ops::Deref;

use super::{Card, CardParseError, PokerError, Suit, Value};

/// A small set of distinct cards, in the order they were added.
///
/// Used for hole cards, boards, and the seven card
/// hands that get scored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Build a hand from cards, rejecting any card seen twice.
    pub fn new_with_cards(cards: Vec<Card>) -> Result<Self, PokerError> {
        let mut hand = Self::new();
        for c in cards {
            if !hand.insert(c) {
                return Err(PokerError::DuplicateCard(c));
            }
        }
        Ok(hand)
    }

    /// Given a card, is it in the current hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Add a card. Returns false, leaving the hand untouched,
    /// when the card is already present.
    pub fn insert(&mut self, c: Card) -> bool {
        if self.contains(&c) {
            false
        } else {
            self.cards.push(c);
            true
        }
    }

    /// Remove a card from the hand
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::{Card, Hand, Suit, Value};
    ///
    /// let mut hand = Hand::new();
    ///
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// hand.insert(card);
    /// assert!(hand.contains(&card));
    ///
    /// assert!(hand.remove(&card));
    /// assert!(!hand.contains(&card));
    /// ```
    pub fn remove(&mut self, c: &Card) -> bool {
        match self.cards.iter().position(|x| x == c) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn truncate(&mut self, len: usize) {
        self.cards.truncate(len);
    }

    /// Parse a run of two character card tokens with no separators.
    ///
    /// ```
    /// use holdem_equity::core::Hand;
    ///
    /// let hand = Hand::new_from_str("AsKd2c").unwrap();
    /// assert_eq!(3, hand.len());
    /// assert!(Hand::new_from_str("AsAs").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerError> {
        let mut chars = hand_string.chars();
        let mut hand = Self::new();

        // Keep looping until we explicitly break
        while let Some(vc) = chars.next() {
            let sc = chars
                .next()
                .ok_or(PokerError::UnparsedCharsRemaining)?;
            let value = Value::from_char(vc).ok_or(CardParseError::UnexpectedValueChar(vc))?;
            let suit = Suit::from_char(sc).ok_or(CardParseError::UnexpectedSuitChar(sc))?;

            let c = Card { value, suit };
            if !hand.insert(c) {
                return Err(PokerError::DuplicateCard(c));
            }
        }

        Ok(hand)
    }
}

impl Deref for Hand {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.insert(card);
        }
    }
}

impl From<Hand> for Vec<Card> {
    fn from(val: Hand) -> Self {
        val.cards
    }
}
