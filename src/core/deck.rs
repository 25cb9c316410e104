use crate::core::card::{Card, Suit, Value};
use crate::core::flat_deck::FlatDeck;
use std::collections::HashSet;
use std::collections::hash_set::{IntoIter, Iter};

/// Deck struct that can tell quickly if a card is in the deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage.
    /// Used to figure out quickly
    /// if this card is in the deck.
    cards: HashSet<Card>,
}

impl Deck {
    /// Create a new empty deck.
    pub fn new() -> Self {
        Self {
            cards: HashSet::new(),
        }
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }
    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        self.cards.remove(c)
    }
    /// Add a card back to the deck.
    pub fn insert(&mut self, c: Card) -> bool {
        self.cards.insert(c)
    }
    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    /// Get an iterator from this deck
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use holdem_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        let cards = Value::values()
            .into_iter()
            .flat_map(|v| Suit::suits().into_iter().map(move |s| Card::new(v, s)))
            .collect();
        Self { cards }
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> IntoIter<Card> {
        self.cards.into_iter()
    }
}

/// Build the residual deck once the `excluded` cards are known.
///
/// The result is always in the canonical order, values
/// ascending and suits inside each value. Excluded cards
/// that are repeated, or were never in the deck, are ignored.
///
/// ```
/// use holdem_equity::core::{build_deck, parse_cards};
///
/// let known = parse_cards(&["As", "Kd", "Ah"]).unwrap();
/// let deck = build_deck(&known);
/// assert_eq!(49, deck.len());
/// ```
pub fn build_deck(excluded: &[Card]) -> FlatDeck {
    let mut deck = Deck::default();
    for c in excluded {
        deck.remove(c);
    }
    deck.into()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::card::*;

    #[test]
    fn test_contains_in() {
        let d = Deck::default();
        assert!(d.contains(&Card {
            value: Value::Eight,
            suit: Suit::Heart,
        }));
    }

    #[test]
    fn test_remove() {
        let mut d = Deck::default();
        let c = Card {
            value: Value::Ace,
            suit: Suit::Heart,
        };
        assert!(d.contains(&c));
        assert!(d.remove(&c));
        assert!(!d.contains(&c));
        assert!(!d.remove(&c));
        assert!(d.insert(c));
        assert_eq!(52, d.len());
    }

    #[test]
    fn test_build_deck_excludes_known() {
        let excluded = parse_cards(&["As", "Kd", "2c", "Th", "7s"]).unwrap();
        let deck = build_deck(&excluded);

        assert_eq!(52 - excluded.len(), deck.len());
        for c in &excluded {
            assert!(!deck[..].contains(c));
        }

        let unique: HashSet<Card> = deck[..].iter().copied().collect();
        assert_eq!(unique.len(), deck.len());
    }

    #[test]
    fn test_build_deck_every_single_exclusion() {
        for v in Value::values() {
            for s in Suit::suits() {
                let c = Card::new(v, s);
                let deck = build_deck(&[c]);
                assert_eq!(51, deck.len());
                assert!(!deck[..].contains(&c));
            }
        }
    }

    #[test]
    fn test_build_deck_random_exclusion_sets() {
        let mut rng = StdRng::seed_from_u64(7);
        for round in 0..200 {
            let mut shuffled: FlatDeck = Deck::default().into();
            shuffled.shuffle(&mut rng);
            let excluded = shuffled[..round % 53].to_vec();

            let deck = build_deck(&excluded);
            assert_eq!(52 - excluded.len(), deck.len());
            let remaining: HashSet<Card> = deck[..].iter().copied().collect();
            assert_eq!(deck.len(), remaining.len());
            for v in Value::values() {
                for s in Suit::suits() {
                    let c = Card::new(v, s);
                    assert_ne!(excluded.contains(&c), remaining.contains(&c));
                }
            }
        }
    }

    #[test]
    fn test_build_deck_ignores_repeats() {
        let c = Card::new(Value::Queen, Suit::Diamond);
        let deck = build_deck(&[c, c, c]);
        assert_eq!(51, deck.len());
    }

    #[test]
    fn test_build_deck_canonical_order() {
        let deck = build_deck(&[]);
        assert_eq!(52, deck.len());
        assert_eq!(Card::new(Value::Two, Suit::Spade), deck[0]);
        assert_eq!(Card::new(Value::Two, Suit::Heart), deck[1]);
        assert_eq!(Card::new(Value::Two, Suit::Club), deck[3]);
        assert_eq!(Card::new(Value::Three, Suit::Spade), deck[4]);
        assert_eq!(Card::new(Value::Ace, Suit::Club), deck[51]);

        // Same input always gives the same order.
        let known = parse_cards(&["9h", "3c"]).unwrap();
        assert_eq!(build_deck(&known), build_deck(&known));
        assert!(deck[..].windows(2).all(|w| w[0] < w[1]));
    }
}
