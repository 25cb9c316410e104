use crate::core::card::Card;
use crate::core::deck::Deck;
use std::ops::{Index, RangeFull, RangeTo};

use rand::Rng;
use rand::seq::SliceRandom;

/// The residual deck a simulation deals from.
///
/// Built in canonical order from a `Deck`; shuffle it with a caller
/// supplied rng before dealing. Cards come off the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatDeck {
    cards: Vec<Card>,
}

impl FlatDeck {
    /// Cards left to deal.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Put the remaining cards in a random order drawn from `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Take the next card, or `None` once the deck runs out.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

impl Index<usize> for FlatDeck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Index<RangeTo<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}

impl Index<RangeFull> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl From<Deck> for FlatDeck {
    /// Sorted, so equal decks always flatten to the same order.
    fn from(value: Deck) -> Self {
        let mut cards: Vec<Card> = value.into_iter().collect();
        cards.sort();
        Self { cards }
    }
}
