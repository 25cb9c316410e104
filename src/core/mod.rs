//! This is the core module. It exports the cards, decks, and hand
//! scoring that everything else builds on.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value, parse_cards};

/// The error type shared by the whole crate.
mod error;
pub use self::error::{CardParseError, PokerError};

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck` and the residual deck builder.
pub use self::deck::{Deck, build_deck};

/// Flattened deck
mod flat_deck;
/// Export the shuffle and deal friendly deck.
pub use self::flat_deck::FlatDeck;

/// Seven card hand scoring code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{HandScore, Rankable, Tier, score};
