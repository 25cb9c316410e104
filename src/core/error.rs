use thiserror::Error;

use super::Card;

/// Reasons a two character card token couldn't be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardParseError {
    #[error("Card tokens are exactly two characters, got {0:?}")]
    WrongLength(String),
    #[error("Unable to parse value from {0:?}")]
    UnexpectedValueChar(char),
    #[error("Unable to parse suit from {0:?}")]
    UnexpectedSuitChar(char),
}

/// This is the core error type for the library.
/// It uses `thiserror` to provide readable error messages.
///
/// Nothing in here is retryable; each variant describes
/// input that can never succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Unable to parse card: {0}")]
    CardParse(#[from] CardParseError),
    #[error("Need {needed} cards from the deck but only {available} remain")]
    InsufficientDeck { needed: usize, available: usize },
    #[error("At least five cards are needed to score a hand, got {count}")]
    DegenerateInput { count: usize },
    #[error("Card used more than once {0}")]
    DuplicateCard(Card),
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Hole cards must be exactly two cards, got {0}")]
    InvalidHoleCards(usize),
    #[error("The board can hold at most five cards, got {0}")]
    InvalidBoard(usize),
    #[error("Equity needs at least one opponent")]
    NoOpponents,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
