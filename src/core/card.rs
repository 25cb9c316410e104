use std::fmt;
use std::str::FromStr;

use super::error::{CardParseError, PokerError};

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    ///
    /// Anything above 12 is clamped to `Value::Ace`.
    ///
    /// ```
    /// use holdem_equity::core::Value;
    ///
    /// assert_eq!(Value::Two, Value::from_u8(0));
    /// assert_eq!(Value::Ace, Value::from_u8(12));
    /// ```
    pub fn from_u8(v: u8) -> Value {
        VALUES[usize::from(v.min(12))]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Given a character parse that char into a value.
    ///
    /// ```
    /// use holdem_equity::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('k'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// Convert this value to the char used in the text form of a card.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to give the deck
/// a canonical order.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Take a u8 and convert it to a suit.
    /// Anything above 3 is clamped to `Suit::Club`.
    pub fn from_u8(s: u8) -> Suit {
        SUITS[usize::from(s.min(3))]
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'd' => Some(Suit::Diamond),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Ordering is by value first and suit second, which
/// is also the canonical order of a fresh deck.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

/// Parse the two character text form of a card, `As`, `Td`, `2c`.
///
/// ```
/// use holdem_equity::core::{Card, Suit, Value};
///
/// let card: Card = "Kd".parse().unwrap();
/// assert_eq!(Card::new(Value::King, Suit::Diamond), card);
/// assert_eq!("Kd", card.to_string());
///
/// assert!("Kx".parse::<Card>().is_err());
/// assert!("K".parse::<Card>().is_err());
/// ```
impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(vc), Some(sc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardParseError::WrongLength(s.to_string()).into());
        };
        let value = Value::from_char(vc).ok_or(CardParseError::UnexpectedValueChar(vc))?;
        let suit = Suit::from_char(sc).ok_or(CardParseError::UnexpectedSuitChar(sc))?;
        Ok(Card { value, suit })
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parse a list of card tokens.
///
/// ```
/// use holdem_equity::core::parse_cards;
///
/// let board = parse_cards(&["Ah", "Kh", "2c"]).unwrap();
/// assert_eq!(3, board.len());
/// ```
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, PokerError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Spade);
        let c3 = Card::new(Value::Four, Suit::Club);

        assert!(c1 == c1);
        // Values order first
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Then suits
        assert!(c3 > c2);
    }

    #[test]
    fn test_value_cmp() {
        assert!(Value::Two < Value::Ace);
        assert!(Value::King < Value::Ace);
        assert_eq!(Value::Two, Value::Two);
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(Value::Two, Value::from_u8(0));
        assert_eq!(Value::Ace, Value::from_u8(12));
        assert_eq!(Value::Ace, Value::from_u8(200));
        assert_eq!(Suit::Club, Suit::from_u8(3));
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }

    #[test]
    fn test_text_round_trip_all_cards() {
        for v in Value::values() {
            for s in Suit::suits() {
                let c = Card::new(v, s);
                let parsed: Card = c.to_string().parse().unwrap();
                assert_eq!(c, parsed);
            }
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "Xs".parse::<Card>(),
            Err(PokerError::CardParse(CardParseError::UnexpectedValueChar('X')))
        ));
        assert!(matches!(
            "Ax".parse::<Card>(),
            Err(PokerError::CardParse(CardParseError::UnexpectedSuitChar('x')))
        ));
        assert!(matches!(
            "Asd".parse::<Card>(),
            Err(PokerError::CardParse(CardParseError::WrongLength(_)))
        ));
        assert!(matches!(
            "".parse::<Card>(),
            Err(PokerError::CardParse(CardParseError::WrongLength(_)))
        ));
        assert!(parse_cards(&["As", "10h"]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_text_form() {
        let c = Card::new(Value::Ten, Suit::Heart);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!("\"Th\"", json);
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
        assert!(serde_json::from_str::<Card>("\"1h\"").is_err());
    }
}
