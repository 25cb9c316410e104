use std::fmt;

use super::{Card, Hand, PokerError, Value};

/// The top level category of a hand. This is the
/// first thing compared when two hands meet.
///
/// Only straights, flushes, straight flushes and high
/// cards carry a tiebreak. Every other tier treats
/// all of its hands as equal.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tier {
    /// Nothing better.
    HighCard = 0,
    /// One Card matches another.
    OnePair = 1,
    /// Two different pairs of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence. Ace low is not a straight.
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and at least two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// A straight and a flush in the same cards, not
    /// necessarily made from the same five cards.
    StraightFlush = 8,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::HighCard => "HighCard",
            Tier::OnePair => "OnePair",
            Tier::TwoPair => "TwoPair",
            Tier::ThreeOfAKind => "ThreeOfAKind",
            Tier::Straight => "Straight",
            Tier::Flush => "Flush",
            Tier::FullHouse => "FullHouse",
            Tier::FourOfAKind => "FourOfAKind",
            Tier::StraightFlush => "StraightFlush",
        };
        f.write_str(name)
    }
}

/// Score of the best hand found in a set of cards.
///
/// Ordering is lexicographic over the tier and then the tiebreak.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandScore {
    tier: Tier,
    tiebreak: Vec<Value>,
}

impl HandScore {
    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn tiebreak(&self) -> &[Value] {
        &self.tiebreak
    }

    fn bare(tier: Tier) -> Self {
        Self {
            tier,
            tiebreak: Vec::new(),
        }
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tier)?;
        if !self.tiebreak.is_empty() {
            let values: Vec<String> = self.tiebreak.iter().map(|v| v.to_string()).collect();
            write!(f, "({})", values.join(", "))?;
        }
        Ok(())
    }
}

/// Five bits in a row, shifted up to the top of each straight.
const STRAIGHT_MASK: u16 = 0b1_1111;

/// Find the top value of the highest run of five
/// distinct values. The wheel is never found.
fn find_straight(value_set: u16) -> Option<Value> {
    (4..=Value::Ace as u8).rev().find_map(|top| {
        let mask = STRAIGHT_MASK << (top - 4);
        ((value_set & mask) == mask).then(|| Value::from_u8(top))
    })
}

/// Score any set of at least five cards.
///
/// ```
/// use holdem_equity::core::{Tier, parse_cards, score};
///
/// let cards = parse_cards(&["As", "Ad", "Kh", "Kc", "Ks", "2d", "7h"]).unwrap();
/// assert_eq!(Tier::FullHouse, score(&cards).unwrap().tier());
/// ```
pub fn score(cards: &[Card]) -> Result<HandScore, PokerError> {
    if cards.len() < 5 {
        return Err(PokerError::DegenerateInput { count: cards.len() });
    }

    let mut value_counts = [0usize; 13];
    let mut suit_counts = [0usize; 4];
    let mut value_set: u16 = 0;
    for c in cards {
        value_counts[c.value as usize] += 1;
        suit_counts[c.suit as usize] += 1;
        value_set |= 1 << (c.value as u16);
    }

    let mut counts = value_counts;
    counts.sort_unstable_by(|a, b| b.cmp(a));
    let (top, second) = (counts[0], counts[1]);

    let is_flush = suit_counts.iter().any(|&n| n >= 5);
    let straight = find_straight(value_set);

    let descending = || {
        let mut values: Vec<Value> = cards.iter().map(|c| c.value).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values
    };

    let hand_score = match (straight, is_flush) {
        (Some(high), true) => HandScore {
            tier: Tier::StraightFlush,
            tiebreak: vec![high],
        },
        _ if top == 4 => HandScore::bare(Tier::FourOfAKind),
        _ if top == 3 && second >= 2 => HandScore::bare(Tier::FullHouse),
        (_, true) => HandScore {
            tier: Tier::Flush,
            tiebreak: descending(),
        },
        (Some(high), false) => HandScore {
            tier: Tier::Straight,
            tiebreak: vec![high],
        },
        _ if top == 3 => HandScore::bare(Tier::ThreeOfAKind),
        _ if top == 2 && second == 2 => HandScore::bare(Tier::TwoPair),
        _ if top == 2 => HandScore::bare(Tier::OnePair),
        _ => HandScore {
            tier: Tier::HighCard,
            tiebreak: descending(),
        },
    };
    Ok(hand_score)
}

/// Can this turn into a hand score?
pub trait Rankable {
    fn score(&self) -> Result<HandScore, PokerError>;
}

impl Rankable for [Card] {
    fn score(&self) -> Result<HandScore, PokerError> {
        score(self)
    }
}

impl Rankable for Vec<Card> {
    fn score(&self) -> Result<HandScore, PokerError> {
        score(self)
    }
}

/// Implementation for `Hand`
impl Rankable for Hand {
    /// Score this hand. It doesn't do any caching so it's left up to the user
    /// to understand that duplicate work will be done if this is called more than once.
    fn score(&self) -> Result<HandScore, PokerError> {
        score(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hs(s: &str) -> HandScore {
        Hand::new_from_str(s).unwrap().score().unwrap()
    }

    #[test]
    fn test_tier_cmp() {
        assert!(Tier::HighCard < Tier::StraightFlush);
        assert!(Tier::HighCard < Tier::FourOfAKind);
        assert!(Tier::HighCard < Tier::ThreeOfAKind);
        assert!(Tier::Flush < Tier::FullHouse);
        assert_eq!(8, Tier::StraightFlush as u8);
        assert_eq!(6, Tier::FullHouse as u8);
    }

    #[test]
    fn test_too_few_cards() {
        let hand = Hand::new_from_str("AsKsQsJs").unwrap();
        assert_eq!(Err(PokerError::DegenerateInput { count: 4 }), hand.score());
        assert_eq!(Err(PokerError::DegenerateInput { count: 0 }), score(&[]));
    }

    #[test]
    fn test_high_card_hand() {
        let score = hs("Ad8h9cTc5c");
        assert_eq!(Tier::HighCard, score.tier());
        assert_eq!(
            &[Value::Ace, Value::Ten, Value::Nine, Value::Eight, Value::Five],
            score.tiebreak()
        );
    }

    #[test]
    fn test_flush() {
        let score = hs("Ad8d9dTd5d");
        assert_eq!(Tier::Flush, score.tier());
        assert_eq!(
            &[Value::Ace, Value::Ten, Value::Nine, Value::Eight, Value::Five],
            score.tiebreak()
        );
    }

    #[test]
    fn test_flush_tiebreak_keeps_every_card() {
        // The off suit cards are part of the tiebreak too.
        let score = hs("Ad8d9dTd5d5s2c");
        assert_eq!(Tier::Flush, score.tier());
        assert_eq!(7, score.tiebreak().len());
        assert_eq!(Value::Five, score.tiebreak()[4]);
        assert_eq!(Value::Five, score.tiebreak()[5]);
    }

    #[test]
    fn test_full_house() {
        assert_eq!(Tier::FullHouse, hs("AdAc9d9c9s").tier());
        // Two sets of trips is still a full house.
        assert_eq!(Tier::FullHouse, hs("AdAcAs9d9c9s2h").tier());
    }

    #[test]
    fn test_two_pair() {
        assert_eq!(Tier::TwoPair, hs("AdAc9d9cTs").tier());
        // Three pairs.
        assert_eq!(Tier::TwoPair, hs("AdAc9d9cTsTh2c").tier());
    }

    #[test]
    fn test_one_pair() {
        assert_eq!(Tier::OnePair, hs("AdAc9d8cTs").tier());
    }

    #[test]
    fn test_three_of_a_kind() {
        assert_eq!(Tier::ThreeOfAKind, hs("2c2s2h5s6d").tier());
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(Tier::FourOfAKind, hs("AdAcAsAhTs").tier());
        // Quads beat the full house that is also in the cards.
        assert_eq!(Tier::FourOfAKind, hs("AdAcAsAhTsTdTc").tier());
    }

    #[test]
    fn test_straight() {
        let score = hs("2c3s4h5s6d");
        assert_eq!(Tier::Straight, score.tier());
        assert_eq!(&[Value::Six], score.tiebreak());
    }

    #[test]
    fn test_straight_uses_highest_run() {
        let score = hs("2c3s4h5s6d7h8c");
        assert_eq!(Tier::Straight, score.tier());
        assert_eq!(&[Value::Eight], score.tiebreak());

        // The ace isn't part of the straight.
        let score = hs("2c3s4h5s6dAh");
        assert_eq!(&[Value::Six], score.tiebreak());
    }

    #[test]
    fn test_straight_with_paired_values() {
        let score = hs("9c9sTdJhQsKd");
        assert_eq!(Tier::Straight, score.tier());
        assert_eq!(&[Value::King], score.tiebreak());
    }

    #[test]
    fn test_broadway() {
        assert_eq!(Tier::Straight, hs("TsJdQhKcAs").tier());
        assert_eq!(Tier::StraightFlush, hs("TsJsQsKsAs").tier());
    }

    #[test]
    fn test_wheel_is_not_a_straight() {
        let score = hs("Ad2c3s4h5s");
        assert_eq!(Tier::HighCard, score.tier());
        assert_ne!(Tier::Straight, score.tier());

        let score = hs("Ad2d3d4d5d");
        assert_eq!(Tier::Flush, score.tier());
    }

    #[test]
    fn test_straight_flush() {
        let score = hs("2h3h4h5h6h");
        assert_eq!(Tier::StraightFlush, score.tier());
        assert_eq!(&[Value::Six], score.tiebreak());
    }

    #[test]
    fn test_straight_and_flush_in_different_cards() {
        // The straight is 5-9 off suit, the flush is in hearts.
        let score = hs("5h6s7d8c9hKhAh2h");
        assert_eq!(Tier::StraightFlush, score.tier());
    }

    #[test]
    fn test_straight_flush_beats_quads() {
        let straight_flush = hs("2h3h4h5h6h");
        let quads = hs("AhAdAcAsKh");
        assert!(straight_flush > quads);
        assert!(straight_flush.tier() as u8 > quads.tier() as u8);
    }

    #[test]
    fn test_ordering_with_tiebreaks() {
        // Ordered weakest to strongest.
        let ordered = [
            "2c3d4h5s7c",
            "2c3d4h6s8c",
            "9c3d4h6sKc",
            "9cJd4h6sAc",
            "2c3s4h5s6d",
            "6c7s8h9sTd",
            "TsJdQhKcAs",
            "2d4d5d6d8d",
            "2d4d5d6dKd",
            "3h4h5h9hAh",
            "2h3h4h5h6h",
            "9cTcJcQcKc",
            "TsJsQsKsAs",
        ];
        let scores: Vec<HandScore> = ordered.iter().map(|s| hs(s)).collect();
        for w in scores.windows(2) {
            assert!(w[0] < w[1], "{} should lose to {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_equal_high_cards_tie() {
        assert_eq!(hs("As9d7h4c2s"), hs("Ad9c7s4h2d"));
        assert_eq!(hs("2c3s4h5s6d"), hs("2d3d4c5h6s"));
    }

    #[test]
    fn test_no_tiebreak_tiers_tie_on_kickers() {
        // Pairs and sets don't look at the pair value or the kickers.
        assert_eq!(hs("AdAc9d8cTs"), hs("2d2c3d4c7s"));
        assert_eq!(hs("AdAcKdKcQs"), hs("3d3c2d2c4s"));
        assert_eq!(hs("AdAcAh8cTs"), hs("2d2c2h4c7s"));
        assert_eq!(hs("AdAcAhKcKs"), hs("2d2c2h3c3s"));
        assert_eq!(hs("AdAcAhAsKs"), hs("2d2c2h2s3s"));
        assert!(hs("AdAcKdKcQs").tiebreak().is_empty());
    }

    #[test]
    fn test_duplicates_are_classified_not_rejected() {
        // Five copies of one card count as five hearts.
        let cards = vec!["Ah".parse::<Card>().unwrap(); 5];
        assert_eq!(Tier::Flush, cards.score().unwrap().tier());
    }

    #[test]
    fn test_many_duplicates_do_not_overflow_counts() {
        let cards = vec!["Ah".parse::<Card>().unwrap(); 300];
        let hand_score = cards.score().unwrap();
        assert_eq!(Tier::Flush, hand_score.tier());
        assert_eq!(300, hand_score.tiebreak().len());
    }

    #[test]
    fn test_display() {
        assert_eq!("Straight(6)", hs("2c3s4h5s6d").to_string());
        assert_eq!("OnePair", hs("AdAc9d8cTs").to_string());
    }
}
