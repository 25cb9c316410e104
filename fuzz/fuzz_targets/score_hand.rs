#![no_main]

use holdem_equity::core::{Card, PokerError, Tier, score};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|cards: Vec<Card>| {
    match score(&cards) {
        Ok(hand_score) => {
            assert!(cards.len() >= 5);
            // Only the tiers with a tiebreak carry one.
            match hand_score.tier() {
                Tier::HighCard | Tier::Flush => {
                    assert_eq!(cards.len(), hand_score.tiebreak().len())
                }
                Tier::Straight | Tier::StraightFlush => {
                    assert_eq!(1, hand_score.tiebreak().len())
                }
                _ => assert!(hand_score.tiebreak().is_empty()),
            }
        }
        Err(PokerError::DegenerateInput { count }) => assert_eq!(cards.len(), count),
        Err(e) => panic!("Unexpected error {e}"),
    }
});
