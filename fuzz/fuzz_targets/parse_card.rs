#![no_main]

use holdem_equity::core::Card;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    // Anything that parses has to print back to the same text.
    if let Ok(card) = input.parse::<Card>() {
        assert_eq!(input, card.to_string());
    }
});
