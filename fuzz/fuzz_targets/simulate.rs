#![no_main]

use holdem_equity::core::Card;
use holdem_equity::holdem::{EquityConfig, EquitySimulator};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub hole: Vec<Card>,
    pub board: Vec<Card>,
    pub opponents: u8,
    pub seed: u64,
}

fuzz_target!(|input: Input| {
    // Bad input is an error, never a panic.
    let Ok(sim) = EquitySimulator::new(&input.hole, &input.board, usize::from(input.opponents))
    else {
        return;
    };
    let config = EquityConfig::default().trials(20).workers(2).seed(input.seed);
    let est = sim.estimate(&config).expect("A valid simulator always estimates");
    assert_eq!(20, est.trials_run);
    assert!((0.0..=1.0).contains(&est.equity));
});
