/// Monte Carlo equity estimation for holdem hands.
mod equity;
/// Export the simulator, its settings, and the results.
pub use self::equity::{
    DEFAULT_TRIALS, EquityConfig, EquityEstimate, EquitySimulator, Tally, TrialOutcome, estimate,
};
