//! The bot that sits at a table and plays on top of the equity engine.
//!
//! Everything here is policy: turning pot odds, stack depth and an
//! equity estimate into an action. The engine in `core` and `holdem`
//! knows nothing about chips or betting.
mod action;
mod round_state;

pub mod agent;
pub mod historian;

pub use action::Action;
pub use agent::{Agent, GameEnd, GameStart, MonteCarloAgent, PolicyConfig};
pub use round_state::{PlayerId, RoundState, StackSituation, pot_odds};
