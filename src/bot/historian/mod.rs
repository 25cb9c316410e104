//! Historians are an injectable sink for the bot's decisions. The bot
//! writes every decision it makes into each historian it holds and
//! never reads anything back, so they are safe to use for logging,
//! debugging, or collecting opponent data for later study.
use thiserror::Error;

use super::{Action, PlayerId};
use std::collections::HashMap;

/// HistorianError is the error type for historian implementations.
#[derive(Error, Debug)]
pub enum HistorianError {
    #[error("Unable to record decision")]
    UnableToRecordDecision,
    #[error("Borrow Mut Error: {0}")]
    BorrowMutError(#[from] std::cell::BorrowMutError),
}

/// Everything the bot knew and chose for one decision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionRecord {
    pub game: u64,
    pub round_num: u32,
    pub pot: u64,
    pub to_call: u64,
    pub pot_odds: f64,
    /// Only set once there is a board to simulate.
    pub equity: Option<f64>,
    pub action: Action,
    /// True when the decision fell back to the safe action.
    pub fallback: bool,
    /// The bets the table showed, opponents included.
    pub player_bets: HashMap<PlayerId, u64>,
}

pub trait Historian {
    /// Called once per decision, after the action has been chosen.
    ///
    /// Returning an error will cause the historian to be dropped
    /// from the agent.
    fn record_decision(&mut self, record: &DecisionRecord) -> Result<(), HistorianError>;
}

mod null;
mod vec;

pub use null::NullHistorian;
pub use vec::VecHistorian;
