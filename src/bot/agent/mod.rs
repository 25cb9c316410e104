//! `Agent`s are the automatic players the table talks to. The table
//! calls the lifecycle methods as a game moves along and asks for an
//! action whenever it's the agent's turn.
mod monte_carlo;

use std::collections::HashMap;

use super::{Action, PlayerId, RoundState};
use crate::core::Card;

/// What the table tells every agent when a game starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStart {
    pub starting_chips: u64,
    /// This agent's hole cards.
    pub player_hands: Vec<Card>,
    /// The big blind.
    pub blind_amount: u64,
    pub big_blind_player_id: PlayerId,
    pub small_blind_player_id: PlayerId,
    pub all_players: Vec<PlayerId>,
}

/// What the table tells every agent when a game is over.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameEnd {
    pub player_score: f64,
    pub all_scores: HashMap<PlayerId, f64>,
    pub active_players_hands: HashMap<PlayerId, Vec<Card>>,
}

/// This is the trait that you need to implement in order to implement
/// different strategies. It's up to you to implement the logic and state.
///
/// Only `act` is required. `act` must always produce an action; any
/// recovery from bad input happens inside the agent.
pub trait Agent {
    fn on_start(&mut self, _start: &GameStart) {}

    fn on_round_start(&mut self, _round: &RoundState, _remaining_chips: u64) {}

    /// This is the method that will be called by the table to get the action
    fn act(&mut self, round: &RoundState, remaining_chips: u64) -> Action;

    fn on_end_round(&mut self, _round: &RoundState, _remaining_chips: u64) {}

    fn on_end_game(&mut self, _round: &RoundState, _end: &GameEnd) {}
}

pub use monte_carlo::{MonteCarloAgent, PolicyConfig};
