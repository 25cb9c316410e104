use std::collections::HashMap;

use crate::core::Card;

/// Players are known by the number the table gives them.
pub type PlayerId = u64;

/// What the table tells the bot about the current betting round.
///
/// Under the `serde` feature this reads straight from the JSON the
/// table sends; player bet keys may be quoted numbers.
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use holdem_equity::bot::RoundState;
///
/// let state = RoundState::from_json(
///     r#"{"round_num": 2, "pot": 120, "current_bet": 40,
///         "player_bets": {"7": 40, "9": 0},
///         "community_cards": ["Ah", "Kh", "2c"]}"#,
/// )
/// .unwrap();
/// assert_eq!(40, state.to_call(9));
/// assert_eq!(3, state.community_cards.len());
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    /// 1 is preflop, then flop, turn and river.
    pub round_num: u32,
    pub pot: u64,
    /// The bet every player has to match to stay in.
    pub current_bet: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub player_bets: HashMap<PlayerId, u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub community_cards: Vec<Card>,
}

impl RoundState {
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_preflop(&self) -> bool {
        self.round_num == 1
    }

    /// Chips `id` already has in front of them this round.
    pub fn bet_of(&self, id: PlayerId) -> u64 {
        self.player_bets.get(&id).copied().unwrap_or(0)
    }

    /// Chips `id` needs to add to match the current bet.
    pub fn to_call(&self, id: PlayerId) -> u64 {
        self.current_bet.saturating_sub(self.bet_of(id))
    }

    /// Number of players with a bet entry this round.
    pub fn active_players(&self) -> usize {
        self.player_bets.len()
    }
}

/// Share of the final pot a call costs: `call / (pot + call)`.
///
/// A free call into an empty pot returns 1.0, so nothing
/// ever looks cheap enough to call there.
pub fn pot_odds(call: u64, pot: u64) -> f64 {
    let total = pot.saturating_add(call);
    if total == 0 {
        1.0
    } else {
        call as f64 / total as f64
    }
}

/// How deep the bot's stack is, in big blinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StackSituation {
    /// 10 big blinds or less.
    Critical,
    /// 20 or less.
    Short,
    /// 40 or less.
    Medium,
    Deep,
}

impl StackSituation {
    pub fn from_stack(chips: u64, big_blind: u64) -> Self {
        if big_blind == 0 {
            return StackSituation::Deep;
        }
        let bb = chips as f64 / big_blind as f64;
        if bb <= 10.0 {
            StackSituation::Critical
        } else if bb <= 20.0 {
            StackSituation::Short
        } else if bb <= 40.0 {
            StackSituation::Medium
        } else {
            StackSituation::Deep
        }
    }

    /// Critical and short stacks get a quicker, rougher equity estimate.
    pub fn is_short(&self) -> bool {
        matches!(self, StackSituation::Critical | StackSituation::Short)
    }
}
