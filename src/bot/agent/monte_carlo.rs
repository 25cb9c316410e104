use tracing::event;

use super::{Agent, GameEnd, GameStart};
use crate::bot::historian::{DecisionRecord, Historian};
use crate::bot::{Action, PlayerId, RoundState, StackSituation, pot_odds};
use crate::core::{Card, PokerError};
use crate::holdem::{EquityConfig, EquitySimulator};

/// The thresholds that turn pot odds and equity into an action.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicyConfig {
    /// Preflop calls are made only below these pot odds.
    pub preflop_max_pot_odds: f64,
    /// Bet into an unopened pot above this equity.
    pub bet_equity: f64,
    /// Size of that bet as a share of the pot.
    pub bet_pot_fraction: f64,
    /// Raise a bet above this equity instead of calling.
    pub raise_equity: f64,
    /// Raise size as a multiple of the call.
    pub raise_multiple: u64,
    /// Trials when the stack is critical or short.
    pub short_stack_trials: usize,
    /// Trials otherwise.
    pub deep_stack_trials: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            preflop_max_pot_odds: 0.25,
            bet_equity: 0.65,
            bet_pot_fraction: 0.6,
            raise_equity: 0.8,
            raise_multiple: 2,
            short_stack_trials: 600,
            deep_stack_trials: 1_000,
        }
    }
}

/// An agent that checks or calls cheap preflop and then plays
/// postflop on Monte Carlo equity against every other player at
/// the table.
pub struct MonteCarloAgent {
    id: PlayerId,
    policy: PolicyConfig,
    equity: EquityConfig,
    hand: Vec<Card>,
    current_chips: u64,
    big_blind: u64,
    all_players: Vec<PlayerId>,
    position: u8,
    game_count: u64,
    decisions: u64,
    historians: Vec<Box<dyn Historian>>,
}

impl MonteCarloAgent {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            policy: PolicyConfig::default(),
            equity: EquityConfig::default(),
            hand: Vec::new(),
            current_chips: 0,
            big_blind: 10,
            all_players: Vec::new(),
            position: 0,
            game_count: 0,
            decisions: 0,
            historians: Vec::new(),
        }
    }

    pub fn with_policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = policy;
        self
    }

    /// Workers, seed and time budget for the equity estimates. The
    /// trial count is picked per decision from the stack depth. With a
    /// seed set every decision gets `seed + decision number`.
    pub fn with_equity_config(mut self, equity: EquityConfig) -> Self {
        self.equity = equity;
        self
    }

    pub fn with_historian(mut self, historian: Box<dyn Historian>) -> Self {
        self.historians.push(historian);
        self
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn game_count(&self) -> u64 {
        self.game_count
    }

    pub fn historian_count(&self) -> usize {
        self.historians.len()
    }

    pub fn stack_situation(&self) -> StackSituation {
        StackSituation::from_stack(self.current_chips, self.big_blind)
    }

    fn calculate_position(&self, round: &RoundState) -> u8 {
        if round.active_players() <= 3 {
            2
        } else {
            (self.game_count % 3) as u8
        }
    }

    fn opponents(&self) -> usize {
        self.all_players.len().saturating_sub(1).max(1)
    }

    fn trials_for(&self, stack: StackSituation) -> usize {
        if stack.is_short() {
            self.policy.short_stack_trials
        } else {
            self.policy.deep_stack_trials
        }
    }

    fn equity_of(&self, board: &[Card], stack: StackSituation) -> Result<f64, PokerError> {
        let mut config = self.equity.clone().trials(self.trials_for(stack));
        config.seed = config.seed.map(|s| s.wrapping_add(self.decisions));

        let sim = EquitySimulator::new(&self.hand, board, self.opponents())?;
        Ok(sim.estimate(&config)?.equity)
    }

    /// The decision itself. Any error here is left for `act` to handle.
    ///
    /// Returns the action and the equity, when one was estimated.
    pub fn try_act(
        &self,
        round: &RoundState,
        remaining_chips: u64,
    ) -> Result<(Action, Option<f64>), PokerError> {
        let owed = round.to_call(self.id);
        let odds = pot_odds(owed, round.pot);
        let stack = self.stack_situation();
        let to_call = owed.min(remaining_chips);

        if round.is_preflop() {
            let action = if to_call == 0 {
                Action::Check
            } else if odds < self.policy.preflop_max_pot_odds {
                Action::Call(to_call)
            } else {
                Action::Fold
            };
            return Ok((action, None));
        }

        if round.community_cards.is_empty() {
            return Ok((Action::Fold, None));
        }

        let equity = self.equity_of(&round.community_cards, stack)?;

        let action = if to_call == 0 {
            if equity > self.policy.bet_equity {
                let bet = (self.policy.bet_pot_fraction * round.pot as f64) as u64;
                Action::Raise(bet.min(remaining_chips))
            } else {
                Action::Check
            }
        } else if equity > odds {
            if equity > self.policy.raise_equity {
                let raise = to_call.saturating_mul(self.policy.raise_multiple);
                Action::Raise(raise.min(remaining_chips))
            } else {
                Action::Call(to_call)
            }
        } else {
            Action::Fold
        };
        Ok((action, Some(equity)))
    }

    /// Check when it's free, otherwise give up the hand.
    fn safe_action(&self, round: &RoundState) -> Action {
        if round.to_call(self.id) == 0 {
            Action::Check
        } else {
            Action::Fold
        }
    }

    fn record(&mut self, record: DecisionRecord) {
        self.historians.retain_mut(|historian| {
            match historian.record_decision(&record) {
                Ok(()) => true,
                Err(error) => {
                    event!(tracing::Level::WARN, %error, "Dropping historian");
                    false
                }
            }
        });
    }
}

impl Agent for MonteCarloAgent {
    fn on_start(&mut self, start: &GameStart) {
        self.hand = start.player_hands.clone();
        self.current_chips = start.starting_chips;
        self.big_blind = start.blind_amount;
        self.all_players = start.all_players.clone();
        self.game_count += 1;
    }

    fn on_round_start(&mut self, round: &RoundState, remaining_chips: u64) {
        self.current_chips = remaining_chips;
        self.position = self.calculate_position(round);
    }

    fn act(&mut self, round: &RoundState, remaining_chips: u64) -> Action {
        self.current_chips = remaining_chips;

        let (action, equity, fallback) = match self.try_act(round, remaining_chips) {
            Ok((action, equity)) => (action, equity, false),
            Err(error) => {
                let action = self.safe_action(round);
                event!(
                    tracing::Level::WARN,
                    %error,
                    ?action,
                    "Decision failed, falling back to the safe action"
                );
                (action, None, true)
            }
        };

        event!(
            tracing::Level::DEBUG,
            id = self.id,
            round = round.round_num,
            ?equity,
            ?action,
            "Agent acting"
        );

        let to_call = round.to_call(self.id);
        self.record(DecisionRecord {
            game: self.game_count,
            round_num: round.round_num,
            pot: round.pot,
            to_call,
            pot_odds: pot_odds(to_call, round.pot),
            equity,
            action,
            fallback,
            player_bets: round.player_bets.clone(),
        });
        self.decisions += 1;
        action
    }

    fn on_end_round(&mut self, _round: &RoundState, remaining_chips: u64) {
        self.current_chips = remaining_chips;
    }

    fn on_end_game(&mut self, _round: &RoundState, end: &GameEnd) {
        event!(
            tracing::Level::INFO,
            id = self.id,
            final_stack = end.player_score,
            "Game finished"
        );
    }
}
