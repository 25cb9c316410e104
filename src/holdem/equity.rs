use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{event, trace_span};

use crate::core::{Card, FlatDeck, PokerError, build_deck, score};

/// How many trials an estimate runs when nothing else is asked for.
pub const DEFAULT_TRIALS: usize = 1_000;

/// Settings for a single equity estimate.
///
/// ```
/// use holdem_equity::holdem::EquityConfig;
///
/// let config = EquityConfig::default().trials(2_000).workers(4).seed(420);
/// assert_eq!(2_000, config.trials);
/// assert_eq!(Some(420), config.seed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityConfig {
    /// Total trials, split across the workers.
    pub trials: usize,
    /// Number of independent workers. Each gets its own rng.
    pub workers: usize,
    /// Root seed. Worker `i` is seeded with `seed + i`. When unset a
    /// fresh seed is drawn for every estimate.
    pub seed: Option<u64>,
    /// Stop early once this much wall clock time has passed.
    pub time_budget: Option<Duration>,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            workers: rayon::current_num_threads().max(1),
            seed: None,
            time_budget: None,
        }
    }
}

impl EquityConfig {
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    fn validate(&self) -> Result<(), PokerError> {
        if self.trials == 0 {
            return Err(PokerError::InvalidConfig("trials must be at least one"));
        }
        if self.workers == 0 {
            return Err(PokerError::InvalidConfig("workers must be at least one"));
        }
        Ok(())
    }
}

/// Result of comparing the player against the best opponent in one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrialOutcome {
    Win,
    Tie,
    Loss,
}

/// Running win and tie counts for a block of trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u64,
    pub ties: u64,
    pub trials: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: TrialOutcome) {
        self.trials += 1;
        match outcome {
            TrialOutcome::Win => self.wins += 1,
            TrialOutcome::Tie => self.ties += 1,
            TrialOutcome::Loss => {}
        }
    }

    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            trials: self.trials + other.trials,
        }
    }

    /// Wins plus half of the ties over the trials that ran.
    /// Zero when nothing ran.
    pub fn equity(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            (self.wins as f64 + 0.5 * self.ties as f64) / self.trials as f64
        }
    }
}

/// The estimated share of the pot the player wins against
/// uniformly random opponents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityEstimate {
    /// `(wins + ties / 2) / trials_run`, in `[0, 1]`.
    pub equity: f64,
    pub wins: u64,
    pub ties: u64,
    pub trials_run: u64,
    pub trials_requested: u64,
    /// False when the time budget ran out before every trial ran.
    pub completed: bool,
}

impl EquityEstimate {
    fn from_tally(tally: Tally, trials_requested: usize) -> Self {
        let trials_requested = trials_requested as u64;
        Self {
            equity: tally.equity(),
            wins: tally.wins,
            ties: tally.ties,
            trials_run: tally.trials,
            trials_requested,
            completed: tally.trials >= trials_requested,
        }
    }
}

/// Monte Carlo simulation of the unknown cards of a holdem hand.
///
/// Each trial shuffles a fresh copy of the residual deck, gives two
/// cards to every opponent, completes the board, and compares the
/// player's seven cards to the best opponent's.
#[derive(Debug, Clone)]
pub struct EquitySimulator {
    hole: [Card; 2],
    board: Vec<Card>,
    opponents: usize,
    /// Every card not in the hole or on the board, canonical order.
    residual: FlatDeck,
}

impl EquitySimulator {
    /// Check the known cards and build the residual deck.
    ///
    /// ```
    /// use holdem_equity::core::parse_cards;
    /// use holdem_equity::holdem::EquitySimulator;
    ///
    /// let hole = parse_cards(&["As", "Kd"]).unwrap();
    /// let board = parse_cards(&["Ah", "Kh", "2c"]).unwrap();
    /// let sim = EquitySimulator::new(&hole, &board, 2).unwrap();
    /// assert_eq!(47, sim.residual_len());
    /// ```
    pub fn new(hole: &[Card], board: &[Card], opponents: usize) -> Result<Self, PokerError> {
        let hole: [Card; 2] = hole
            .try_into()
            .map_err(|_| PokerError::InvalidHoleCards(hole.len()))?;
        if board.len() > 5 {
            return Err(PokerError::InvalidBoard(board.len()));
        }
        if opponents == 0 {
            return Err(PokerError::NoOpponents);
        }

        let mut seen = HashSet::with_capacity(7);
        for c in hole.iter().chain(board) {
            if !seen.insert(*c) {
                return Err(PokerError::DuplicateCard(*c));
            }
        }

        let known: Vec<Card> = hole.iter().chain(board).copied().collect();
        let residual = build_deck(&known);

        let needed = 2 * opponents + (5 - board.len());
        if needed > residual.len() {
            return Err(PokerError::InsufficientDeck {
                needed,
                available: residual.len(),
            });
        }

        Ok(Self {
            hole,
            board: board.to_vec(),
            opponents,
            residual,
        })
    }

    pub fn opponents(&self) -> usize {
        self.opponents
    }

    pub fn residual_len(&self) -> usize {
        self.residual.len()
    }

    fn deal(&self, deck: &mut FlatDeck) -> Result<Card, PokerError> {
        deck.deal().ok_or(PokerError::InsufficientDeck {
            needed: 2 * self.opponents + (5 - self.board.len()),
            available: self.residual.len(),
        })
    }

    /// Run a single trial.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrialOutcome, PokerError> {
        let mut deck = self.residual.clone();
        deck.shuffle(rng);

        let mut opponents = Vec::with_capacity(self.opponents);
        for _ in 0..self.opponents {
            opponents.push([self.deal(&mut deck)?, self.deal(&mut deck)?]);
        }

        let mut board = Vec::with_capacity(5);
        board.extend_from_slice(&self.board);
        while board.len() < 5 {
            board.push(self.deal(&mut deck)?);
        }

        let mut cards = Vec::with_capacity(7);
        cards.extend_from_slice(&self.hole);
        cards.extend_from_slice(&board);
        let hero = score(&cards)?;

        let mut best = None;
        for hole in &opponents {
            cards.clear();
            cards.extend_from_slice(hole);
            cards.extend_from_slice(&board);
            let s = score(&cards)?;
            if best.as_ref().is_none_or(|b| s > *b) {
                best = Some(s);
            }
        }

        let outcome = match best {
            Some(villain) if hero < villain => TrialOutcome::Loss,
            Some(villain) if hero == villain => TrialOutcome::Tie,
            _ => TrialOutcome::Win,
        };
        Ok(outcome)
    }

    /// Run a serial block of trials, stopping early once `deadline` passes.
    pub fn run<R: Rng + ?Sized>(
        &self,
        trials: usize,
        deadline: Option<Instant>,
        rng: &mut R,
    ) -> Result<Tally, PokerError> {
        let mut tally = Tally::default();
        for _ in 0..trials {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break;
            }
            tally.record(self.simulate(rng)?);
        }
        Ok(tally)
    }

    /// Estimate equity with the trials split across parallel workers.
    ///
    /// With a seed set the result only depends on the seed, the trial
    /// count and the worker count.
    pub fn estimate(&self, config: &EquityConfig) -> Result<EquityEstimate, PokerError> {
        config.validate()?;

        let root_seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let deadline = config.time_budget.map(|budget| Instant::now() + budget);
        let workers = config.workers.min(config.trials);

        let span = trace_span!(
            "estimate_equity",
            trials = config.trials,
            workers,
            opponents = self.opponents,
            board = self.board.len()
        );
        let _enter = span.enter();

        let tally = (0..workers)
            .into_par_iter()
            .map(|idx| {
                let budget = config.trials / workers + usize::from(idx < config.trials % workers);
                // Rayon threads don't inherit the caller's entered span.
                trace_span!(parent: &span, "equity_worker", worker = idx, budget).in_scope(|| {
                    let mut rng = StdRng::seed_from_u64(root_seed.wrapping_add(idx as u64));
                    let tally = self.run(budget, deadline, &mut rng)?;
                    event!(
                        tracing::Level::TRACE,
                        trials_run = tally.trials,
                        "Worker finished"
                    );
                    Ok::<_, PokerError>(tally)
                })
            })
            .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))?;

        let estimate = EquityEstimate::from_tally(tally, config.trials);
        event!(
            tracing::Level::DEBUG,
            wins = estimate.wins,
            ties = estimate.ties,
            trials_run = estimate.trials_run,
            equity = estimate.equity,
            completed = estimate.completed,
            "Equity estimated"
        );
        Ok(estimate)
    }
}

/// Estimate equity for `hole` on `board` against `opponents` random hands.
///
/// This is the production entry point: a fresh random seed and the
/// default worker count.
///
/// ```
/// use holdem_equity::core::parse_cards;
/// use holdem_equity::holdem::estimate;
///
/// let hole = parse_cards(&["Ac", "Ad"]).unwrap();
/// let est = estimate(&hole, &[], 1, 500).unwrap();
/// assert!(est.equity > 0.5);
/// ```
pub fn estimate(
    hole: &[Card],
    board: &[Card],
    opponents: usize,
    trials: usize,
) -> Result<EquityEstimate, PokerError> {
    EquitySimulator::new(hole, board, opponents)?.estimate(&EquityConfig::default().trials(trials))
}
