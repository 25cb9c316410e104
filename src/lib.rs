//! Hand scoring and Monte Carlo equity for Texas holdem, plus a simple
//! bot that plays from those equities.
//!
//! The engine is two pieces. `core` has the cards, decks and a seven
//! card hand classifier. `holdem` runs the equity simulation over the
//! unknown cards, in parallel and with a seedable rng. `bot` is the
//! table facing player built on top.
//!
//! ```
//! use holdem_equity::core::parse_cards;
//! use holdem_equity::holdem::{EquityConfig, EquitySimulator};
//!
//! let hole = parse_cards(&["As", "Kd"]).unwrap();
//! let board = parse_cards(&["Ah", "Kh", "2c"]).unwrap();
//! let sim = EquitySimulator::new(&hole, &board, 1).unwrap();
//! let est = sim
//!     .estimate(&EquityConfig::default().trials(2_000).seed(420))
//!     .unwrap();
//! assert!(est.equity > 0.85);
//! ```

/// Cards, decks and hand scoring. Everything in core should be
/// agnostic to betting.
pub mod core;
/// Holdem equity estimation.
pub mod holdem;
/// The equity driven bot and its lifecycle.
pub mod bot;
