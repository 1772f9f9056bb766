//! holdem-odds: Monte Carlo equity calculator for Texas Hold'em
//!
//! Goals:
//! - Exact 5-card hand ranking with correct kicker and wheel semantics
//! - Unbiased sampling over starting-hand ranges, board and dead cards
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: pocket aces against pocket kings
//! ```
//! use holdem_odds::range::HandRange;
//! use holdem_odds::simulate::Simulation;
//!
//! let ranges = vec![
//!     HandRange::parse("AsAd", &[]).unwrap(),
//!     HandRange::parse("KsKd", &[]).unwrap(),
//! ];
//! let mut sim = Simulation::new(ranges, vec![], vec![], 1000).unwrap();
//! let report = sim.run_seeded(7).unwrap();
//! assert!(report.equity(0) > report.equity(1));
//! ```
//!
//! ## CLI
//! Run the command-line calculator with:
//! ```sh
//! cargo run --bin holdem-odds -- --hands AsAd,KsKd
//! ```

pub mod cards;
pub mod evaluator;
pub mod pool;
pub mod range;
pub mod simulate;
pub mod stats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
