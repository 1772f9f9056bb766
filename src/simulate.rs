use crate::cards::Card;
use crate::evaluator::{best_hand, EvalError, FiveCardHand};
use crate::pool::{CardPool, PoolError};
use crate::range::{HandRange, StartingHand};
use crate::stats::{Outcome, PlayerStats, SimulationReport};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::time::Instant;

/// Iterations to run when the caller does not say otherwise.
pub const DEFAULT_ITERATIONS: u32 = 1000;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    #[error("no player ranges given")]
    NoPlayers,
    #[error("iteration count must be positive")]
    ZeroIterations,
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("cards specified more than once: {0}")]
    DuplicateCards(String),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Monte Carlo equity simulation over a fixed configuration.
///
/// Configuration is validated once in [`Simulation::new`]; a run can then
/// only fail on an internal defect, never on bad input. Each iteration
/// samples one starting hand per player range, rebuilds and reshuffles the
/// card pool without the known cards, completes the board to five cards,
/// ranks every player's best five of seven, and credits the winners.
///
/// ```
/// use holdem_odds::range::HandRange;
/// use holdem_odds::simulate::Simulation;
///
/// let ranges = HandRange::parse_list("AsAd,KsKd", &[]).unwrap();
/// let mut sim = Simulation::new(ranges, vec![], vec![], 200).unwrap();
/// let report = sim.run_seeded(1).unwrap();
/// let total: f64 = (0..2).map(|p| report.equity(p)).sum();
/// assert!((total - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    ranges: Vec<HandRange>,
    board: Vec<Card>,
    dead: Vec<Card>,
    iterations: u32,
    pool: CardPool,
}

impl Simulation {
    /// Validate a configuration and build the engine.
    ///
    /// Rejected here, before any iteration runs: an empty player list, a
    /// zero iteration count, more than five board cards, and any card
    /// named more than once across the board, the dead cards and the
    /// fully-specified (single-member) ranges.
    pub fn new(
        ranges: Vec<HandRange>,
        board: Vec<Card>,
        dead: Vec<Card>,
        iterations: u32,
    ) -> Result<Self, SimulationError> {
        if ranges.is_empty() {
            return Err(SimulationError::NoPlayers);
        }
        if iterations == 0 {
            return Err(SimulationError::ZeroIterations);
        }
        if board.len() > 5 {
            return Err(SimulationError::TooManyBoardCards(board.len()));
        }
        validate_no_duplicates(&ranges, &board, &dead)?;
        Ok(Self { ranges, board, dead, iterations, pool: CardPool::new() })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn ranges(&self) -> &[HandRange] {
        &self.ranges
    }

    /// Run every iteration against the caller's random source.
    ///
    /// Taking the `Rng` by handle keeps seeding in the caller's control;
    /// a parallel driver would give each worker its own `Simulation`
    /// clone and an independently seeded generator.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SimulationReport, SimulationError> {
        let start = Instant::now();
        let mut players: Vec<PlayerStats> =
            self.ranges.iter().map(|r| PlayerStats::new(r.descriptor())).collect();
        for _ in 0..self.iterations {
            self.run_iteration(rng, &mut players)?;
        }
        Ok(SimulationReport::new(self.iterations, start.elapsed(), players))
    }

    /// Run with a deterministic ChaCha8 generator for reproducible results.
    pub fn run_seeded(&mut self, seed: u64) -> Result<SimulationReport, SimulationError> {
        self.run(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    fn run_iteration<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        players: &mut [PlayerStats],
    ) -> Result<(), SimulationError> {
        let sampled: Vec<StartingHand> = self.ranges.iter().map(|r| r.sample(rng)).collect();

        self.pool.reset_and_shuffle(rng);
        let mut known: Vec<Card> =
            Vec::with_capacity(self.board.len() + self.dead.len() + sampled.len() * 2);
        known.extend_from_slice(&self.board);
        known.extend_from_slice(&self.dead);
        for hand in &sampled {
            known.extend(hand.cards());
        }
        self.pool.remove(&known);

        let mut board = self.board.clone();
        while board.len() < 5 {
            board.push(self.pool.draw()?);
        }

        let mut showdown: Vec<FiveCardHand> = Vec::with_capacity(sampled.len());
        let mut seven: Vec<Card> = Vec::with_capacity(7);
        for hand in &sampled {
            seven.clear();
            seven.extend(hand.cards());
            seven.extend_from_slice(&board);
            showdown.push(best_hand(&seven)?);
        }

        let winners = winning_indices(&showdown);
        let credit = 1.0 / winners.len() as f64;
        for (idx, hand) in showdown.iter().enumerate() {
            let outcome = if !winners.contains(&idx) {
                Outcome::Loss
            } else if winners.len() > 1 {
                Outcome::Tie
            } else {
                Outcome::Win
            };
            if outcome != Outcome::Loss {
                players[idx].add_win_credit(credit);
            }
            players[idx].record(hand.category(), outcome);
        }
        Ok(())
    }
}

/// The indices holding the strongest hand; more than one on a split pot.
fn winning_indices(showdown: &[FiveCardHand]) -> Vec<usize> {
    let mut winners: Vec<usize> = Vec::new();
    let mut best: Option<&FiveCardHand> = None;
    for (idx, hand) in showdown.iter().enumerate() {
        match best {
            None => {
                winners.push(idx);
                best = Some(hand);
            }
            Some(current) if hand > current => {
                winners.clear();
                winners.push(idx);
                best = Some(hand);
            }
            Some(current) if hand == current => winners.push(idx),
            Some(_) => {}
        }
    }
    winners
}

/// No card may appear twice across the board, the dead cards and any
/// single-member range. Wider ranges are sampled per iteration and cannot
/// conflict statically.
fn validate_no_duplicates(
    ranges: &[HandRange],
    board: &[Card],
    dead: &[Card],
) -> Result<(), SimulationError> {
    let mut counts: HashMap<Card, u32> = HashMap::new();
    for &card in board.iter().chain(dead.iter()) {
        *counts.entry(card).or_insert(0) += 1;
    }
    for range in ranges {
        if let Some(hand) = range.as_singleton() {
            for card in hand.cards() {
                *counts.entry(card).or_insert(0) += 1;
            }
        }
    }

    let mut dupes: Vec<Card> = counts.into_iter().filter(|&(_, n)| n > 1).map(|(c, _)| c).collect();
    if dupes.is_empty() {
        return Ok(());
    }
    dupes.sort();
    let listed: Vec<String> = dupes.iter().map(Card::to_string).collect();
    Err(SimulationError::DuplicateCards(listed.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::classify;

    fn ranges(input: &str) -> Vec<HandRange> {
        HandRange::parse_list(input, &[]).unwrap()
    }

    #[test]
    fn setup_rejects_empty_player_list() {
        assert!(matches!(
            Simulation::new(vec![], vec![], vec![], 10),
            Err(SimulationError::NoPlayers)
        ));
    }

    #[test]
    fn setup_rejects_zero_iterations() {
        assert!(matches!(
            Simulation::new(ranges("AsAd"), vec![], vec![], 0),
            Err(SimulationError::ZeroIterations)
        ));
    }

    #[test]
    fn setup_rejects_oversized_board() {
        let board = parse_cards("2c 3c 4c 5c 6c 7c").unwrap();
        assert!(matches!(
            Simulation::new(ranges("AsAd"), board, vec![], 10),
            Err(SimulationError::TooManyBoardCards(6))
        ));
    }

    #[test]
    fn setup_rejects_card_duplicated_between_dead_and_hand() {
        let dead = parse_cards("Ah").unwrap();
        let err = Simulation::new(ranges("AhKd"), vec![], dead, 10).unwrap_err();
        assert_eq!(err, SimulationError::DuplicateCards("Ah".to_string()));
    }

    #[test]
    fn setup_rejects_card_duplicated_between_board_and_hand() {
        let board = parse_cards("Kd 7s 2c").unwrap();
        let err = Simulation::new(ranges("AhKd,QsQd"), board, vec![], 10).unwrap_err();
        assert_eq!(err, SimulationError::DuplicateCards("Kd".to_string()));
    }

    #[test]
    fn setup_rejects_overlapping_singleton_hands() {
        let err = Simulation::new(ranges("AhKd,KdQs"), vec![], vec![], 10).unwrap_err();
        assert_eq!(err, SimulationError::DuplicateCards("Kd".to_string()));
    }

    #[test]
    fn wide_ranges_do_not_trip_the_duplicate_check() {
        // "AA" overlaps Ah statically, but membership is sampled per
        // iteration and filtered at parse time instead.
        let dead = parse_cards("Ah").unwrap();
        let ranges = HandRange::parse_list("AA,KsKd", &dead).unwrap();
        assert!(Simulation::new(ranges, vec![], dead, 10).is_ok());
    }

    #[test]
    fn winning_indices_finds_sole_winner_and_ties() {
        let quads = classify(&parse_cards("2h 2c 2s 2d 6h").unwrap()).unwrap();
        let straight_a = classify(&parse_cards("6d 7h 8s 9c Td").unwrap()).unwrap();
        let straight_b = classify(&parse_cards("6h 7d 8s 9c Td").unwrap()).unwrap();

        assert_eq!(winning_indices(&[straight_a, quads, straight_b]), vec![1]);
        assert_eq!(winning_indices(&[straight_a, straight_b]), vec![0, 1]);
        assert_eq!(winning_indices(&[straight_a]), vec![0]);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = Simulation::new(ranges("AsAd,KsKd"), vec![], vec![], 50).unwrap();
        let mut b = Simulation::new(ranges("AsAd,KsKd"), vec![], vec![], 50).unwrap();
        let ra = a.run_seeded(99).unwrap();
        let rb = b.run_seeded(99).unwrap();
        assert_eq!(ra.players()[0].win_credit(), rb.players()[0].win_credit());
        assert_eq!(ra.players()[1].win_credit(), rb.players()[1].win_credit());
    }

    #[test]
    fn fixed_board_cards_always_appear() {
        // A board that already makes quads for player 0 decides every iteration.
        let board = parse_cards("2c 2d 2h 2s 9c").unwrap();
        let mut sim = Simulation::new(ranges("AsAd,KsKd"), board, vec![], 20).unwrap();
        let report = sim.run_seeded(5).unwrap();
        // Both players play the board's quads; the ace kicker wins every time.
        assert!((report.equity(0) - 1.0).abs() < 1e-9);
        assert_eq!(report.equity(1), 0.0);
    }
}
