use crate::evaluator::Category;
use std::fmt;
use std::time::Duration;

/// How one player's hand fared in one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Sole holder of the strongest hand.
    Win,
    /// Shared the strongest hand with at least one other player.
    Tie,
    Loss,
}

/// Win/tie/loss counters for one hand category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
}

impl OutcomeTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    pub const fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }
}

/// One player's running statistics: cumulative win-credit (split pots
/// count fractionally) and a win/tie/loss tally per hand category.
/// Purely additive; safe to read at any point.
#[derive(Debug, Clone)]
pub struct PlayerStats {
    label: String,
    win_credit: f64,
    tallies: [OutcomeTally; 9],
}

impl PlayerStats {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), win_credit: 0.0, tallies: [OutcomeTally::default(); 9] }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn win_credit(&self) -> f64 {
        self.win_credit
    }

    pub fn tally(&self, category: Category) -> OutcomeTally {
        self.tallies[category.ordinal() as usize]
    }

    /// Total iterations this player has been scored in.
    pub fn hands_recorded(&self) -> u64 {
        self.tallies.iter().map(OutcomeTally::total).sum()
    }

    pub(crate) fn add_win_credit(&mut self, credit: f64) {
        self.win_credit += credit;
    }

    pub(crate) fn record(&mut self, category: Category, outcome: Outcome) {
        self.tallies[category.ordinal() as usize].record(outcome);
    }
}

/// Final result of a simulation run.
///
/// Keeps the raw integer tallies and the iteration count; equities and
/// per-category fractions are derived on demand.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    iterations: u32,
    elapsed: Duration,
    players: Vec<PlayerStats>,
}

impl SimulationReport {
    pub(crate) fn new(iterations: u32, elapsed: Duration, players: Vec<PlayerStats>) -> Self {
        Self { iterations, elapsed, players }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn players(&self) -> &[PlayerStats] {
        &self.players
    }

    /// A player's expected share of the pot: mean win-credit per iteration.
    pub fn equity(&self, player: usize) -> f64 {
        self.players[player].win_credit() / f64::from(self.iterations)
    }

    /// Fraction of iterations in which a player held this category.
    pub fn category_fraction(&self, player: usize, category: Category) -> f64 {
        self.players[player].tally(category).total() as f64 / f64::from(self.iterations)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Ran {} iterations in {:.3} seconds",
            self.iterations,
            self.elapsed.as_secs_f64()
        )?;
        writeln!(f)?;

        writeln!(f, "Overall Equity")?;
        for (idx, player) in self.players.iter().enumerate() {
            writeln!(f, "P{idx})  {:<15} {:.3}", player.label(), self.equity(idx))?;
        }
        writeln!(f)?;

        writeln!(f, "Hand distribution for each player")?;
        for player in &self.players {
            writeln!(f, "{:=<20} {} {:=<20}", "", player.label(), "")?;
            writeln!(f, "{:<20}{:>6}\t{:>5}\t{:>5}\t{:>5}\t{:>5}", "Hand", "#", "Frac", "W", "Tie", "L")?;
            for category in Category::ALL {
                let tally = player.tally(category);
                let total = tally.total();
                let (win_frac, tie_frac, loss_frac) = if total == 0 {
                    (0.0, 0.0, 0.0)
                } else {
                    (
                        tally.wins as f64 / total as f64,
                        tally.ties as f64 / total as f64,
                        tally.losses as f64 / total as f64,
                    )
                };
                writeln!(
                    f,
                    "{:<20}{:>6}\t{:.3}\t{:.3}\t{:.3}\t{:.3}",
                    category.name(),
                    total,
                    total as f64 / f64::from(self.iterations),
                    win_frac,
                    tie_frac,
                    loss_frac
                )?;
            }
        }
        Ok(())
    }
}
