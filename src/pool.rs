use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolError {
    #[error("draw from an empty card pool")]
    Exhausted,
}

/// Build the canonical 52-card set, one card per suit/rank.
fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for &s in Suit::ALL.iter() {
        for &r in Rank::ALL.iter() {
            cards.push(Card::new(r, s));
        }
    }
    cards
}

/// The pool of cards still available to be sampled in one iteration.
///
/// Starts as the full 52-card set. Known cards (board, dead, sampled hole
/// cards) are removed before drawing, and the whole pool is rebuilt and
/// reshuffled between iterations.
///
/// ```
/// use holdem_odds::pool::CardPool;
///
/// let pool = CardPool::new();
/// assert_eq!(pool.len(), 52);
/// ```
#[derive(Debug, Clone)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Repopulate the full 52-card set and apply a uniform permutation.
    pub fn reset_and_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.clear();
        self.cards.extend(full_deck());
        self.cards.shuffle(rng);
    }

    /// Delete every occurrence of each given card; absent cards are ignored.
    pub fn remove(&mut self, cards: &[Card]) {
        self.cards.retain(|c| !cards.contains(c));
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove and return one card from the top of the pool.
    pub fn draw(&mut self) -> Result<Card, PoolError> {
        self.cards.pop().ok_or(PoolError::Exhausted)
    }
}

impl Default for CardPool {
    fn default() -> Self {
        Self::new()
    }
}
