use super::groups::RankBuckets;
use super::straight::StraightShape;
use crate::cards::{Card, Rank};

/// Pre-computed view of a 5-card hand, built once per classification.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Cards sorted by rank descending, then suit descending.
    pub sorted_cards: [Card; 5],
    pub ranks: [Rank; 5],
    pub buckets: RankBuckets,
    pub straight: StraightShape,
    pub is_flush: bool,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks = [
            sorted_cards[0].rank(),
            sorted_cards[1].rank(),
            sorted_cards[2].rank(),
            sorted_cards[3].rank(),
            sorted_cards[4].rank(),
        ];

        let mut counts = [0u8; 15];
        for &rank in ranks.iter() {
            counts[rank.strength() as usize] += 1;
        }

        let first_suit = sorted_cards[0].suit();
        let is_flush = sorted_cards.iter().all(|c| c.suit() == first_suit);

        Self {
            sorted_cards,
            ranks,
            buckets: RankBuckets::from_counts(&counts),
            straight: StraightShape::detect(&ranks),
            is_flush,
        }
    }
}
