use crate::cards::Rank;

/// Ranks bucketed by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ buckets as [(Ace, 3), (King, 1), (Queen, 1)]. The bucket
/// order is exactly the kicker-comparison order: bigger groups first, then
/// higher ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankBuckets {
    buckets: Vec<(Rank, u8)>,
}

impl RankBuckets {
    /// Build buckets from a per-strength count array indexed 2..=14.
    pub fn from_counts(counts: &[u8; 15]) -> Self {
        let mut buckets = Vec::new();
        for rank in Rank::ALL.iter().copied() {
            let count = counts[rank.strength() as usize];
            if count > 0 {
                buckets.push((rank, count));
            }
        }
        buckets.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { buckets }
    }

    /// The rank held exactly four times, if any.
    pub fn quad(&self) -> Option<Rank> {
        self.buckets.iter().find(|(_, n)| *n == 4).map(|(r, _)| *r)
    }

    /// The rank held exactly three times, if any.
    pub fn trips(&self) -> Option<Rank> {
        self.buckets.iter().find(|(_, n)| *n == 3).map(|(r, _)| *r)
    }

    /// All ranks held exactly twice, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.buckets.iter().filter(|(_, n)| *n == 2).map(|(r, _)| *r).collect()
    }

    /// Exactly two buckets of size two.
    pub fn is_two_pair(&self) -> bool {
        self.buckets.iter().filter(|(_, n)| *n == 2).count() == 2
    }

    /// A size-three bucket and a size-two bucket together.
    pub fn is_full_house(&self) -> bool {
        self.trips().is_some() && self.buckets.iter().any(|(_, n)| *n == 2)
    }

    /// The distinct ranks in bucket order, padded with `Two` to a fixed
    /// width of five. Hands of the same category always have the same
    /// number of real entries, so the padding never decides a comparison.
    pub fn tiebreak(&self) -> [Rank; 5] {
        let mut out = [Rank::Two; 5];
        for (slot, (rank, _)) in out.iter_mut().zip(self.buckets.iter()) {
            *slot = *rank;
        }
        out
    }

    #[cfg(test)]
    pub fn buckets(&self) -> &[(Rank, u8)] {
        &self.buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_of(entries: &[(u8, u8)]) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for &(strength, n) in entries {
            counts[strength as usize] = n;
        }
        counts
    }

    #[test]
    fn quad_is_exactly_four() {
        let b = RankBuckets::from_counts(&counts_of(&[(14, 4), (13, 1)]));
        assert_eq!(b.quad(), Some(Rank::Ace));
        assert_eq!(b.trips(), None);
        assert!(b.pairs().is_empty());
        assert_eq!(b.tiebreak()[..2], [Rank::Ace, Rank::King]);
    }

    #[test]
    fn trips_is_exactly_three() {
        let b = RankBuckets::from_counts(&counts_of(&[(10, 3), (5, 1), (3, 1)]));
        assert_eq!(b.trips(), Some(Rank::Ten));
        assert_eq!(b.quad(), None);
        assert!(!b.is_full_house());
    }

    #[test]
    fn full_house_needs_both_buckets() {
        let b = RankBuckets::from_counts(&counts_of(&[(14, 3), (13, 2)]));
        assert!(b.is_full_house());
        assert_eq!(b.tiebreak()[..2], [Rank::Ace, Rank::King]);
    }

    #[test]
    fn two_pair_is_exactly_two_buckets_of_two() {
        let b = RankBuckets::from_counts(&counts_of(&[(14, 2), (13, 2), (10, 1)]));
        assert!(b.is_two_pair());
        assert_eq!(b.tiebreak()[..3], [Rank::Ace, Rank::King, Rank::Ten]);
        let one = RankBuckets::from_counts(&counts_of(&[(8, 2), (14, 1), (12, 1), (5, 1)]));
        assert!(!one.is_two_pair());
    }

    #[test]
    fn buckets_sort_by_count_then_rank() {
        let b = RankBuckets::from_counts(&counts_of(&[(5, 2), (14, 1), (10, 2)]));
        let order: Vec<Rank> = b.buckets().iter().map(|(r, _)| *r).collect();
        assert_eq!(order, vec![Rank::Ten, Rank::Five, Rank::Ace]);
    }

    #[test]
    fn tiebreak_pads_with_two() {
        let b = RankBuckets::from_counts(&counts_of(&[(14, 4), (13, 1)]));
        assert_eq!(b.tiebreak(), [Rank::Ace, Rank::King, Rank::Two, Rank::Two, Rank::Two]);
    }
}
